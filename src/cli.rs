use clap::Parser;

#[derive(Parser)]
#[command(
    name = "headstamp",
    about = "Prepend a standard license header to source trees",
    version
)]
pub struct Cli {
    /// Root directories to scan (default: current directory)
    #[arg(default_value = ".")]
    pub roots: Vec<String>,

    /// Extensions to process (comma-separated; leading dot optional)
    #[arg(
        short,
        long = "ext",
        value_delimiter = ',',
        default_value = ".vhd,.tcl,.v,.dep"
    )]
    pub ext: Vec<String>,

    /// Report what would change without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// List every directory and file visited
    #[arg(short, long)]
    pub verbose: bool,
}
