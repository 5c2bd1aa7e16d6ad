mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    commands::apply::run(cli.roots, cli.ext, cli.dry_run, cli.verbose)
}
