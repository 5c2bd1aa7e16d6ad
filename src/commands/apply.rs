use std::path::PathBuf;

use console::style;
use headstamp::{execute_plan, plan_apply, ApplyOptions, FileFailure};
use miette::Result;

pub fn run(roots: Vec<String>, ext: Vec<String>, dry_run: bool, verbose: bool) -> Result<()> {
    let options = ApplyOptions {
        roots: roots.into_iter().map(PathBuf::from).collect(),
        extensions: ext,
        verbose,
    };

    let plan = plan_apply(options)?;

    for (root, ext) in &plan.unmatched {
        eprintln!(
            "{} no files with extension {} found under {}",
            style("warning:").yellow().bold(),
            style(ext).cyan(),
            root.display()
        );
    }

    for path in &plan.already_headered {
        println!("  {} {}", style("skip ").dim(), path.display());
    }

    if dry_run {
        println!(
            "\n{} Dry run \u{2014} files that would be patched:",
            style("==>").cyan().bold()
        );
        for item in &plan.patches {
            println!("  {} {}", style("patch").green(), item.path.display());
        }
        report_failures(&plan.failures);
        println!(
            "\n{} Dry run \u{2014} no files written.",
            style("\u{2139}").blue().bold()
        );
        return Ok(());
    }

    for item in &plan.patches {
        println!("  {} {}", style("patch").green(), item.path.display());
    }

    let outcome = execute_plan(&plan);

    report_failures(&plan.failures);
    report_failures(&outcome.failures);

    println!(
        "\n{} {} files patched, {} skipped, {} failed",
        style("\u{2713}").green().bold(),
        outcome.patched.len(),
        plan.already_headered.len(),
        plan.failures.len() + outcome.failures.len()
    );

    Ok(())
}

fn report_failures(failures: &[FileFailure]) {
    for failure in failures {
        eprintln!(
            "{} {}: {}",
            style("error:").red().bold(),
            failure.path.display(),
            failure.error
        );
    }
}
