use std::io::BufRead;

use clap::Args;
use tracing::warn;

use crate::cli::{tsv_header, tsv_row, OutputFormat};
use crate::core::read_name::ReadName;
use crate::parsing::read_id::classify;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Full header line including the leading '@'
    /// Use '-' to read one identifier per line from stdin
    #[arg(required = true)]
    pub identifier: String,
}

/// Execute classify subcommand
///
/// # Errors
///
/// In single-identifier mode, returns an error if the identifier matches
/// neither naming convention. In stdin mode unrecognized lines are reported
/// and skipped.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if args.identifier == "-" {
        run_stdin(format, verbose)
    } else {
        let name = classify(&args.identifier)?;
        print_single(&args.identifier, &name, format)
    }
}

fn run_stdin(format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if matches!(format, OutputFormat::Tsv) {
        println!("{}", tsv_header("identifier"));
    }

    let mut classified = 0u64;
    let mut unrecognized = 0u64;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        match classify(&line) {
            Ok(name) => {
                classified += 1;
                print_line(&line, &name, format)?;
            }
            Err(e) => {
                unrecognized += 1;
                warn!("{e}");
            }
        }
    }

    if verbose {
        eprintln!("Classified {classified} identifiers, {unrecognized} unrecognized");
    }

    Ok(())
}

fn print_single(identifier: &str, name: &ReadName, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text(identifier, name),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "identifier": identifier,
                "variant": name.variant(),
                "fields": name.fields(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Tsv => {
            println!("{}", tsv_header("identifier"));
            println!("{}", tsv_row(identifier, name.variant(), &name.fields()));
        }
    }

    Ok(())
}

/// One output line per input line, for stdin mode
fn print_line(identifier: &str, name: &ReadName, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text(identifier, name),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "identifier": identifier,
                "variant": name.variant(),
                "fields": name.fields(),
            });
            println!("{}", serde_json::to_string(&json)?);
        }
        OutputFormat::Tsv => {
            println!("{}", tsv_row(identifier, name.variant(), &name.fields()));
        }
    }

    Ok(())
}

fn print_text(identifier: &str, name: &ReadName) {
    println!("{identifier} ({})", name.variant());
    for (key, value) in name.fields().iter() {
        println!("   {key}: {value}");
    }
}
