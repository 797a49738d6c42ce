use std::path::PathBuf;

use clap::Args;
use tracing::{debug, warn};

use crate::annotate::annotate_record;
use crate::cli::{tsv_header, tsv_row, OutputFormat};
use crate::core::read_name::FormatVariant;
use crate::core::record::FastqRecord;
use crate::parsing::fastq;

#[derive(Args)]
pub struct AnnotateArgs {
    /// Input FASTQ file, plain or gzip-compressed
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Warn and skip reads with unrecognized identifiers instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Stop after this many reads
    #[arg(long)]
    pub limit: Option<u64>,
}

/// Execute annotate subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read, a record is malformed, or
/// (without `--skip-invalid`) a read identifier matches neither naming
/// convention.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut reader = if args.input.to_string_lossy() == "-" {
        fastq::stdin()
    } else {
        if !fastq::is_fastq_file(&args.input) {
            warn!(
                "{} does not have a FASTQ extension, reading it as FASTQ anyway",
                args.input.display()
            );
        }
        fastq::open(&args.input)?
    };

    if matches!(format, OutputFormat::Tsv) {
        println!("{}", tsv_header("read"));
    }

    let mut seen = 0u64;
    let mut legacy = 0u64;
    let mut modern = 0u64;
    let mut skipped = 0u64;

    for result in reader.records() {
        if args.limit.is_some_and(|limit| seen >= limit) {
            break;
        }
        seen += 1;

        let mut record = result?;
        match annotate_record(&mut record) {
            Ok(variant) => {
                match variant {
                    FormatVariant::Legacy => legacy += 1,
                    FormatVariant::Modern => modern += 1,
                }
                debug!(read = %record.name, %variant, "annotated");
                print_record(&record, variant, format)?;
            }
            Err(e) if args.skip_invalid => {
                skipped += 1;
                warn!("skipping read: {e}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    if verbose {
        eprintln!(
            "Annotated {} reads ({legacy} legacy, {modern} modern), skipped {skipped}",
            legacy + modern
        );
    }

    Ok(())
}

fn print_record(
    record: &FastqRecord,
    variant: FormatVariant,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{} ({variant})", record.raw_identifier());
            for (key, value) in record.metadata.iter() {
                println!("   {key}: {value}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "name": record.name,
                "variant": variant,
                "fields": record.metadata,
            });
            println!("{}", serde_json::to_string(&json)?);
        }
        OutputFormat::Tsv => {
            println!("{}", tsv_row(&record.name, variant, &record.metadata));
        }
    }

    Ok(())
}
