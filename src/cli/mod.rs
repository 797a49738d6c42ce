//! Command-line interface for fq-annotate.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **annotate**: Stream a FASTQ file and attach identifier metadata to each read
//! - **classify**: Classify a single read identifier (or a list from stdin)
//!
//! ## Usage
//!
//! ```text
//! # Annotate a FASTQ file, one JSON object per read
//! fq-annotate annotate sample.fastq.gz --format json
//!
//! # Pipe from another tool
//! zcat sample.fastq.gz | fq-annotate annotate -
//!
//! # Skip reads with unrecognized identifiers instead of aborting
//! fq-annotate annotate sample.fastq --skip-invalid
//!
//! # Classify one identifier
//! fq-annotate classify '@HWUSI-EAS100R:6:73:941:1973#0/1'
//! ```

use clap::{Parser, Subcommand};

use crate::core::fields::FieldMap;
use crate::core::read_name::FormatVariant;

pub mod annotate;
pub mod classify;

#[derive(Parser)]
#[command(name = "fq-annotate")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Annotate FASTQ reads with metadata parsed from Illumina read identifiers")]
#[command(
    long_about = "fq-annotate parses the read identifiers of a FASTQ file against the two Illumina naming conventions (pre-1.8 and Casava 1.8+) and attaches the extracted fields to each read.\n\nIdentifiers that match neither convention abort the stream by default; use --skip-invalid to warn and continue instead."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate every read in a FASTQ file
    Annotate(annotate::AnnotateArgs),

    /// Classify a single read identifier
    Classify(classify::ClassifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Column order for TSV output; blank where a field does not apply to the variant
const TSV_FIELDS: [&str; 12] = [
    "Instrument",
    "Run",
    "FlowCell",
    "Lane",
    "Tile",
    "X",
    "Y",
    "Index",
    "PairMember",
    "IsFiltered",
    "ControlBits",
    "IndexSequence",
];

pub(crate) fn tsv_header(first_column: &str) -> String {
    format!(
        "{first_column}\tvariant\tinstrument\trun\tflowcell\tlane\ttile\tx\ty\tindex\tpair_member\tis_filtered\tcontrol_bits\tindex_sequence"
    )
}

pub(crate) fn tsv_row(id: &str, variant: FormatVariant, fields: &FieldMap) -> String {
    let mut row = format!("{id}\t{variant}");
    for field in TSV_FIELDS {
        row.push('\t');
        if let Some(value) = fields.get(field) {
            row.push_str(&value.to_string());
        }
    }
    row
}
