//! # fq-annotate
//!
//! A library for extracting structured metadata from Illumina read
//! identifiers in FASTQ files.
//!
//! Sequencing reads carry acquisition metadata encoded in their header line:
//! which instrument produced them, where on the flow cell they were imaged,
//! which end of a read pair they are. Two naming conventions are in
//! circulation — the pre-1.8 style with a `#index/pair` suffix, and the
//! Casava 1.8+ style with a space-separated `pair:filter:control:index`
//! block. `fq-annotate` decides which convention an identifier follows,
//! extracts its fields with proper types, and attaches them to the record.
//!
//! ## Features
//!
//! - **Classification**: anchored grammars for both conventions, tried
//!   legacy-first; anything else is an error carrying the offending input
//! - **Typed fields**: lane/tile/coordinates as integers, filter flag as a
//!   boolean, instrument/flow cell/barcode as text
//! - **All-or-nothing annotation**: a record's metadata is either extended
//!   with the full field set of one variant or left untouched
//! - **Streaming**: plain or gzipped FASTQ, one record at a time
//!
//! ## Example
//!
//! ```rust
//! use fq_annotate::{classify, FormatVariant};
//!
//! let name = classify("@HWUSI-EAS100R:6:73:941:1973#0/1").unwrap();
//! assert_eq!(name.variant(), FormatVariant::Legacy);
//!
//! let fields = name.fields();
//! assert_eq!(fields.len(), 7);
//! assert_eq!(fields.get("Lane").unwrap().to_string(), "6");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: field maps, typed read names, and FASTQ records
//! - [`parsing`]: the identifier classifier and the FASTQ reader
//! - [`annotate`]: attaching classified fields to records
//! - [`cli`]: command-line interface implementation

pub mod annotate;
pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::annotate::annotate_record;
pub use crate::core::fields::{FieldMap, FieldValue};
pub use crate::core::read_name::{FormatVariant, LegacyReadName, ModernReadName, ReadName};
pub use crate::core::record::FastqRecord;
pub use crate::parsing::read_id::{classify, ReadIdError};
