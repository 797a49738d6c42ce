//! Parsers for FASTQ streams and read identifiers.
//!
//! This module provides:
//!
//! - **Read identifiers**: classify a raw header line against the legacy
//!   (pre-1.8) and modern (Casava 1.8+) Illumina naming conventions
//! - **FASTQ files**: stream records from plain or gzip-compressed files
//!
//! ## Example
//!
//! ```rust
//! use fq_annotate::parsing::read_id::classify;
//! use fq_annotate::core::read_name::FormatVariant;
//!
//! let name = classify("@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:N:0:CGATGT").unwrap();
//! assert_eq!(name.variant(), FormatVariant::Modern);
//!
//! let fields = name.fields();
//! assert_eq!(fields.len(), 11);
//! ```
//!
//! ## Extracted Fields
//!
//! | Field | Legacy | Modern | Type |
//! |-------|--------|--------|------|
//! | Instrument | yes | yes | text |
//! | Run | | yes | integer |
//! | FlowCell | | yes | text |
//! | Lane, Tile, X, Y | yes | yes | integer |
//! | Index | yes | | integer |
//! | PairMember | yes | yes | integer (1 or 2) |
//! | IsFiltered | | yes | boolean |
//! | ControlBits | | yes | integer |
//! | IndexSequence | | yes | text |

pub mod fastq;
pub mod read_id;
