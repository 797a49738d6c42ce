//! Core data types for read-identifier classification.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`FieldValue`], [`FieldMap`]: typed metadata values and the ordered
//!   per-record metadata store
//! - [`FormatVariant`]: which naming convention an identifier follows
//! - [`LegacyReadName`], [`ModernReadName`], [`ReadName`]: typed views of a
//!   successfully classified identifier
//! - [`FastqRecord`]: a read plus its metadata store
//!
//! ## Identifier conventions
//!
//! Two Illumina base-caller conventions are supported:
//!
//! | Variant | Shape |
//! |---------|-------|
//! | Legacy (pre-1.8) | `@instrument:lane:tile:x:y#index/pair` |
//! | Modern (1.8+)    | `@instrument:run:flowcell:lane:tile:x:y pair:filter:control:index` |
//!
//! The delimiter after the y coordinate differs (`#` vs. a space), so no
//! identifier can satisfy both grammars.
//!
//! [`FieldValue`]: fields::FieldValue
//! [`FieldMap`]: fields::FieldMap
//! [`FormatVariant`]: read_name::FormatVariant
//! [`LegacyReadName`]: read_name::LegacyReadName
//! [`ModernReadName`]: read_name::ModernReadName
//! [`ReadName`]: read_name::ReadName
//! [`FastqRecord`]: record::FastqRecord

pub mod fields;
pub mod read_name;
pub mod record;
