//! Attaching classified identifier fields to records.

use crate::core::read_name::FormatVariant;
use crate::core::record::FastqRecord;
use crate::parsing::read_id::{classify, ReadIdError};

/// Classify a record's identifier and merge the resulting fields into its
/// metadata store.
///
/// Attachment is all-or-nothing: on success every field of the matched
/// variant is written (overwriting any prior value under the same key); on
/// failure the record is left untouched and the error propagates to the
/// caller, which decides whether to abort the stream or skip the record.
///
/// # Errors
///
/// Returns [`ReadIdError`] if the identifier matches neither naming
/// convention.
pub fn annotate_record(record: &mut FastqRecord) -> Result<FormatVariant, ReadIdError> {
    let name = classify(&record.raw_identifier())?;
    let variant = name.variant();

    for (key, value) in name.fields() {
        record.metadata.insert(key, value);
    }

    Ok(variant)
}
