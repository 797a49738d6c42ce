//! FASTQ reading using noodles.
//!
//! Wraps the noodles FASTQ reader to yield [`FastqRecord`]s with the header
//! line split into name and description. Supports both uncompressed and
//! gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fastq`, `.fq` (uncompressed)
//! - `.fastq.gz`, `.fq.gz`, `.fastq.bgz`, `.fq.bgz` (compressed)
//!
//! Records are produced lazily, one at a time, and the stream is not
//! restartable once consumed.

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fastq;
use thiserror::Error;

use crate::core::record::FastqRecord;

#[derive(Error, Debug)]
pub enum FastqError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTQ record: {0}")]
    InvalidRecord(String),
}

/// Check if the path has a FASTQ extension
pub fn is_fastq_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for compressed FASTQ
    if path_str.ends_with(".fastq.gz")
        || path_str.ends_with(".fq.gz")
        || path_str.ends_with(".fastq.bgz")
        || path_str.ends_with(".fq.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTQ
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fastq" | "fq")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// A FASTQ record stream over any buffered reader
pub struct FastqReader<R: BufRead> {
    inner: fastq::io::Reader<R>,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: fastq::io::Reader::new(reader),
        }
    }

    /// Iterate over records, lazily.
    ///
    /// Each item is a [`FastqRecord`] with empty metadata; annotation is a
    /// separate step. Malformed records surface as
    /// [`FastqError::InvalidRecord`].
    pub fn records(&mut self) -> impl Iterator<Item = Result<FastqRecord, FastqError>> + '_ {
        self.inner.records().map(|result| {
            result.map(|record| convert(&record)).map_err(|e| {
                if e.kind() == std::io::ErrorKind::InvalidData {
                    FastqError::InvalidRecord(e.to_string())
                } else {
                    FastqError::Io(e)
                }
            })
        })
    }
}

/// Open a FASTQ file, transparently decompressing gzip input.
///
/// # Errors
///
/// Returns `FastqError::Io` if the file cannot be opened.
pub fn open(path: &Path) -> Result<FastqReader<Box<dyn BufRead>>, FastqError> {
    let file = std::fs::File::open(path)?;

    let reader: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(FastqReader::new(reader))
}

/// Read FASTQ records from stdin
#[must_use]
pub fn stdin() -> FastqReader<Box<dyn BufRead>> {
    FastqReader::new(Box::new(BufReader::new(std::io::stdin())))
}

/// Convert a noodles record, splitting name and description
fn convert(record: &fastq::Record) -> FastqRecord {
    let name = String::from_utf8_lossy(record.name()).into_owned();

    let mut converted = FastqRecord::new(
        name,
        record.sequence().to_vec(),
        record.quality_scores().to_vec(),
    );

    let description = record.description();
    if !description.is_empty() {
        converted = converted.with_description(String::from_utf8_lossy(description).into_owned());
    }

    converted
}
