use serde::Serialize;

use crate::core::fields::FieldMap;

/// A single FASTQ read with its attached metadata.
///
/// `name` is the header text up to the first space, `description` anything
/// after it. Casava 1.8+ identifiers put acquisition metadata after a space,
/// so both parts are needed to reconstruct the original header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FastqRecord {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip)]
    pub sequence: Vec<u8>,

    #[serde(skip)]
    pub quality: Vec<u8>,

    /// Per-record metadata store, populated by annotation
    pub metadata: FieldMap,
}

impl FastqRecord {
    pub fn new(name: impl Into<String>, sequence: Vec<u8>, quality: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sequence,
            quality,
            metadata: FieldMap::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reconstruct the full header line, including the leading `@` marker.
    ///
    /// This is the form the identifier grammars consume.
    #[must_use]
    pub fn raw_identifier(&self) -> String {
        match &self.description {
            Some(description) => format!("@{} {}", self.name, description),
            None => format!("@{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_identifier_without_description() {
        let record = FastqRecord::new("HWUSI-EAS100R:6:73:941:1973#0/1", b"ACGT".to_vec(), b"IIII".to_vec());
        assert_eq!(record.raw_identifier(), "@HWUSI-EAS100R:6:73:941:1973#0/1");
    }

    #[test]
    fn test_raw_identifier_rejoins_description() {
        let record = FastqRecord::new(
            "HWI-ST1276:73:C1162ACXX:1:1101:1208:2458",
            b"ACGT".to_vec(),
            b"IIII".to_vec(),
        )
        .with_description("1:N:0:CGATGT");

        assert_eq!(
            record.raw_identifier(),
            "@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:N:0:CGATGT"
        );
    }

    #[test]
    fn test_new_record_has_empty_metadata() {
        let record = FastqRecord::new("read1", b"ACGT".to_vec(), b"IIII".to_vec());
        assert!(record.metadata.is_empty());
    }
}
