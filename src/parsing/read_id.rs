//! Classification of Illumina read identifiers.
//!
//! Two grammars are recognized, both anchored at start and end of the header
//! line so stray leading or trailing characters cause rejection rather than
//! silent truncation:
//!
//! - **Legacy (pre-1.8)**: `@instrument:lane:tile:x:y#index/pair` where the
//!   instrument name is anything not containing `:`, the numeric fields are
//!   unsigned decimal integers, and the pair member is `1` or `2`.
//! - **Modern (Casava 1.8+)**:
//!   `@instrument:run:flowcell:lane:tile:x:y pair:filter:control:index` where
//!   the filter flag is `Y` or `N` and the index sequence is one or more of
//!   `A`/`C`/`G`/`T`.
//!
//! The legacy grammar is attempted first. The two grammars are mutually
//! exclusive (the character after the y coordinate is `#` in one and a space
//! in the other), so the ordering only fixes behavior for future maintenance,
//! it never breaks a tie.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::core::read_name::{LegacyReadName, ModernReadName, ReadName};

lazy_static! {
    // @instrument:lane:tile:x:y#index/pair
    static ref LEGACY_RE: Regex =
        Regex::new(r"^@([^:]+):(\d+):(\d+):(\d+):(\d+)#(\d+)/([12])$").unwrap();

    // @instrument:run:flowcell:lane:tile:x:y pair:filter:control:index
    // Instrument names carry hyphens in practice (e.g. HWI-ST1276), so the
    // character class is word characters plus '-'.
    static ref MODERN_RE: Regex = Regex::new(
        r"^@([A-Za-z0-9_-]+):(\d+):([A-Za-z0-9]+):(\d+):(\d+):(\d+):(\d+) ([12]):([YN]):(\d+):([ACGT]+)$"
    )
    .unwrap();
}

#[derive(Error, Debug)]
pub enum ReadIdError {
    #[error("unrecognized read identifier format: {0:?}")]
    UnrecognizedFormat(String),

    #[error("{field} value {value:?} is out of range")]
    FieldOutOfRange {
        field: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Classify a raw read identifier into its typed fields.
///
/// `raw` is the full header line including the leading `@` marker. Returns a
/// [`ReadName`] holding the complete field set of exactly one variant; a
/// partial field set never occurs.
///
/// The function is pure and deterministic. The compiled grammars are
/// process-wide, built once on first use, and safe to share across threads.
///
/// # Errors
///
/// Returns [`ReadIdError::UnrecognizedFormat`] carrying the offending input
/// if neither grammar matches, or [`ReadIdError::FieldOutOfRange`] if a
/// captured numeric field overflows (canonical identifiers never do).
pub fn classify(raw: &str) -> Result<ReadName, ReadIdError> {
    if let Some(caps) = LEGACY_RE.captures(raw) {
        return Ok(ReadName::Legacy(LegacyReadName {
            instrument: caps[1].to_string(),
            lane: parse_field(&caps, 2, "Lane")?,
            tile: parse_field(&caps, 3, "Tile")?,
            x: parse_field(&caps, 4, "X")?,
            y: parse_field(&caps, 5, "Y")?,
            index: parse_field(&caps, 6, "Index")?,
            pair_member: parse_field(&caps, 7, "PairMember")?,
        }));
    }

    if let Some(caps) = MODERN_RE.captures(raw) {
        return Ok(ReadName::Modern(ModernReadName {
            instrument: caps[1].to_string(),
            run: parse_field(&caps, 2, "Run")?,
            flowcell: caps[3].to_string(),
            lane: parse_field(&caps, 4, "Lane")?,
            tile: parse_field(&caps, 5, "Tile")?,
            x: parse_field(&caps, 6, "X")?,
            y: parse_field(&caps, 7, "Y")?,
            pair_member: parse_field(&caps, 8, "PairMember")?,
            // The grammar restricts the flag to Y or N
            is_filtered: &caps[9] == "Y",
            control_bits: parse_field(&caps, 10, "ControlBits")?,
            index_sequence: caps[11].to_string(),
        }));
    }

    Err(ReadIdError::UnrecognizedFormat(raw.to_string()))
}

/// Parse a captured numeric substring, surfacing overflow instead of clamping
fn parse_field<T>(caps: &Captures<'_>, index: usize, field: &'static str) -> Result<T, ReadIdError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    caps[index].parse().map_err(|source| ReadIdError::FieldOutOfRange {
        field,
        value: caps[index].to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::read_name::FormatVariant;

    const LEGACY_ID: &str = "@HWUSI-EAS100R:6:73:941:1973#0/1";
    const MODERN_ID: &str = "@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:N:0:CGATGT";

    #[test]
    fn test_classify_legacy() {
        let name = classify(LEGACY_ID).unwrap();
        assert_eq!(name.variant(), FormatVariant::Legacy);

        let ReadName::Legacy(name) = name else {
            panic!("expected legacy variant");
        };
        assert_eq!(name.instrument, "HWUSI-EAS100R");
        assert_eq!(name.lane, 6);
        assert_eq!(name.tile, 73);
        assert_eq!(name.x, 941);
        assert_eq!(name.y, 1973);
        assert_eq!(name.index, 0);
        assert_eq!(name.pair_member, 1);
    }

    #[test]
    fn test_classify_modern() {
        let name = classify(MODERN_ID).unwrap();
        assert_eq!(name.variant(), FormatVariant::Modern);

        let ReadName::Modern(name) = name else {
            panic!("expected modern variant");
        };
        assert_eq!(name.instrument, "HWI-ST1276");
        assert_eq!(name.run, 73);
        assert_eq!(name.flowcell, "C1162ACXX");
        assert_eq!(name.lane, 1);
        assert_eq!(name.tile, 1101);
        assert_eq!(name.x, 1208);
        assert_eq!(name.y, 2458);
        assert_eq!(name.pair_member, 1);
        assert!(!name.is_filtered);
        assert_eq!(name.control_bits, 0);
        assert_eq!(name.index_sequence, "CGATGT");
    }

    #[test]
    fn test_classify_modern_filtered() {
        let name = classify("@M01234:5:000000000-A1B2C:1:1101:15589:1331 2:Y:18:ATCACG").unwrap();
        let ReadName::Modern(name) = name else {
            panic!("expected modern variant");
        };
        assert_eq!(name.pair_member, 2);
        assert!(name.is_filtered);
        assert_eq!(name.control_bits, 18);
    }

    #[test]
    fn test_unrecognized_input() {
        let err = classify("not-an-identifier").unwrap_err();
        assert!(matches!(err, ReadIdError::UnrecognizedFormat(ref s) if s == "not-an-identifier"));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(classify("").is_err());
    }

    #[test]
    fn test_missing_marker_rejected() {
        assert!(classify("HWUSI-EAS100R:6:73:941:1973#0/1").is_err());
        assert!(classify("HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:N:0:CGATGT").is_err());
    }

    #[test]
    fn test_trailing_characters_rejected() {
        assert!(classify("@HWUSI-EAS100R:6:73:941:1973#0/1 ").is_err());
        assert!(classify("@HWUSI-EAS100R:6:73:941:1973#0/1x").is_err());
        assert!(classify("@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:N:0:CGATGTA extra").is_err());
    }

    #[test]
    fn test_leading_characters_rejected() {
        assert!(classify(" @HWUSI-EAS100R:6:73:941:1973#0/1").is_err());
    }

    #[test]
    fn test_pair_member_out_of_range_rejected() {
        assert!(classify("@HWUSI-EAS100R:6:73:941:1973#0/3").is_err());
        assert!(classify("@HWUSI-EAS100R:6:73:941:1973#0/0").is_err());
        assert!(classify("@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 3:N:0:CGATGT").is_err());
    }

    #[test]
    fn test_filter_flag_restricted() {
        assert!(classify("@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:X:0:CGATGT").is_err());
        assert!(classify("@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:n:0:CGATGT").is_err());
    }

    #[test]
    fn test_index_sequence_restricted_to_acgt() {
        assert!(classify("@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:N:0:CGATGU").is_err());
        assert!(classify("@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:N:0:cgatgt").is_err());
        assert!(classify("@HWI-ST1276:73:C1162ACXX:1:1101:1208:2458 1:N:0:").is_err());
    }

    #[test]
    fn test_grammars_mutually_exclusive() {
        assert!(LEGACY_RE.is_match(LEGACY_ID));
        assert!(!MODERN_RE.is_match(LEGACY_ID));
        assert!(MODERN_RE.is_match(MODERN_ID));
        assert!(!LEGACY_RE.is_match(MODERN_ID));
    }

    #[test]
    fn test_numeric_overflow_surfaced() {
        // 21 digits exceeds u64, but still matches the grammar
        let err = classify("@machine:99999999999999999999:73:941:1973#0/1").unwrap_err();
        assert!(matches!(err, ReadIdError::FieldOutOfRange { field: "Lane", .. }));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let first = classify(MODERN_ID).unwrap();
        let second = classify(MODERN_ID).unwrap();
        assert_eq!(first, second);
    }
}
