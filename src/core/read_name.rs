use serde::Serialize;

use crate::core::fields::{FieldMap, FieldValue};

/// Which read-naming convention an identifier follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatVariant {
    /// Pre-1.8 style: `@instrument:lane:tile:x:y#index/pair`
    Legacy,
    /// Casava 1.8+ style: `@instrument:run:flowcell:lane:tile:x:y pair:filter:control:index`
    Modern,
}

impl std::fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Modern => write!(f, "modern"),
        }
    }
}

/// Fields of a pre-1.8 read identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyReadName {
    /// Instrument name (anything up to the first colon)
    pub instrument: String,
    pub lane: u64,
    pub tile: u64,
    pub x: u64,
    pub y: u64,
    /// Multiplex index number from the `#` suffix
    pub index: u64,
    /// 1 or 2
    pub pair_member: u8,
}

/// Fields of a Casava 1.8+ read identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModernReadName {
    pub instrument: String,
    pub run: u64,
    pub flowcell: String,
    pub lane: u64,
    pub tile: u64,
    pub x: u64,
    pub y: u64,
    /// 1 or 2
    pub pair_member: u8,
    /// Whether the sequencer's quality filter flagged the read (`Y` in the header)
    pub is_filtered: bool,
    pub control_bits: u64,
    /// Sample barcode, one or more of A/C/G/T
    pub index_sequence: String,
}

/// A successfully classified read identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReadName {
    Legacy(LegacyReadName),
    Modern(ModernReadName),
}

impl ReadName {
    #[must_use]
    pub fn variant(&self) -> FormatVariant {
        match self {
            Self::Legacy(_) => FormatVariant::Legacy,
            Self::Modern(_) => FormatVariant::Modern,
        }
    }

    /// Flatten into a field mapping suitable for record metadata.
    ///
    /// Exactly seven entries for legacy names, eleven for modern names, in
    /// the order the fields appear in the identifier.
    #[must_use]
    pub fn fields(&self) -> FieldMap {
        let mut map = FieldMap::new();
        match self {
            Self::Legacy(name) => {
                map.insert("Instrument", FieldValue::Text(name.instrument.clone()));
                map.insert("Lane", FieldValue::Integer(name.lane));
                map.insert("Tile", FieldValue::Integer(name.tile));
                map.insert("X", FieldValue::Integer(name.x));
                map.insert("Y", FieldValue::Integer(name.y));
                map.insert("Index", FieldValue::Integer(name.index));
                map.insert(
                    "PairMember",
                    FieldValue::Integer(u64::from(name.pair_member)),
                );
            }
            Self::Modern(name) => {
                map.insert("Instrument", FieldValue::Text(name.instrument.clone()));
                map.insert("Run", FieldValue::Integer(name.run));
                map.insert("FlowCell", FieldValue::Text(name.flowcell.clone()));
                map.insert("Lane", FieldValue::Integer(name.lane));
                map.insert("Tile", FieldValue::Integer(name.tile));
                map.insert("X", FieldValue::Integer(name.x));
                map.insert("Y", FieldValue::Integer(name.y));
                map.insert(
                    "PairMember",
                    FieldValue::Integer(u64::from(name.pair_member)),
                );
                map.insert("IsFiltered", FieldValue::Boolean(name.is_filtered));
                map.insert("ControlBits", FieldValue::Integer(name.control_bits));
                map.insert(
                    "IndexSequence",
                    FieldValue::Text(name.index_sequence.clone()),
                );
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_example() -> ReadName {
        ReadName::Legacy(LegacyReadName {
            instrument: "HWUSI-EAS100R".to_string(),
            lane: 6,
            tile: 73,
            x: 941,
            y: 1973,
            index: 0,
            pair_member: 1,
        })
    }

    fn modern_example() -> ReadName {
        ReadName::Modern(ModernReadName {
            instrument: "HWI-ST1276".to_string(),
            run: 73,
            flowcell: "C1162ACXX".to_string(),
            lane: 1,
            tile: 1101,
            x: 1208,
            y: 2458,
            pair_member: 1,
            is_filtered: false,
            control_bits: 0,
            index_sequence: "CGATGT".to_string(),
        })
    }

    #[test]
    fn test_variant() {
        assert_eq!(legacy_example().variant(), FormatVariant::Legacy);
        assert_eq!(modern_example().variant(), FormatVariant::Modern);
    }

    #[test]
    fn test_legacy_fields_complete_and_ordered() {
        let fields = legacy_example().fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["Instrument", "Lane", "Tile", "X", "Y", "Index", "PairMember"]
        );
        assert_eq!(
            fields.get("Instrument"),
            Some(&FieldValue::Text("HWUSI-EAS100R".to_string()))
        );
        assert_eq!(fields.get("PairMember"), Some(&FieldValue::Integer(1)));
    }

    #[test]
    fn test_modern_fields_complete_and_ordered() {
        let fields = modern_example().fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "Instrument",
                "Run",
                "FlowCell",
                "Lane",
                "Tile",
                "X",
                "Y",
                "PairMember",
                "IsFiltered",
                "ControlBits",
                "IndexSequence"
            ]
        );
        assert_eq!(fields.get("IsFiltered"), Some(&FieldValue::Boolean(false)));
        assert_eq!(
            fields.get("IndexSequence"),
            Some(&FieldValue::Text("CGATGT".to_string()))
        );
    }

    #[test]
    fn test_format_variant_display() {
        assert_eq!(FormatVariant::Legacy.to_string(), "legacy");
        assert_eq!(FormatVariant::Modern.to_string(), "modern");
    }
}
