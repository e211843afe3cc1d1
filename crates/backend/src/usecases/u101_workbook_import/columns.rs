//! Header-alias resolution for spreadsheet rows.
//!
//! The specimen workbooks come from a human-maintained template whose column
//! headers drift between file versions ("Rock Name" vs "Sample Name" vs just
//! "Rock"). Every logical field therefore carries an ordered alias list, and
//! resolution takes the first alias with a non-blank value. Headers are
//! trimmed once at workbook-parse time, so the alias tables below never need
//! whitespace variants; matching stays case-sensitive on the trimmed text.

use std::collections::HashMap;

/// One spreadsheet row: header text -> stringified cell value.
/// Blank cells are never inserted, so `get` returning `None` and a blank
/// value mean the same thing.
pub type RawRow = HashMap<String, String>;

/// First candidate header with a non-blank (trimmed) value wins; blank
/// string when none match. Missing identity fields are the caller's problem,
/// never an error here.
pub fn resolve(row: &RawRow, candidates: &[&str]) -> String {
    for header in candidates {
        if let Some(value) = row.get(*header) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    String::new()
}

/// Headers whose mere presence (with a value) marks a row as an ore sample.
/// One historical workbook variant had no dedicated "Ore" sheet, so the
/// classifier falls back to row content via this list.
pub const ORE_INDICATOR_HEADERS: &[&str] = &[
    "Type of Commodity",
    "Ore Group",
    "Type of Deposit",
    "Mining Company",
    "Mining Company/Donated by",
];

/// Coordinate fields shared by both entities.
pub const COORDINATES: &[&str] = &["Coordinates", "Coordinates (Lat, Long)", "GPS Coordinates"];
pub const LATITUDE: &[&str] = &["Latitude", "Lat"];
pub const LONGITUDE: &[&str] = &["Longitude", "Long", "Lng"];

/// Alias table for rock workbooks.
pub mod rock {
    pub const NAME: &[&str] = &["Rock Name", "Name", "Sample Name", "Rock", "Sample"];
    pub const CODE: &[&str] = &["Rock Code", "Code", "Sample Code", "Rock No.", "Sample No."];
    pub const TYPE: &[&str] = &["Rock Type", "Type", "Sample Type"];
    pub const COLOR: &[&str] = &["Color", "Colour"];
    pub const MINERAL_COMPOSITION: &[&str] =
        &["Mineral Composition", "Composition", "Minerals Present"];
    pub const TEXTURE: &[&str] = &["Texture"];
    pub const GRAIN_SIZE: &[&str] = &["Grain Size", "Grain size"];
    pub const HARDNESS: &[&str] = &["Hardness"];
    pub const LOCALITY: &[&str] = &["Locality", "Location", "Place Collected"];
    pub const DESCRIPTION: &[&str] = &["Description", "Remarks", "Notes"];

    // Sedimentary
    pub const BEDDING: &[&str] = &["Bedding", "Bedding/Lamination"];
    pub const SORTING: &[&str] = &["Sorting"];
    pub const ROUNDNESS: &[&str] = &["Roundness", "Rounding"];
    pub const FOSSIL_CONTENT: &[&str] = &["Fossil Content", "Fossils"];

    // Igneous
    pub const SILICA_CONTENT: &[&str] = &["Silica Content", "Silica content"];
    pub const COOLING_RATE: &[&str] = &["Cooling Rate", "Rate of Cooling"];

    // Metamorphic
    pub const FOLIATION: &[&str] = &["Foliation", "Foliated/Non-foliated"];
    pub const PARENT_ROCK: &[&str] = &["Parent Rock", "Protolith"];

    // Ore samples
    pub const COMMODITY_TYPE: &[&str] = &["Type of Commodity", "Commodity", "Commodity Type"];
    pub const ORE_GROUP: &[&str] = &["Ore Group"];
    pub const TYPE_OF_DEPOSIT: &[&str] = &["Type of Deposit", "Deposit Type"];
    pub const MINING_COMPANY: &[&str] =
        &["Mining Company", "Mining Company/Donated by", "Donated by"];
}

/// Alias table for mineral workbooks.
pub mod mineral {
    pub const NAME: &[&str] = &["Mineral Name", "Name", "Sample Name", "Mineral"];
    pub const CODE: &[&str] = &["Mineral Code", "Code", "Sample Code", "Mineral No."];
    pub const TYPE: &[&str] = &["Mineral Type", "Type", "Mineral Group"];
    pub const HARDNESS: &[&str] = &["Hardness", "Mohs Hardness"];
    pub const LUSTER: &[&str] = &["Luster", "Lustre"];
    pub const STREAK: &[&str] = &["Streak"];
    pub const CRYSTAL_SYSTEM: &[&str] = &["Crystal System", "Crystal system"];
    pub const CHEMICAL_FORMULA: &[&str] =
        &["Chemical Formula", "Formula", "Chemical Composition"];
    pub const COLOR: &[&str] = &["Color", "Colour"];
    pub const CLEAVAGE: &[&str] = &["Cleavage"];
    pub const FRACTURE: &[&str] = &["Fracture"];
    pub const SPECIFIC_GRAVITY: &[&str] = &["Specific Gravity", "SG"];
    pub const OCCURRENCE: &[&str] = &["Occurrence", "Mode of Occurrence"];
    pub const USES: &[&str] = &["Uses", "Economic Uses"];
    pub const LOCALITY: &[&str] = &["Locality", "Location", "Place Collected"];
    pub const DESCRIPTION: &[&str] = &["Description", "Remarks", "Notes"];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let r = row(&[("Name", "Basalt"), ("Rock Name", "Granite")]);
        assert_eq!(resolve(&r, rock::NAME), "Granite");
    }

    #[test]
    fn test_resolve_falls_through_blank_values() {
        let r = row(&[("Rock Name", "   "), ("Sample Name", "Shale")]);
        assert_eq!(resolve(&r, rock::NAME), "Shale");
    }

    #[test]
    fn test_resolve_trims_value() {
        let r = row(&[("Hardness", " 6-7 ")]);
        assert_eq!(resolve(&r, rock::HARDNESS), "6-7");
    }

    #[test]
    fn test_resolve_missing_is_blank() {
        let r = row(&[("Unrelated", "x")]);
        assert_eq!(resolve(&r, rock::NAME), "");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let r = row(&[("rock name", "Granite")]);
        assert_eq!(resolve(&r, rock::NAME), "");
    }
}
