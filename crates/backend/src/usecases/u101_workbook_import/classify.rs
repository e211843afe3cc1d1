//! Sheet/row category inference.
//!
//! Sheet names are the most human-curated signal, so they are checked first;
//! content-based ore detection exists because one workbook variant kept ore
//! samples on a sheet without "ore" in its name. Strict priority order,
//! first matching rule wins, no confidence scoring.

use contracts::domain::common::Category;

use super::columns::{resolve, RawRow, ORE_INDICATOR_HEADERS};

const IGNEOUS_KEYWORDS: &[&str] = &["igneous", "volcanic", "plutonic"];
const SEDIMENTARY_KEYWORDS: &[&str] = &["sedimentary", "sediment"];
const METAMORPHIC_KEYWORDS: &[&str] = &["metamorphic", "metam"];

/// Pure function of (sheet name, row content, resolved name).
pub fn classify(sheet_name: &str, row: &RawRow, resolved_name: &str) -> Category {
    let sheet = sheet_name.to_lowercase();

    if IGNEOUS_KEYWORDS.iter().any(|k| sheet.contains(k)) {
        return Category::Igneous;
    }
    if SEDIMENTARY_KEYWORDS.iter().any(|k| sheet.contains(k)) {
        return Category::Sedimentary;
    }
    if METAMORPHIC_KEYWORDS.iter().any(|k| sheet.contains(k)) {
        return Category::Metamorphic;
    }
    if is_ore_row(&sheet, row, resolved_name) {
        return Category::OreSamples;
    }

    // Uncategorized sheet: the raw sheet name becomes the category.
    Category::Other(sheet_name.trim().to_string())
}

fn is_ore_row(sheet_lower: &str, row: &RawRow, resolved_name: &str) -> bool {
    if sheet_lower.contains("ore") || resolved_name.to_lowercase().contains("ore") {
        return true;
    }
    ORE_INDICATOR_HEADERS
        .iter()
        .any(|&header| !resolve(row, &[header]).is_empty())
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
    fn test_sheet_name_keywords() {
        let empty = RawRow::new();
        assert_eq!(classify("Igneous Rocks", &empty, ""), Category::Igneous);
        assert_eq!(classify("VOLCANIC samples", &empty, ""), Category::Igneous);
        assert_eq!(classify("Plutonic", &empty, ""), Category::Igneous);
        assert_eq!(classify("Sedimentary", &empty, ""), Category::Sedimentary);
        assert_eq!(classify("Sediments 2023", &empty, ""), Category::Sedimentary);
        assert_eq!(classify("Metamorphic Rocks", &empty, ""), Category::Metamorphic);
        assert_eq!(classify("Metam.", &empty, ""), Category::Metamorphic);
        assert_eq!(classify("Ore Samples", &empty, ""), Category::OreSamples);
    }

    #[test]
    fn test_sheet_name_beats_row_content() {
        // An igneous sheet stays igneous even when the row carries ore fields.
        let r = row(&[("Ore Group", "Sulfide")]);
        assert_eq!(classify("Igneous", &r, ""), Category::Igneous);
    }

    #[test]
    fn test_ore_by_resolved_name() {
        let empty = RawRow::new();
        assert_eq!(
            classify("Samples", &empty, "Iron Ore"),
            Category::OreSamples
        );
    }

    #[test]
    fn test_ore_by_indicator_headers() {
        // Scenario: "Economic Geology" sheet with commodity columns and no
        // name at all still lands in Ore Samples.
        let r = row(&[("Type of Commodity", "Gold"), ("Mining Company", "Acme Corp")]);
        assert_eq!(classify("Economic Geology", &r, ""), Category::OreSamples);
    }

    #[test]
    fn test_blank_indicator_values_do_not_trigger_ore() {
        let r = row(&[("Ore Group", "   ")]);
        assert_eq!(
            classify("Misc Samples", &r, ""),
            Category::Other("Misc Samples".into())
        );
    }

    #[test]
    fn test_fallback_keeps_sheet_name() {
        let empty = RawRow::new();
        assert_eq!(
            classify("Field Trip 2019", &empty, "Quartzite"),
            Category::Other("Field Trip 2019".into())
        );
    }

    #[test]
    fn test_pure_function_same_inputs_same_output() {
        let r = row(&[("Type of Commodity", "Copper")]);
        let a = classify("Samples", &r, "Chalcopyrite");
        let b = classify("Samples", &r, "Chalcopyrite");
        assert_eq!(a, b);
    }
}
