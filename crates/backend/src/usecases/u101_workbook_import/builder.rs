//! Raw row -> normalized specimen record.
//!
//! A row is only ever rejected for a genuinely blank name on a non-ore
//! sheet; too many or too few optional fields are fine. Category-specific
//! field sets apply only when the category matches, so a sedimentary column
//! on an igneous sheet simply stays empty.

use contracts::domain::a001_rock_specimen::RockSpecimen;
use contracts::domain::a002_mineral_specimen::MineralSpecimen;
use contracts::domain::common::Category;

use super::columns::{self, mineral, resolve, rock, RawRow};

/// `{prefix}-{zero-padded index}` for rows without a code column.
/// `index` is the 1-based position of the row within its sheet, which makes
/// the result stable for one file but NOT across re-runs with reordered
/// rows; re-importing a rearranged spreadsheet can duplicate such records.
pub fn synthesize_code(category: &Category, index: usize) -> String {
    format!("{}-{:04}", category.code_prefix(), index)
}

/// Coordinates with a two-step fallback: an explicit coordinates column
/// wins; otherwise compose from latitude/longitude when both are present;
/// otherwise blank.
pub fn resolve_coordinates(row: &RawRow) -> String {
    let explicit = resolve(row, columns::COORDINATES);
    if !explicit.is_empty() {
        return explicit;
    }
    let lat = resolve(row, columns::LATITUDE);
    let long = resolve(row, columns::LONGITUDE);
    if !lat.is_empty() && !long.is_empty() {
        return format!("{}, {}", lat, long);
    }
    String::new()
}

/// Skip rule shared by both entities: a blank name kills the row unless the
/// row classified as an ore sample (ore rows are identified by commodity
/// columns and routinely arrive nameless).
fn skip_for_blank_name(name: &str, category: &Category) -> bool {
    name.is_empty() && *category != Category::OreSamples
}

/// Build one rock record; `None` means the row is skipped (blank name).
pub fn build_rock(category: &Category, row: &RawRow, index: usize) -> Option<RockSpecimen> {
    let name = resolve(row, rock::NAME);
    if skip_for_blank_name(&name, category) {
        return None;
    }

    let mut code = resolve(row, rock::CODE);
    if code.is_empty() {
        code = synthesize_code(category, index);
    }

    let mut record = RockSpecimen::new(code, name, category.clone());
    record.specimen_type = resolve(row, rock::TYPE);
    record.color = resolve(row, rock::COLOR);
    record.mineral_composition = resolve(row, rock::MINERAL_COMPOSITION);
    record.texture = resolve(row, rock::TEXTURE);
    record.grain_size = resolve(row, rock::GRAIN_SIZE);
    record.hardness = resolve(row, rock::HARDNESS);
    record.coordinates = resolve_coordinates(row);
    record.locality = resolve(row, rock::LOCALITY);
    record.description = resolve(row, rock::DESCRIPTION);

    match category {
        Category::Sedimentary => {
            record.bedding = resolve(row, rock::BEDDING);
            record.sorting = resolve(row, rock::SORTING);
            record.roundness = resolve(row, rock::ROUNDNESS);
            record.fossil_content = resolve(row, rock::FOSSIL_CONTENT);
        }
        Category::Igneous => {
            record.silica_content = resolve(row, rock::SILICA_CONTENT);
            record.cooling_rate = resolve(row, rock::COOLING_RATE);
        }
        Category::Metamorphic => {
            record.foliation = resolve(row, rock::FOLIATION);
            record.parent_rock = resolve(row, rock::PARENT_ROCK);
        }
        Category::OreSamples => {
            record.commodity_type = resolve(row, rock::COMMODITY_TYPE);
            record.ore_group = resolve(row, rock::ORE_GROUP);
            record.type_of_deposit = resolve(row, rock::TYPE_OF_DEPOSIT);
            record.mining_company = resolve(row, rock::MINING_COMPANY);
        }
        Category::Other(_) => {}
    }

    Some(record)
}

/// Build one mineral record; same skip rule as rocks.
pub fn build_mineral(category: &Category, row: &RawRow, index: usize) -> Option<MineralSpecimen> {
    let name = resolve(row, mineral::NAME);
    if skip_for_blank_name(&name, category) {
        return None;
    }

    let mut code = resolve(row, mineral::CODE);
    if code.is_empty() {
        code = synthesize_code(category, index);
    }

    let mut record = MineralSpecimen::new(code, name, category.clone());
    record.specimen_type = resolve(row, mineral::TYPE);
    record.hardness = resolve(row, mineral::HARDNESS);
    record.luster = resolve(row, mineral::LUSTER);
    record.streak = resolve(row, mineral::STREAK);
    record.crystal_system = resolve(row, mineral::CRYSTAL_SYSTEM);
    record.chemical_formula = resolve(row, mineral::CHEMICAL_FORMULA);
    record.color = resolve(row, mineral::COLOR);
    record.cleavage = resolve(row, mineral::CLEAVAGE);
    record.fracture = resolve(row, mineral::FRACTURE);
    record.specific_gravity = resolve(row, mineral::SPECIFIC_GRAVITY);
    record.occurrence = resolve(row, mineral::OCCURRENCE);
    record.uses = resolve(row, mineral::USES);
    record.coordinates = resolve_coordinates(row);
    record.locality = resolve(row, mineral::LOCALITY);
    record.description = resolve(row, mineral::DESCRIPTION);

    Some(record)
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
    fn test_igneous_row_with_synthesized_code() {
        let r = row(&[("Rock Name", "Granite"), ("Hardness", "6-7")]);
        let record = build_rock(&Category::Igneous, &r, 1).unwrap();
        assert_eq!(record.name, "Granite");
        assert_eq!(record.category, Category::Igneous);
        assert_eq!(record.code, "I-0001");
        assert_eq!(record.hardness, "6-7");
    }

    #[test]
    fn test_explicit_code_wins_over_synthesis() {
        let r = row(&[("Rock Name", "Basalt"), ("Rock Code", "IGN-17")]);
        let record = build_rock(&Category::Igneous, &r, 3).unwrap();
        assert_eq!(record.code, "IGN-17");
    }

    #[test]
    fn test_blank_name_skipped_on_non_ore_category() {
        let r = row(&[("Texture", "Coarse")]);
        assert!(build_rock(&Category::Metamorphic, &r, 1).is_none());
        assert!(build_mineral(&Category::Other("Minerals".into()), &r, 1).is_none());
    }

    #[test]
    fn test_blank_name_kept_on_ore_category() {
        let r = row(&[("Type of Commodity", "Gold"), ("Mining Company", "Acme Corp")]);
        let record = build_rock(&Category::OreSamples, &r, 1).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.code, "O-0001");
        assert_eq!(record.commodity_type, "Gold");
        assert_eq!(record.mining_company, "Acme Corp");
    }

    #[test]
    fn test_coordinates_composed_from_lat_long() {
        let r = row(&[
            ("Rock Name", "Chert"),
            ("Latitude", "7.0622"),
            ("Longitude", "125.6072"),
        ]);
        let record = build_rock(&Category::Sedimentary, &r, 1).unwrap();
        assert_eq!(record.coordinates, "7.0622, 125.6072");
    }

    #[test]
    fn test_explicit_coordinates_column_wins() {
        let r = row(&[
            ("Rock Name", "Chert"),
            ("Coordinates", "7.1, 125.6"),
            ("Latitude", "9.9"),
            ("Longitude", "9.9"),
        ]);
        let record = build_rock(&Category::Sedimentary, &r, 1).unwrap();
        assert_eq!(record.coordinates, "7.1, 125.6");
    }

    #[test]
    fn test_lone_latitude_leaves_coordinates_blank() {
        let r = row(&[("Rock Name", "Chert"), ("Latitude", "7.0622")]);
        let record = build_rock(&Category::Sedimentary, &r, 1).unwrap();
        assert_eq!(record.coordinates, "");
    }

    #[test]
    fn test_category_specific_fields_stay_empty_elsewhere() {
        // A sedimentary-only column on an igneous row is ignored, not an error.
        let r = row(&[("Rock Name", "Granite"), ("Sorting", "Well sorted")]);
        let record = build_rock(&Category::Igneous, &r, 1).unwrap();
        assert_eq!(record.sorting, "");
    }

    #[test]
    fn test_code_synthesis_padding_and_prefix() {
        assert_eq!(synthesize_code(&Category::Igneous, 1), "I-0001");
        assert_eq!(synthesize_code(&Category::OreSamples, 12), "O-0012");
        assert_eq!(synthesize_code(&Category::Other("Minerals".into()), 123), "M-0123");
        assert_eq!(synthesize_code(&Category::Sedimentary, 1234), "S-1234");
    }

    #[test]
    fn test_mineral_fields_populated() {
        let r = row(&[
            ("Mineral Name", "Quartz"),
            ("Mohs Hardness", "7"),
            ("Crystal System", "Trigonal"),
            ("Chemical Formula", "SiO2"),
        ]);
        let record = build_mineral(&Category::Other("Minerals".into()), &r, 2).unwrap();
        assert_eq!(record.code, "M-0002");
        assert_eq!(record.hardness, "7");
        assert_eq!(record.crystal_system, "Trigonal");
        assert_eq!(record.chemical_formula, "SiO2");
    }
}
