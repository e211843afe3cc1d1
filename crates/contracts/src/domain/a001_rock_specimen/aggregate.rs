use serde::{Deserialize, Serialize};

use crate::domain::common::Category;

/// Rock specimen as stored in the catalog.
///
/// `code` is the human-readable unique key the store upserts on. Everything
/// past the four required fields is optional descriptive data; spreadsheet
/// templates leave most of it blank, so every optional field defaults to an
/// empty string rather than `Option<String>` (the admin UI and the import
/// pipeline both treat blank and absent the same way).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockSpecimen {
    pub code: String,
    pub name: String,
    pub category: Category,

    #[serde(rename = "specimenType", default)]
    pub specimen_type: String,

    // Common descriptive fields
    #[serde(default)]
    pub color: String,
    #[serde(rename = "mineralComposition", default)]
    pub mineral_composition: String,
    #[serde(default)]
    pub texture: String,
    #[serde(rename = "grainSize", default)]
    pub grain_size: String,
    #[serde(default)]
    pub hardness: String,
    #[serde(default)]
    pub coordinates: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub description: String,

    // Sedimentary only
    #[serde(default)]
    pub bedding: String,
    #[serde(default)]
    pub sorting: String,
    #[serde(default)]
    pub roundness: String,
    #[serde(rename = "fossilContent", default)]
    pub fossil_content: String,

    // Igneous only
    #[serde(rename = "silicaContent", default)]
    pub silica_content: String,
    #[serde(rename = "coolingRate", default)]
    pub cooling_rate: String,

    // Metamorphic only
    #[serde(default)]
    pub foliation: String,
    #[serde(rename = "parentRock", default)]
    pub parent_rock: String,

    // Ore samples only
    #[serde(rename = "commodityType", default)]
    pub commodity_type: String,
    #[serde(rename = "oreGroup", default)]
    pub ore_group: String,
    #[serde(rename = "typeOfDeposit", default)]
    pub type_of_deposit: String,
    #[serde(rename = "miningCompany", default)]
    pub mining_company: String,
}

impl RockSpecimen {
    /// Bare record with the required identity fields; used by the record
    /// builder before the category-specific fields are filled in.
    pub fn new(code: String, name: String, category: Category) -> Self {
        Self {
            code,
            name,
            category,
            specimen_type: String::new(),
            color: String::new(),
            mineral_composition: String::new(),
            texture: String::new(),
            grain_size: String::new(),
            hardness: String::new(),
            coordinates: String::new(),
            locality: String::new(),
            description: String::new(),
            bedding: String::new(),
            sorting: String::new(),
            roundness: String::new(),
            fossil_content: String::new(),
            silica_content: String::new(),
            cooling_rate: String::new(),
            foliation: String::new(),
            parent_rock: String::new(),
            commodity_type: String::new(),
            ore_group: String::new(),
            type_of_deposit: String::new(),
            mining_company: String::new(),
        }
    }
}
