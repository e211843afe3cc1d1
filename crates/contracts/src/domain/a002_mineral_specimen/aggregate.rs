use serde::{Deserialize, Serialize};

use crate::domain::common::Category;

/// Mineral specimen as stored in the catalog. Keyed by `code` like
/// [`crate::domain::a001_rock_specimen::RockSpecimen`]; the optional fields
/// follow the mineral identification template (hardness, luster, crystal
/// system and so on), all defaulting to blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralSpecimen {
    pub code: String,
    pub name: String,
    pub category: Category,

    #[serde(rename = "specimenType", default)]
    pub specimen_type: String,

    #[serde(default)]
    pub hardness: String,
    #[serde(default)]
    pub luster: String,
    #[serde(default)]
    pub streak: String,
    #[serde(rename = "crystalSystem", default)]
    pub crystal_system: String,
    #[serde(rename = "chemicalFormula", default)]
    pub chemical_formula: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub cleavage: String,
    #[serde(default)]
    pub fracture: String,
    #[serde(rename = "specificGravity", default)]
    pub specific_gravity: String,
    #[serde(default)]
    pub occurrence: String,
    #[serde(default)]
    pub uses: String,
    #[serde(default)]
    pub coordinates: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub description: String,
}

impl MineralSpecimen {
    pub fn new(code: String, name: String, category: Category) -> Self {
        Self {
            code,
            name,
            category,
            specimen_type: String::new(),
            hardness: String::new(),
            luster: String::new(),
            streak: String::new(),
            crystal_system: String::new(),
            chemical_formula: String::new(),
            color: String::new(),
            cleavage: String::new(),
            fracture: String::new(),
            specific_gravity: String::new(),
            occurrence: String::new(),
            uses: String::new(),
            coordinates: String::new(),
            locality: String::new(),
            description: String::new(),
        }
    }
}
