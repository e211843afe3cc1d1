use chrono::Utc;
use contracts::domain::a002_mineral_specimen::MineralSpecimen;
use contracts::domain::common::Category;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

/// SeaORM entity for a002_mineral_specimen, upserted by `code`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_mineral_specimen")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub category: String,
    pub specimen_type: String,
    pub hardness: String,
    pub luster: String,
    pub streak: String,
    pub crystal_system: String,
    pub chemical_formula: String,
    pub color: String,
    pub cleavage: String,
    pub fracture: String,
    pub specific_gravity: String,
    pub occurrence: String,
    pub uses: String,
    pub coordinates: String,
    pub locality: String,
    pub description: String,
    #[sea_orm(nullable)]
    pub created_at: Option<String>,
    #[sea_orm(nullable)]
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MineralSpecimen {
    fn from(m: Model) -> Self {
        MineralSpecimen {
            code: m.code,
            name: m.name,
            category: Category::from(m.category),
            specimen_type: m.specimen_type,
            hardness: m.hardness,
            luster: m.luster,
            streak: m.streak,
            crystal_system: m.crystal_system,
            chemical_formula: m.chemical_formula,
            color: m.color,
            cleavage: m.cleavage,
            fracture: m.fracture,
            specific_gravity: m.specific_gravity,
            occurrence: m.occurrence,
            uses: m.uses,
            coordinates: m.coordinates,
            locality: m.locality,
            description: m.description,
        }
    }
}

fn to_active(record: &MineralSpecimen, now: &str) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        code: Set(record.code.clone()),
        name: Set(record.name.clone()),
        category: Set(record.category.to_string()),
        specimen_type: Set(record.specimen_type.clone()),
        hardness: Set(record.hardness.clone()),
        luster: Set(record.luster.clone()),
        streak: Set(record.streak.clone()),
        crystal_system: Set(record.crystal_system.clone()),
        chemical_formula: Set(record.chemical_formula.clone()),
        color: Set(record.color.clone()),
        cleavage: Set(record.cleavage.clone()),
        fracture: Set(record.fracture.clone()),
        specific_gravity: Set(record.specific_gravity.clone()),
        occurrence: Set(record.occurrence.clone()),
        uses: Set(record.uses.clone()),
        coordinates: Set(record.coordinates.clone()),
        locality: Set(record.locality.clone()),
        description: Set(record.description.clone()),
        created_at: Set(Some(now.to_string())),
        updated_at: Set(Some(now.to_string())),
    }
}

fn upsert_columns() -> Vec<Column> {
    vec![
        Column::Name,
        Column::Category,
        Column::SpecimenType,
        Column::Hardness,
        Column::Luster,
        Column::Streak,
        Column::CrystalSystem,
        Column::ChemicalFormula,
        Column::Color,
        Column::Cleavage,
        Column::Fracture,
        Column::SpecificGravity,
        Column::Occurrence,
        Column::Uses,
        Column::Coordinates,
        Column::Locality,
        Column::Description,
        Column::UpdatedAt,
    ]
}

/// Insert-or-update one batch keyed by `code`. Full-record overwrite on
/// conflict; `id` and `created_at` keep their original values.
pub async fn upsert_batch(records: &[MineralSpecimen]) -> anyhow::Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    let now = Utc::now().to_rfc3339();
    let models: Vec<ActiveModel> = records.iter().map(|r| to_active(r, &now)).collect();

    Entity::insert_many(models)
        .on_conflict(
            OnConflict::column(Column::Code)
                .update_columns(upsert_columns())
                .to_owned(),
        )
        .exec(get_connection())
        .await?;
    Ok(())
}

pub async fn list_all() -> anyhow::Result<Vec<MineralSpecimen>> {
    let items = Entity::find()
        .order_by_asc(Column::Code)
        .all(get_connection())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}

pub async fn get_by_code(code: &str) -> anyhow::Result<Option<MineralSpecimen>> {
    let item = Entity::find()
        .filter(Column::Code.eq(code))
        .one(get_connection())
        .await?;
    Ok(item.map(Into::into))
}

pub async fn exists_by_code(code: &str) -> anyhow::Result<bool> {
    let found = Entity::find()
        .filter(Column::Code.eq(code))
        .one(get_connection())
        .await?;
    Ok(found.is_some())
}

pub async fn delete_by_code(code: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_many()
        .filter(Column::Code.eq(code))
        .exec(get_connection())
        .await?;
    Ok(result.rows_affected > 0)
}
