use chrono::Utc;
use contracts::domain::a001_rock_specimen::RockSpecimen;
use contracts::domain::common::Category;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

/// SeaORM entity for a001_rock_specimen. `code` carries the UNIQUE
/// constraint all upserts resolve against.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_rock_specimen")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub category: String,
    pub specimen_type: String,
    pub color: String,
    pub mineral_composition: String,
    pub texture: String,
    pub grain_size: String,
    pub hardness: String,
    pub coordinates: String,
    pub locality: String,
    pub description: String,
    pub bedding: String,
    pub sorting: String,
    pub roundness: String,
    pub fossil_content: String,
    pub silica_content: String,
    pub cooling_rate: String,
    pub foliation: String,
    pub parent_rock: String,
    pub commodity_type: String,
    pub ore_group: String,
    pub type_of_deposit: String,
    pub mining_company: String,
    #[sea_orm(nullable)]
    pub created_at: Option<String>,
    #[sea_orm(nullable)]
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for RockSpecimen {
    fn from(m: Model) -> Self {
        RockSpecimen {
            code: m.code,
            name: m.name,
            category: Category::from(m.category),
            specimen_type: m.specimen_type,
            color: m.color,
            mineral_composition: m.mineral_composition,
            texture: m.texture,
            grain_size: m.grain_size,
            hardness: m.hardness,
            coordinates: m.coordinates,
            locality: m.locality,
            description: m.description,
            bedding: m.bedding,
            sorting: m.sorting,
            roundness: m.roundness,
            fossil_content: m.fossil_content,
            silica_content: m.silica_content,
            cooling_rate: m.cooling_rate,
            foliation: m.foliation,
            parent_rock: m.parent_rock,
            commodity_type: m.commodity_type,
            ore_group: m.ore_group,
            type_of_deposit: m.type_of_deposit,
            mining_company: m.mining_company,
        }
    }
}

fn to_active(record: &RockSpecimen, now: &str) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        code: Set(record.code.clone()),
        name: Set(record.name.clone()),
        category: Set(record.category.to_string()),
        specimen_type: Set(record.specimen_type.clone()),
        color: Set(record.color.clone()),
        mineral_composition: Set(record.mineral_composition.clone()),
        texture: Set(record.texture.clone()),
        grain_size: Set(record.grain_size.clone()),
        hardness: Set(record.hardness.clone()),
        coordinates: Set(record.coordinates.clone()),
        locality: Set(record.locality.clone()),
        description: Set(record.description.clone()),
        bedding: Set(record.bedding.clone()),
        sorting: Set(record.sorting.clone()),
        roundness: Set(record.roundness.clone()),
        fossil_content: Set(record.fossil_content.clone()),
        silica_content: Set(record.silica_content.clone()),
        cooling_rate: Set(record.cooling_rate.clone()),
        foliation: Set(record.foliation.clone()),
        parent_rock: Set(record.parent_rock.clone()),
        commodity_type: Set(record.commodity_type.clone()),
        ore_group: Set(record.ore_group.clone()),
        type_of_deposit: Set(record.type_of_deposit.clone()),
        mining_company: Set(record.mining_company.clone()),
        created_at: Set(Some(now.to_string())),
        updated_at: Set(Some(now.to_string())),
    }
}

/// All columns rewritten when an incoming code collides with an existing row.
/// Full-record overwrite, no field-level merge; `id` and `created_at` keep
/// their original values.
fn upsert_columns() -> Vec<Column> {
    vec![
        Column::Name,
        Column::Category,
        Column::SpecimenType,
        Column::Color,
        Column::MineralComposition,
        Column::Texture,
        Column::GrainSize,
        Column::Hardness,
        Column::Coordinates,
        Column::Locality,
        Column::Description,
        Column::Bedding,
        Column::Sorting,
        Column::Roundness,
        Column::FossilContent,
        Column::SilicaContent,
        Column::CoolingRate,
        Column::Foliation,
        Column::ParentRock,
        Column::CommodityType,
        Column::OreGroup,
        Column::TypeOfDeposit,
        Column::MiningCompany,
        Column::UpdatedAt,
    ]
}

/// Insert-or-update one batch keyed by `code`.
pub async fn upsert_batch(records: &[RockSpecimen]) -> anyhow::Result<()> {
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

pub async fn list_all() -> anyhow::Result<Vec<RockSpecimen>> {
    let items = Entity::find()
        .order_by_asc(Column::Code)
        .all(get_connection())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}

pub async fn get_by_code(code: &str) -> anyhow::Result<Option<RockSpecimen>> {
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

/// Returns true if a row was actually deleted.
pub async fn delete_by_code(code: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_many()
        .filter(Column::Code.eq(code))
        .exec(get_connection())
        .await?;
    Ok(result.rows_affected > 0)
}
