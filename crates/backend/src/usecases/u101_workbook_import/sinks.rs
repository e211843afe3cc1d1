//! Production sinks: the sea-orm repositories behind the store seam.

use async_trait::async_trait;
use contracts::domain::a001_rock_specimen::RockSpecimen;
use contracts::domain::a002_mineral_specimen::MineralSpecimen;

use crate::domain::{a001_rock_specimen, a002_mineral_specimen};

use super::store::{classify_store_error, SpecimenSink, StoreError};

pub struct RockStore;

#[async_trait]
impl SpecimenSink for RockStore {
    type Record = RockSpecimen;

    async fn upsert_batch(&self, batch: &[RockSpecimen]) -> Result<(), StoreError> {
        a001_rock_specimen::repository::upsert_batch(batch)
            .await
            .map_err(classify_store_error)
    }
}

pub struct MineralStore;

#[async_trait]
impl SpecimenSink for MineralStore {
    type Record = MineralSpecimen;

    async fn upsert_batch(&self, batch: &[MineralSpecimen]) -> Result<(), StoreError> {
        a002_mineral_specimen::repository::upsert_batch(batch)
            .await
            .map_err(classify_store_error)
    }
}
