use contracts::domain::a002_mineral_specimen::MineralSpecimen;

use super::repository;

pub async fn list_all() -> anyhow::Result<Vec<MineralSpecimen>> {
    repository::list_all().await
}

pub async fn get_by_code(code: &str) -> anyhow::Result<Option<MineralSpecimen>> {
    repository::get_by_code(code).await
}

/// Single-record upsert used by the admin CRUD surface.
/// Returns true when the record was newly created.
pub async fn upsert(record: &MineralSpecimen) -> anyhow::Result<bool> {
    if record.code.trim().is_empty() {
        anyhow::bail!("mineral specimen code must not be empty");
    }
    if record.name.trim().is_empty() {
        anyhow::bail!("mineral specimen name must not be empty");
    }
    let existed = repository::exists_by_code(&record.code).await?;
    repository::upsert_batch(std::slice::from_ref(record)).await?;
    Ok(!existed)
}

pub async fn delete(code: &str) -> anyhow::Result<bool> {
    repository::delete_by_code(code).await
}
