use async_trait::async_trait;
use thiserror::Error;

/// Failure of one upsert call, split by blast radius: a `Batch` error fails
/// only the records in that call and the run continues; `Unreachable` means
/// the store itself is gone and the run must abort instead of counting every
/// remaining batch as failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Unreachable(String),

    #[error("{0}")]
    Batch(String),
}

/// Write side of the pipeline: insert-or-update one contiguous batch keyed by
/// the specimen `code` column. Implemented by the sea-orm repositories in
/// production and by in-memory fakes in the executor tests.
#[async_trait]
pub trait SpecimenSink: Send + Sync {
    type Record: Send + Sync;

    async fn upsert_batch(&self, batch: &[Self::Record]) -> Result<(), StoreError>;
}

/// Map a repository error onto the batch/fatal split. Connection-level
/// sea-orm errors mean the sqlite file (or future remote store) is not
/// reachable at all; anything else is a data problem local to the batch.
pub fn classify_store_error(e: anyhow::Error) -> StoreError {
    if let Some(db_err) = e.downcast_ref::<sea_orm::DbErr>() {
        if matches!(
            db_err,
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_)
        ) {
            return StoreError::Unreachable(db_err.to_string());
        }
    }
    StoreError::Batch(e.to_string())
}
