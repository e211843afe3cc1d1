use thiserror::Error;

/// Run-fatal import failures. Everything here means no partial report is
/// meaningful and the whole call is rejected; batch-level write failures are
/// NOT errors at this level (they ride inside the report).
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read workbook: {0}")]
    Workbook(String),

    #[error("no importable rows found")]
    NoRecords,

    #[error("specimen store unreachable: {0}")]
    StoreUnreachable(String),
}
