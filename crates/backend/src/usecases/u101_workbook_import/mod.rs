//! UseCase u101: spreadsheet ingestion and normalization.
//!
//! One linear, request-scoped pass: workbook bytes -> named sheets -> per
//! row (column resolution -> category classification -> record building) ->
//! flat record list -> sequential batch upsert -> import report. No retries,
//! no resumability; a failed run is re-submitted from the original file.

pub mod builder;
pub mod classify;
pub mod columns;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod report;
pub mod sinks;
pub mod store;
pub mod workbook;

pub use error::ImportError;
pub use pipeline::{run_import, run_rows_import, ImportSource, MineralsProfile, RocksProfile};
pub use sinks::{MineralStore, RockStore};
