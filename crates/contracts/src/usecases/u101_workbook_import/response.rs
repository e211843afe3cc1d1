use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-sheet tally kept while rows are being normalized.
/// Invariant: `processed + skipped == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetCounts {
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
}

/// One failed batch write, reported with the record range it covered
/// (0-based, `batch_end` exclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    #[serde(rename = "batchStart")]
    pub batch_start: usize,
    #[serde(rename = "batchEnd")]
    pub batch_end: usize,
    pub message: String,
}

/// Final payload of one import run. Partial success is the expected steady
/// state: `success` is true whenever at least one record was written, and
/// `error_details` carries whatever batches failed along the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub success: bool,
    pub message: String,

    /// Per-sheet counts, keyed by sheet name. Reserved sheets (leading `_`)
    /// never appear here.
    pub counts: BTreeMap<String, SheetCounts>,

    #[serde(rename = "totalFound")]
    pub total_found: usize,
    #[serde(rename = "successCount")]
    pub success_count: usize,
    #[serde(rename = "errorCount")]
    pub error_count: usize,

    #[serde(rename = "errorDetails", default, skip_serializing_if = "Vec::is_empty")]
    pub error_details: Vec<BatchError>,
}
