//! Pure aggregation of sheet counts + batch outcomes into the response
//! payload. No side effects.

use std::collections::BTreeMap;

use contracts::usecases::u101_workbook_import::{ImportReport, SheetCounts};

use super::executor::BatchSummary;

pub fn summarize(
    counts: BTreeMap<String, SheetCounts>,
    total_found: usize,
    summary: BatchSummary,
) -> ImportReport {
    let success = summary.success_count > 0;
    let message = if !success {
        "Import failed: no records were written".to_string()
    } else if summary.error_count == 0 {
        format!("Imported {} records", summary.success_count)
    } else {
        format!(
            "Imported {} records, {} failed across {} batch(es)",
            summary.success_count,
            summary.error_count,
            summary.errors.len()
        )
    };

    ImportReport {
        success,
        message,
        counts,
        total_found,
        success_count: summary.success_count,
        error_count: summary.error_count,
        error_details: summary.errors,
    }
}
