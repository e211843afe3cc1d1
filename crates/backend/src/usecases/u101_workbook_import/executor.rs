//! Sequential batch upsert with partial-failure accounting.
//!
//! Batches are issued one at a time and awaited; a failed batch is recorded
//! with its record range and the run moves on, because spreadsheet quality
//! varies row to row and administrators prefer a partial import over
//! all-or-nothing. Only a connection-level failure aborts the run. No
//! retries, no rollback.

use std::time::Duration;

use contracts::usecases::u101_workbook_import::BatchError;

use super::error::ImportError;
use super::store::{SpecimenSink, StoreError};

/// Outcome of the write stage across all batches.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<BatchError>,
}

/// Write `records` through `sink` in contiguous batches of `batch_size`,
/// pausing `batch_delay` between batches (pacing only; zero disables it).
///
/// Errors only on [`StoreError::Unreachable`]; batch-level failures come
/// back inside the summary.
pub async fn execute<S: SpecimenSink>(
    sink: &S,
    records: &[S::Record],
    batch_size: usize,
    batch_delay: Duration,
) -> Result<BatchSummary, ImportError> {
    let batch_size = batch_size.max(1);
    let mut summary = BatchSummary::default();

    let mut start = 0;
    while start < records.len() {
        let end = (start + batch_size).min(records.len());
        let batch = &records[start..end];

        match sink.upsert_batch(batch).await {
            Ok(()) => {
                summary.success_count += batch.len();
                tracing::debug!("Batch {}..{} written ({} records)", start, end, batch.len());
            }
            Err(StoreError::Unreachable(message)) => {
                tracing::error!("Store unreachable at batch {}..{}: {}", start, end, message);
                return Err(ImportError::StoreUnreachable(message));
            }
            Err(StoreError::Batch(message)) => {
                tracing::warn!("Batch {}..{} failed: {}", start, end, message);
                summary.error_count += batch.len();
                summary.errors.push(BatchError {
                    batch_start: start,
                    batch_end: end,
                    message,
                });
            }
        }

        start = end;
        if start < records.len() && !batch_delay.is_zero() {
            tokio::time::sleep(batch_delay).await;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Sink that fails configured batch ordinals and records every call.
    struct FakeSink {
        fail_batches: HashSet<usize>,
        unreachable_batches: HashSet<usize>,
        calls: Mutex<Vec<usize>>,
    }

    impl FakeSink {
        fn new() -> Self {
            Self {
                fail_batches: HashSet::new(),
                unreachable_batches: HashSet::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(batches: &[usize]) -> Self {
            let mut sink = Self::new();
            sink.fail_batches = batches.iter().copied().collect();
            sink
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SpecimenSink for FakeSink {
        type Record = String;

        async fn upsert_batch(&self, batch: &[String]) -> Result<(), StoreError> {
            let mut calls = self.calls.lock().unwrap();
            let ordinal = calls.len();
            calls.push(batch.len());
            if self.unreachable_batches.contains(&ordinal) {
                return Err(StoreError::Unreachable("connection refused".into()));
            }
            if self.fail_batches.contains(&ordinal) {
                return Err(StoreError::Batch("UNIQUE constraint failed".into()));
            }
            Ok(())
        }
    }

    fn records(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("r{}", i)).collect()
    }

    #[tokio::test]
    async fn test_all_batches_succeed() {
        let sink = FakeSink::new();
        let summary = execute(&sink, &records(5), 2, Duration::ZERO).await.unwrap();
        assert_eq!(summary.success_count, 5);
        assert_eq!(summary.error_count, 0);
        assert!(summary.errors.is_empty());
        assert_eq!(sink.call_count(), 3);
    }

    #[tokio::test]
    async fn test_first_batch_failure_does_not_stop_the_run() {
        // Three records, batch size 2: batch 0 covers [0,2), batch 1 covers [2,3).
        let sink = FakeSink::failing(&[0]);
        let summary = execute(&sink, &records(3), 2, Duration::ZERO).await.unwrap();
        assert_eq!(summary.success_count, 1);
        assert_eq!(summary.error_count, 2);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].batch_start, 0);
        assert_eq!(summary.errors[0].batch_end, 2);
        assert_eq!(sink.call_count(), 2);
    }

    #[tokio::test]
    async fn test_middle_batch_failure_isolated() {
        let sink = FakeSink::failing(&[1]);
        let summary = execute(&sink, &records(6), 2, Duration::ZERO).await.unwrap();
        assert_eq!(summary.success_count, 4);
        assert_eq!(summary.error_count, 2);
        assert_eq!(summary.errors[0].batch_start, 2);
        assert_eq!(summary.errors[0].batch_end, 4);
        assert_eq!(sink.call_count(), 3);
    }

    #[tokio::test]
    async fn test_unreachable_store_aborts_the_run() {
        let mut sink = FakeSink::new();
        sink.unreachable_batches.insert(0);
        let err = execute(&sink, &records(4), 2, Duration::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::StoreUnreachable(_)));
        // Later batches were never attempted
        assert_eq!(sink.call_count(), 1);
    }

    #[tokio::test]
    async fn test_zero_batch_size_treated_as_one() {
        let sink = FakeSink::new();
        let summary = execute(&sink, &records(2), 0, Duration::ZERO).await.unwrap();
        assert_eq!(summary.success_count, 2);
        assert_eq!(sink.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_record_list_is_a_noop() {
        let sink = FakeSink::new();
        let summary = execute(&sink, &records(0), 10, Duration::ZERO).await.unwrap();
        assert_eq!(summary.success_count, 0);
        assert_eq!(sink.call_count(), 0);
    }
}
