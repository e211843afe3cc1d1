//! The one parameterized pipeline behind every import endpoint.
//!
//! Historically this logic existed four times (rocks/minerals x upload/
//! server-side file); here it is a single generic pass parameterized by an
//! [`ImportProfile`] (which entity to build) and an [`ImportSource`] (where
//! the workbook bytes come from). Row iteration is a fold carrying an
//! explicit `(records, counts)` accumulator; there is no shared mutable
//! state between stages.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use contracts::domain::common::Category;
use contracts::usecases::u101_workbook_import::{ImportReport, SheetCounts};

use crate::shared::config::ImportConfig;

use super::builder;
use super::classify::classify;
use super::columns::{resolve, RawRow};
use super::error::ImportError;
use super::executor::{self, BatchSummary};
use super::report;
use super::store::SpecimenSink;
use super::workbook::{self, is_reserved_sheet, SheetRows};

/// Where one import run reads its workbook from.
pub enum ImportSource {
    /// Uploaded file contents.
    Bytes(Vec<u8>),
    /// Server-side workbook path (the import-default endpoints).
    Path(PathBuf),
}

/// Entity-specific half of the pipeline: how to resolve the identity name
/// (the classifier needs it before a record exists) and how to build one
/// record from a classified row.
pub trait ImportProfile {
    type Record: Send + Sync;

    /// Entity label used in log lines.
    const ENTITY: &'static str;

    fn resolve_name(row: &RawRow) -> String;

    /// `None` skips the row (blank name on a non-ore sheet).
    fn build(category: &Category, row: &RawRow, index: usize) -> Option<Self::Record>;
}

pub struct RocksProfile;

impl ImportProfile for RocksProfile {
    type Record = contracts::domain::a001_rock_specimen::RockSpecimen;

    const ENTITY: &'static str = "rocks";

    fn resolve_name(row: &RawRow) -> String {
        resolve(row, super::columns::rock::NAME)
    }

    fn build(category: &Category, row: &RawRow, index: usize) -> Option<Self::Record> {
        builder::build_rock(category, row, index)
    }
}

pub struct MineralsProfile;

impl ImportProfile for MineralsProfile {
    type Record = contracts::domain::a002_mineral_specimen::MineralSpecimen;

    const ENTITY: &'static str = "minerals";

    fn resolve_name(row: &RawRow) -> String {
        resolve(row, super::columns::mineral::NAME)
    }

    fn build(category: &Category, row: &RawRow, index: usize) -> Option<Self::Record> {
        builder::build_mineral(category, row, index)
    }
}

/// Normalize one sheet. The row index passed to the builder is 1-based
/// within the sheet (it feeds code synthesis).
fn collect_sheet<P: ImportProfile>(sheet: &SheetRows) -> (Vec<P::Record>, SheetCounts) {
    sheet.rows.iter().enumerate().fold(
        (Vec::new(), SheetCounts::default()),
        |(mut records, mut counts), (i, row)| {
            counts.total += 1;
            let name = P::resolve_name(row);
            let category = classify(&sheet.name, row, &name);
            match P::build(&category, row, i + 1) {
                Some(record) => {
                    counts.processed += 1;
                    records.push(record);
                }
                None => counts.skipped += 1,
            }
            (records, counts)
        },
    )
}

/// Normalize a whole workbook into a flat record list plus per-sheet counts.
/// Reserved sheets (leading `_`) are dropped here and never show up in the
/// counts.
pub fn collect_workbook<P: ImportProfile>(
    sheets: &[SheetRows],
) -> (Vec<P::Record>, BTreeMap<String, SheetCounts>) {
    let mut all_records = Vec::new();
    let mut all_counts = BTreeMap::new();
    for sheet in sheets {
        if is_reserved_sheet(&sheet.name) {
            tracing::debug!("Skipping reserved sheet '{}'", sheet.name);
            continue;
        }
        let (records, counts) = collect_sheet::<P>(sheet);
        all_records.extend(records);
        all_counts.insert(sheet.name.clone(), counts);
    }
    (all_records, all_counts)
}

/// Full pipeline: parse -> normalize -> batch upsert -> report.
pub async fn run_import<P, S>(
    source: ImportSource,
    sink: &S,
    config: &ImportConfig,
) -> Result<ImportReport, ImportError>
where
    P: ImportProfile,
    S: SpecimenSink<Record = P::Record>,
{
    let sheets = match source {
        ImportSource::Bytes(bytes) => workbook::read_workbook_bytes(&bytes)?,
        ImportSource::Path(path) => workbook::read_workbook_path(&path)?,
    };

    let (records, counts) = collect_workbook::<P>(&sheets);
    tracing::info!(
        "u101: {} {} records collected from {} sheet(s)",
        records.len(),
        P::ENTITY,
        counts.len()
    );
    if records.is_empty() {
        return Err(ImportError::NoRecords);
    }

    let summary = write_records(sink, &records, config).await?;
    Ok(report::summarize(counts, records.len(), summary))
}

/// Upsert-only variant for callers that already hold normalized records
/// (the import-rows endpoints, where the client parsed the spreadsheet).
pub async fn run_rows_import<S: SpecimenSink>(
    records: Vec<S::Record>,
    sink: &S,
    config: &ImportConfig,
) -> Result<ImportReport, ImportError> {
    if records.is_empty() {
        return Err(ImportError::NoRecords);
    }
    let summary = write_records(sink, &records, config).await?;
    Ok(report::summarize(BTreeMap::new(), records.len(), summary))
}

async fn write_records<S: SpecimenSink>(
    sink: &S,
    records: &[S::Record],
    config: &ImportConfig,
) -> Result<BatchSummary, ImportError> {
    executor::execute(
        sink,
        records,
        config.batch_size,
        Duration::from_millis(config.batch_delay_ms),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_counts_add_up_per_sheet() {
        let sheet = SheetRows {
            name: "Metamorphic Rocks".into(),
            rows: vec![
                row(&[("Rock Name", "Slate")]),
                row(&[]),
                row(&[("Rock Name", "Gneiss")]),
                row(&[("Texture", "foliated")]),
            ],
        };
        let (records, counts) = collect_sheet::<RocksProfile>(&sheet);
        assert_eq!(records.len(), 2);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.processed, 2);
        assert_eq!(counts.skipped, 2);
        assert_eq!(counts.processed + counts.skipped, counts.total);
    }

    #[test]
    fn test_reserved_sheets_excluded_from_counts() {
        let sheets = vec![
            SheetRows {
                name: "_Metadata".into(),
                rows: vec![row(&[("Rock Name", "ShouldNotImport")])],
            },
            SheetRows {
                name: "Igneous Rocks".into(),
                rows: vec![row(&[("Rock Name", "Granite")])],
            },
        ];
        let (records, counts) = collect_workbook::<RocksProfile>(&sheets);
        assert_eq!(records.len(), 1);
        assert!(!counts.contains_key("_Metadata"));
        assert!(counts.contains_key("Igneous Rocks"));
    }

    #[test]
    fn test_row_index_is_per_sheet() {
        let sheets = vec![
            SheetRows {
                name: "Igneous Rocks".into(),
                rows: vec![row(&[("Rock Name", "Granite")]), row(&[("Rock Name", "Basalt")])],
            },
            SheetRows {
                name: "Sedimentary Rocks".into(),
                rows: vec![row(&[("Rock Name", "Shale")])],
            },
        ];
        let (records, _) = collect_workbook::<RocksProfile>(&sheets);
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        // Index restarts per sheet; prefixes come from the classified category.
        assert_eq!(codes, vec!["I-0001", "I-0002", "S-0001"]);
    }

    #[test]
    fn test_ore_content_rows_survive_blank_names() {
        let sheet = SheetRows {
            name: "Economic Geology".into(),
            rows: vec![row(&[
                ("Type of Commodity", "Gold"),
                ("Mining Company", "Acme Corp"),
            ])],
        };
        let (records, counts) = collect_sheet::<RocksProfile>(&sheet);
        assert_eq!(counts.processed, 1);
        assert_eq!(records[0].category, Category::OreSamples);
        assert_eq!(records[0].code, "O-0001");
    }
}
