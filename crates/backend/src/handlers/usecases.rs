use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::Json;
use std::path::PathBuf;

use contracts::usecases::u101_workbook_import::ImportReport;

use crate::shared::config::get_config;
use crate::usecases::u101_workbook_import::{
    self as u101, ImportError, ImportSource, MineralStore, MineralsProfile, RockStore,
    RocksProfile,
};

// ============================================================================
// UseCase u101: workbook import
// ============================================================================

/// Report-shaped body for runs that never produced a report.
fn failure_report(message: String) -> ImportReport {
    ImportReport {
        success: false,
        message,
        ..ImportReport::default()
    }
}

/// 201 on any success (partial included), 400 on total failure.
fn respond(result: Result<ImportReport, ImportError>) -> (StatusCode, Json<ImportReport>) {
    match result {
        Ok(report) => {
            let status = if report.success {
                StatusCode::CREATED
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, Json(report))
        }
        Err(e) => {
            tracing::error!("u101 import failed: {}", e);
            (StatusCode::BAD_REQUEST, Json(failure_report(e.to_string())))
        }
    }
}

/// Pull the workbook bytes out of the multipart `file` field.
async fn read_workbook_upload(multipart: &mut Multipart) -> Result<Vec<u8>, String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("invalid multipart body: {}", e))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_lowercase();
        if !(file_name.ends_with(".xlsx") || file_name.ends_with(".xls")) {
            return Err(format!(
                "unsupported file type '{}': expected .xlsx or .xls",
                file_name
            ));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| format!("failed to read upload: {}", e))?;
        if bytes.is_empty() {
            return Err("uploaded file is empty".to_string());
        }
        return Ok(bytes.to_vec());
    }
    Err("no file uploaded".to_string())
}

/// POST /api/usecases/u101/rocks/import
pub async fn u101_import_rocks(mut multipart: Multipart) -> (StatusCode, Json<ImportReport>) {
    let bytes = match read_workbook_upload(&mut multipart).await {
        Ok(bytes) => bytes,
        Err(message) => return (StatusCode::BAD_REQUEST, Json(failure_report(message))),
    };
    let result = u101::run_import::<RocksProfile, _>(
        ImportSource::Bytes(bytes),
        &RockStore,
        &get_config().import,
    )
    .await;
    respond(result)
}

/// POST /api/usecases/u101/rocks/import-default
pub async fn u101_import_rocks_default() -> (StatusCode, Json<ImportReport>) {
    let config = get_config();
    let path = PathBuf::from(&config.import.rocks_workbook);
    let result =
        u101::run_import::<RocksProfile, _>(ImportSource::Path(path), &RockStore, &config.import)
            .await;
    respond(result)
}

/// POST /api/usecases/u101/rocks/import-rows
pub async fn u101_import_rock_rows(
    Json(records): Json<Vec<contracts::domain::a001_rock_specimen::RockSpecimen>>,
) -> (StatusCode, Json<ImportReport>) {
    let result = u101::run_rows_import(records, &RockStore, &get_config().import).await;
    respond(result)
}

/// POST /api/usecases/u101/minerals/import
pub async fn u101_import_minerals(mut multipart: Multipart) -> (StatusCode, Json<ImportReport>) {
    let bytes = match read_workbook_upload(&mut multipart).await {
        Ok(bytes) => bytes,
        Err(message) => return (StatusCode::BAD_REQUEST, Json(failure_report(message))),
    };
    let result = u101::run_import::<MineralsProfile, _>(
        ImportSource::Bytes(bytes),
        &MineralStore,
        &get_config().import,
    )
    .await;
    respond(result)
}

/// POST /api/usecases/u101/minerals/import-default
pub async fn u101_import_minerals_default() -> (StatusCode, Json<ImportReport>) {
    let config = get_config();
    let path = PathBuf::from(&config.import.minerals_workbook);
    let result = u101::run_import::<MineralsProfile, _>(
        ImportSource::Path(path),
        &MineralStore,
        &config.import,
    )
    .await;
    respond(result)
}

/// POST /api/usecases/u101/minerals/import-rows
pub async fn u101_import_mineral_rows(
    Json(records): Json<Vec<contracts::domain::a002_mineral_specimen::MineralSpecimen>>,
) -> (StatusCode, Json<ImportReport>) {
    let result = u101::run_rows_import(records, &MineralStore, &get_config().import).await;
    respond(result)
}
