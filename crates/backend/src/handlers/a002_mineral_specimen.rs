use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a002_mineral_specimen;

/// GET /api/mineral_specimen
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a002_mineral_specimen::MineralSpecimen>>,
    axum::http::StatusCode,
> {
    match a002_mineral_specimen::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list mineral specimens: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/mineral_specimen/:code
pub async fn get_by_code(
    Path(code): Path<String>,
) -> Result<Json<contracts::domain::a002_mineral_specimen::MineralSpecimen>, axum::http::StatusCode>
{
    match a002_mineral_specimen::service::get_by_code(&code).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get mineral specimen {}: {}", code, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/mineral_specimen
pub async fn upsert(
    Json(record): Json<contracts::domain::a002_mineral_specimen::MineralSpecimen>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a002_mineral_specimen::service::upsert(&record).await {
        Ok(created) => Ok(Json(json!({"code": record.code, "created": created}))),
        Err(e) => {
            tracing::error!("Failed to upsert mineral specimen: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/mineral_specimen/:code
pub async fn delete(Path(code): Path<String>) -> Result<(), axum::http::StatusCode> {
    match a002_mineral_specimen::service::delete(&code).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete mineral specimen {}: {}", code, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
