use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a001_rock_specimen;

/// GET /api/rock_specimen
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::a001_rock_specimen::RockSpecimen>>, axum::http::StatusCode>
{
    match a001_rock_specimen::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list rock specimens: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/rock_specimen/:code
pub async fn get_by_code(
    Path(code): Path<String>,
) -> Result<Json<contracts::domain::a001_rock_specimen::RockSpecimen>, axum::http::StatusCode> {
    match a001_rock_specimen::service::get_by_code(&code).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get rock specimen {}: {}", code, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/rock_specimen
pub async fn upsert(
    Json(record): Json<contracts::domain::a001_rock_specimen::RockSpecimen>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a001_rock_specimen::service::upsert(&record).await {
        Ok(created) => Ok(Json(json!({"code": record.code, "created": created}))),
        Err(e) => {
            tracing::error!("Failed to upsert rock specimen: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/rock_specimen/:code
pub async fn delete(Path(code): Path<String>) -> Result<(), axum::http::StatusCode> {
    match a001_rock_specimen::service::delete(&code).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete rock specimen {}: {}", code, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
