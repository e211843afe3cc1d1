use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Uploaded workbooks are capped at 20 MB.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// All application routes.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Rock specimen handlers
        // ========================================
        .route(
            "/api/rock_specimen",
            get(handlers::a001_rock_specimen::list_all).post(handlers::a001_rock_specimen::upsert),
        )
        .route(
            "/api/rock_specimen/:code",
            get(handlers::a001_rock_specimen::get_by_code)
                .delete(handlers::a001_rock_specimen::delete),
        )
        // ========================================
        // A002 Mineral specimen handlers
        // ========================================
        .route(
            "/api/mineral_specimen",
            get(handlers::a002_mineral_specimen::list_all)
                .post(handlers::a002_mineral_specimen::upsert),
        )
        .route(
            "/api/mineral_specimen/:code",
            get(handlers::a002_mineral_specimen::get_by_code)
                .delete(handlers::a002_mineral_specimen::delete),
        )
        // ========================================
        // U101 workbook import
        // ========================================
        .route(
            "/api/usecases/u101/rocks/import",
            post(handlers::usecases::u101_import_rocks),
        )
        .route(
            "/api/usecases/u101/rocks/import-default",
            post(handlers::usecases::u101_import_rocks_default),
        )
        .route(
            "/api/usecases/u101/rocks/import-rows",
            post(handlers::usecases::u101_import_rock_rows),
        )
        .route(
            "/api/usecases/u101/minerals/import",
            post(handlers::usecases::u101_import_minerals),
        )
        .route(
            "/api/usecases/u101/minerals/import-default",
            post(handlers::usecases::u101_import_minerals_default),
        )
        .route(
            "/api/usecases/u101/minerals/import-rows",
            post(handlers::usecases::u101_import_mineral_rows),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
