pub mod download;
pub mod health;
pub mod pages;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let charts = ServeDir::new(state.storage.charts_dir());
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::handle_form).post(pages::handle_analyze))
        .route("/download/:report", get(download::handle_download))
        .nest_service("/charts", charts)
        .layer(body_limit)
        .with_state(state)
}
