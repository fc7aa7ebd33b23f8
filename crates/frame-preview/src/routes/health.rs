//! Liveness probe that also reports which document is being served.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// ETag of the served document, so a deploy can be matched to its config.
    document_etag: String,
    document_bytes: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "frame-preview",
        version: env!("CARGO_PKG_VERSION"),
        document_etag: state.page.etag.clone(),
        document_bytes: state.page.html.len(),
    })
}
