use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use std::sync::Arc;

use crate::AppState;

pub mod contacts;

pub use contacts::contact_routes;

pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.service.count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "contacts": count })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unhealthy" })),
        ),
    }
}
