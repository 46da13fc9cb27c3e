use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use menu_core::services::MenuService;
use serde::Serialize;
use tracing::error;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    store: String,
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: state.store_backend.as_str().to_string(),
        }),
    )
}

/// Ready once the store answers a query
pub async fn readiness_check(State(menus): State<Arc<MenuService>>) -> StatusCode {
    match menus.list().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            error!("Readiness check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
