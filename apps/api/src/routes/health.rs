use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports liveness plus the layout policy this instance was started with.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let config = &state.config;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "products": config.catalog.products().len(),
        "margins": config.margins,
        "auto_layout": config.auto_layout,
    }))
}
