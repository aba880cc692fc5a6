pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::layout::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/products", get(handlers::handle_list_products))
        .route("/api/v1/layout", post(handlers::handle_compute_layout))
        .route("/api/v1/layout/auto", post(handlers::handle_auto_layout))
        .route("/api/v1/layout/report", post(handlers::handle_layout_report))
        .fallback(not_found)
        .with_state(state)
}
