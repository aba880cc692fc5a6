//! Axum route handlers for the Layout API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::{Product, ProductSelection};
use crate::errors::AppError;
use crate::layout::{
    build_auto_request, compute_layout, BottomAnchor, Frame, LayoutRequest, LayoutResult, Margins,
    RowPosition, MAX_FRAMES_PER_ROW,
};
use crate::state::AppState;
use crate::summary::report::warning_line;
use crate::summary::{build_report_lines, build_share_url, share_text};

// ────────────────────────────────────────────────────────────────────────────
// Input limits
// ────────────────────────────────────────────────────────────────────────────

pub const MIN_WALL_CM: f64 = 50.0;
pub const MAX_WALL_CM: f64 = 10_000.0;
pub const MIN_FRAME_CM: f64 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LayoutBody {
    pub wall_width: f64,
    pub wall_height: f64,
    /// Falls back to the configured margin policy when omitted.
    #[serde(default)]
    pub margins: Option<Margins>,
    pub top: Vec<Frame>,
    #[serde(default)]
    pub bottom: Option<Vec<Frame>>,
    #[serde(default)]
    pub bottom_anchor: BottomAnchor,
    #[serde(flatten)]
    pub product: ProductSelection,
}

#[derive(Debug, Deserialize)]
pub struct AutoLayoutBody {
    pub wall_width: f64,
    pub wall_height: f64,
    #[serde(flatten)]
    pub product: ProductSelection,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub layout: LayoutResult,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub lines: Vec<String>,
    pub share_url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/layout
pub async fn handle_compute_layout(
    State(state): State<AppState>,
    Json(body): Json<LayoutBody>,
) -> Result<Json<LayoutResponse>, AppError> {
    let (request, product) = prepare(&state, body)?;
    let layout = run_layout(&request, &product)?;
    Ok(Json(LayoutResponse { layout, product }))
}

/// POST /api/v1/layout/auto
///
/// Fills one row with as many default-sized frames as the wall allows.
pub async fn handle_auto_layout(
    State(state): State<AppState>,
    Json(body): Json<AutoLayoutBody>,
) -> Result<Json<LayoutResponse>, AppError> {
    check_wall(body.wall_width, body.wall_height)?;
    let config = &state.config;
    let request = build_auto_request(
        body.wall_width,
        body.wall_height,
        config.margins,
        &config.auto_layout,
    )?;
    let product = body.product.resolve(&config.catalog);

    info!(
        frames = request.top.len(),
        wall_width = body.wall_width,
        "Auto layout request built"
    );

    let layout = run_layout(&request, &product)?;
    Ok(Json(LayoutResponse { layout, product }))
}

/// POST /api/v1/layout/report
///
/// Returns the report text and a share link for the same input as `/layout`.
pub async fn handle_layout_report(
    State(state): State<AppState>,
    Json(body): Json<LayoutBody>,
) -> Result<Json<ReportResponse>, AppError> {
    let (request, product) = prepare(&state, body)?;
    let layout = run_layout(&request, &product)?;

    let lines = build_report_lines(&request, &layout, &product);
    let share_url = build_share_url(
        &state.config.share_base_url,
        &share_text(&layout, &product),
    );
    Ok(Json(ReportResponse { lines, share_url }))
}

/// GET /api/v1/products
pub async fn handle_list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.config.catalog.products())
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Applies input limits and config defaults, producing the engine's inputs.
fn prepare(state: &AppState, body: LayoutBody) -> Result<(LayoutRequest, Product), AppError> {
    check_wall(body.wall_width, body.wall_height)?;
    check_row("top", &body.top)?;
    if body.top.is_empty() {
        return Err(AppError::Validation(
            "top row must contain at least one frame".to_string(),
        ));
    }
    if let Some(bottom) = &body.bottom {
        check_row("bottom", bottom)?;
    }

    let config = &state.config;
    let mut request = LayoutRequest::single_row(body.wall_width, body.wall_height, body.top)
        .with_margins(body.margins.unwrap_or(config.margins))
        .with_bottom_anchor(body.bottom_anchor);
    if let Some(bottom) = body.bottom {
        request = request.with_bottom(bottom);
    }
    Ok((request, body.product.resolve(&config.catalog)))
}

fn run_layout(request: &LayoutRequest, product: &Product) -> Result<LayoutResult, AppError> {
    let layout = compute_layout(request, product.bar_length, product.unit_price)?;
    if layout.has_negative_spacing() {
        warn!(
            top_spacing = ?layout.spacing(RowPosition::Top),
            bottom_spacing = ?layout.spacing(RowPosition::Bottom),
            "Frames are wider than the wall allows; returning overlapping layout"
        );
    }
    for warning in &layout.warnings {
        warn!("{}", warning_line(warning));
    }
    Ok(layout)
}

fn check_wall(wall_width: f64, wall_height: f64) -> Result<(), AppError> {
    if !(wall_width >= MIN_WALL_CM && wall_height >= MIN_WALL_CM) {
        return Err(AppError::Validation(format!(
            "wall must be at least {MIN_WALL_CM} x {MIN_WALL_CM} cm, got {wall_width} x {wall_height}"
        )));
    }
    if wall_width > MAX_WALL_CM || wall_height > MAX_WALL_CM {
        return Err(AppError::Validation(format!(
            "wall may be at most {MAX_WALL_CM} x {MAX_WALL_CM} cm, got {wall_width} x {wall_height}"
        )));
    }
    Ok(())
}

fn check_row(name: &str, frames: &[Frame]) -> Result<(), AppError> {
    if frames.len() > MAX_FRAMES_PER_ROW {
        return Err(AppError::Validation(format!(
            "{name} row has {} frames; the limit is {MAX_FRAMES_PER_ROW}",
            frames.len()
        )));
    }
    if let Some((i, frame)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| !(f.width >= MIN_FRAME_CM && f.height >= MIN_FRAME_CM))
    {
        return Err(AppError::Validation(format!(
            "{name} frame {} must be at least {MIN_FRAME_CM} x {MIN_FRAME_CM} cm, got {} x {}",
            i + 1,
            frame.width,
            frame.height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_wall_minimum() {
        assert!(check_wall(50.0, 50.0).is_ok());
        assert!(matches!(check_wall(49.9, 260.0), Err(AppError::Validation(_))));
        assert!(check_wall(f64::NAN, 260.0).is_err());
    }

    #[test]
    fn test_check_wall_maximum() {
        assert!(check_wall(MAX_WALL_CM, MAX_WALL_CM).is_ok());
        assert!(matches!(check_wall(1e9, 260.0), Err(AppError::Validation(_))));
        assert!(check_wall(300.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_row_names_small_frame() {
        let frames = vec![Frame::new(60.0, 120.0), Frame::new(9.0, 120.0)];
        match check_row("top", &frames) {
            Err(AppError::Validation(msg)) => assert!(msg.contains("top frame 2"), "{msg}"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_check_row_limit() {
        let frames = vec![Frame::new(10.0, 10.0); MAX_FRAMES_PER_ROW + 1];
        assert!(check_row("bottom", &frames).is_err());
        assert!(check_row("bottom", &frames[..MAX_FRAMES_PER_ROW]).is_ok());
    }
}
