//! Structural checks run before any placement happens.
//!
//! # Rules
//! - Wall and frame dimensions must be finite and > 0
//! - Margins and the inter-row gap must be finite and >= 0
//! - `wall_width - 2 * side_margin` must be > 0
//! - In paired mode the bottom row may not be longer than the top row
//! - Bar length must be > 0, unit price >= 0

use crate::layout::error::LayoutError;
use crate::layout::model::{BottomAnchor, LayoutRequest, Margins, RowPosition};

/// Validates a layout request. Returns the first violation found.
pub fn validate_request(request: &LayoutRequest) -> Result<(), LayoutError> {
    positive("wall_width", request.wall_width)?;
    positive("wall_height", request.wall_height)?;

    validate_margins(&request.margins)?;

    let available_width = request.available_width();
    if available_width <= 0.0 {
        return Err(LayoutError::dimension("available_width", available_width));
    }

    for (position, frames) in request.rows() {
        for (i, frame) in frames.iter().enumerate() {
            let prefix = format!("{}[{}]", position.label(), i + 1);
            positive(format!("{prefix}.width"), frame.width)?;
            positive(format!("{prefix}.height"), frame.height)?;
        }
    }

    validate_bottom_anchor(request)
}

/// Margins and the inter-row gap must be finite and >= 0.
pub fn validate_margins(margins: &Margins) -> Result<(), LayoutError> {
    non_negative("side_margin", margins.side)?;
    non_negative("top_margin", margins.top)?;
    non_negative("bottom_margin", margins.bottom)?;
    non_negative("inter_row_gap", margins.inter_row_gap)
}

/// Validates the material inputs handed to the engine alongside the request.
pub fn validate_pricing(bar_length: f64, unit_price: f64) -> Result<(), LayoutError> {
    positive("bar_length", bar_length)?;
    if !unit_price.is_finite() || unit_price < 0.0 {
        return Err(LayoutError::InvalidPrice { value: unit_price });
    }
    Ok(())
}

fn validate_bottom_anchor(request: &LayoutRequest) -> Result<(), LayoutError> {
    let Some(bottom) = request.bottom.as_deref() else {
        return Ok(());
    };

    match request.bottom_anchor {
        BottomAnchor::PairedByIndex => {
            if bottom.len() > request.top.len() {
                return Err(LayoutError::RowMismatch {
                    top: request.top.len(),
                    bottom: bottom.len(),
                });
            }
            Ok(())
        }
        BottomAnchor::ReferenceHeight { height } => {
            positive(format!("{}.reference_height", RowPosition::Bottom.label()), height)
        }
    }
}

fn positive(field: impl Into<String>, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::dimension(field, value))
    }
}

fn non_negative(field: impl Into<String>, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::dimension(field, value))
    }
}
