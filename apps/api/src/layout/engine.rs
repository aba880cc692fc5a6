//! Layout Engine — places frames in one or two rows and totals the molding.
//!
//! # Horizontal placement (per row, edge-anchored)
//! - `available = wall_width - 2 * side_margin`
//! - 1 frame:  centered, `spacing = (available - width) / 2`
//! - n frames: first frame at `side_margin`, last frame ends at
//!   `wall_width - side_margin`, `spacing = (available - Σwidths) / (n - 1)`
//! - Negative spacing is kept as-is and reported as a warning
//!
//! # Vertical placement
//! - Top row baseline: `top_margin`
//! - Bottom row baseline: `top_margin + reference_height + inter_row_gap`, where the
//!   reference is either the paired top frame's height or an explicit height
//!
//! The engine is pure: no I/O, no shared state, identical input gives identical output.

use tracing::debug;

use crate::layout::error::LayoutError;
use crate::layout::model::{
    BottomAnchor, Frame, LayoutRequest, LayoutResult, LayoutWarning, PlacedFrame, RowLayout,
    RowPosition,
};
use crate::layout::quantity::{required_units, total_cost, total_perimeter};
use crate::layout::validation::{validate_pricing, validate_request};

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Computes placements and material totals for a request.
///
/// `bar_length` and `unit_price` come from the selected product; the engine only
/// divides and multiplies by them.
pub fn compute_layout(
    request: &LayoutRequest,
    bar_length: f64,
    unit_price: f64,
) -> Result<LayoutResult, LayoutError> {
    validate_request(request)?;
    validate_pricing(bar_length, unit_price)?;

    let available_width = request.available_width();
    let margins = request.margins;

    let mut placements = vec![place_row(
        RowPosition::Top,
        &request.top,
        available_width,
        margins.side,
        |_| margins.top,
    )];

    if let Some(bottom) = request.bottom.as_deref() {
        let reference_height = |i: usize| match request.bottom_anchor {
            BottomAnchor::PairedByIndex => request.top[i].height,
            BottomAnchor::ReferenceHeight { height } => height,
        };
        placements.push(place_row(
            RowPosition::Bottom,
            bottom,
            available_width,
            margins.side,
            |i| margins.top + reference_height(i) + margins.inter_row_gap,
        ));
    }

    let rows: Vec<RowLayout> = placements.iter().map(|p| p.summary).collect();
    let frames: Vec<PlacedFrame> = placements.into_iter().flat_map(|p| p.frames).collect();

    let floor_line = request.wall_height - margins.bottom;
    let warnings = collect_warnings(&rows, &frames, floor_line);

    let total_perimeter = total_perimeter(&frames);
    let required_units = required_units(total_perimeter, bar_length);
    let total_cost = total_cost(required_units, unit_price);

    debug!(
        frames = frames.len(),
        total_perimeter,
        required_units,
        warnings = warnings.len(),
        "Layout computed"
    );

    Ok(LayoutResult {
        frames,
        rows,
        total_perimeter,
        bar_length,
        required_units,
        unit_price,
        total_cost,
        warnings,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Row placement
// ────────────────────────────────────────────────────────────────────────────

struct RowPlacement {
    summary: RowLayout,
    frames: Vec<PlacedFrame>,
}

/// Uniform gap for a row, or `None` when the row is empty.
pub(crate) fn row_spacing(frames: &[Frame], available_width: f64) -> Option<f64> {
    let total_width: f64 = frames.iter().map(|f| f.width).sum();
    match frames.len() {
        0 => None,
        1 => Some((available_width - total_width) / 2.0),
        n => Some((available_width - total_width) / (n - 1) as f64),
    }
}

/// Places one row left-to-right. `baseline` maps a 0-based index to the frame's y.
fn place_row(
    row: RowPosition,
    frames: &[Frame],
    available_width: f64,
    side_margin: f64,
    baseline: impl Fn(usize) -> f64,
) -> RowPlacement {
    let spacing = row_spacing(frames, available_width);
    let gap = spacing.unwrap_or(0.0);
    let start_x = if frames.len() == 1 {
        side_margin + gap
    } else {
        side_margin
    };

    let (placed, _) = frames.iter().enumerate().fold(
        (Vec::with_capacity(frames.len()), start_x),
        |(mut placed, x), (i, frame)| {
            placed.push(PlacedFrame {
                row,
                index: i + 1,
                frame: *frame,
                x,
                y: baseline(i),
                perimeter: frame.perimeter(),
            });
            (placed, x + frame.width + gap)
        },
    );

    RowPlacement {
        summary: RowLayout {
            row,
            frame_count: frames.len(),
            total_width: frames.iter().map(|f| f.width).sum(),
            spacing,
        },
        frames: placed,
    }
}

fn collect_warnings(
    rows: &[RowLayout],
    frames: &[PlacedFrame],
    floor_line: f64,
) -> Vec<LayoutWarning> {
    let spacing_warnings = rows.iter().filter_map(|r| match r.spacing {
        Some(spacing) if spacing < 0.0 => Some(LayoutWarning::NegativeSpacing {
            row: r.row,
            spacing,
        }),
        _ => None,
    });

    let overflow_warnings = frames.iter().filter_map(|f| {
        let overflow = f.bottom() - floor_line;
        (overflow > 0.0).then_some(LayoutWarning::VerticalOverflow {
            row: f.row,
            index: f.index,
            overflow,
        })
    });

    spacing_warnings.chain(overflow_warnings).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
