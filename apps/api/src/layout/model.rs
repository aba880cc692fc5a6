//! Request and result types for the wall layout engine.
//!
//! All lengths are centimeters. Coordinates are in wall space: origin at the
//! top-left corner of the wall, x grows rightward, y grows downward.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Policy defaults
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_SIDE_MARGIN_CM: f64 = 10.0;
pub const DEFAULT_TOP_MARGIN_CM: f64 = 20.0;
pub const DEFAULT_BOTTOM_MARGIN_CM: f64 = 10.0;
pub const DEFAULT_INTER_ROW_GAP_CM: f64 = 15.0;

/// Upper bound on frames in a single row, for hand-entered and auto-filled rows alike.
pub const MAX_FRAMES_PER_ROW: usize = 64;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// A rectangular panel to be outlined on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Frame { width, height }
    }

    /// Length of molding needed to outline this frame.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// Fixed spacing policy around and between rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Kept clear on both the left and right edge of the wall.
    pub side: f64,
    /// Distance from the top of the wall to the top row's baseline.
    pub top: f64,
    /// Kept clear above the floor. Only used for the vertical fit warning.
    pub bottom: f64,
    /// Vertical gap between the top row and the bottom row.
    pub inter_row_gap: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            side: DEFAULT_SIDE_MARGIN_CM,
            top: DEFAULT_TOP_MARGIN_CM,
            bottom: DEFAULT_BOTTOM_MARGIN_CM,
            inter_row_gap: DEFAULT_INTER_ROW_GAP_CM,
        }
    }
}

/// Which of the (at most two) rows a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPosition {
    Top,
    Bottom,
}

impl RowPosition {
    pub fn label(&self) -> &'static str {
        match self {
            RowPosition::Top => "top",
            RowPosition::Bottom => "bottom",
        }
    }
}

/// How the bottom row's baseline is derived from the top row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BottomAnchor {
    /// Each bottom frame sits below the top frame at the same index.
    /// The bottom row may not be longer than the top row in this mode.
    #[default]
    PairedByIndex,
    /// Every bottom frame sits below a row of the given height.
    ReferenceHeight { height: f64 },
}

/// Everything the engine needs to place frames on a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub wall_width: f64,
    pub wall_height: f64,
    #[serde(default)]
    pub margins: Margins,
    pub top: Vec<Frame>,
    #[serde(default)]
    pub bottom: Option<Vec<Frame>>,
    #[serde(default)]
    pub bottom_anchor: BottomAnchor,
}

impl LayoutRequest {
    /// Single-row request with the default margin policy.
    pub fn single_row(wall_width: f64, wall_height: f64, top: Vec<Frame>) -> Self {
        LayoutRequest {
            wall_width,
            wall_height,
            margins: Margins::default(),
            top,
            bottom: None,
            bottom_anchor: BottomAnchor::default(),
        }
    }

    pub fn with_bottom(mut self, bottom: Vec<Frame>) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_bottom_anchor(mut self, anchor: BottomAnchor) -> Self {
        self.bottom_anchor = anchor;
        self
    }

    /// Horizontal room left once both side margins are removed.
    pub fn available_width(&self) -> f64 {
        self.wall_width - 2.0 * self.margins.side
    }

    /// Rows in placement order, skipping an absent bottom row.
    pub fn rows(&self) -> impl Iterator<Item = (RowPosition, &[Frame])> {
        std::iter::once((RowPosition::Top, self.top.as_slice())).chain(
            self.bottom
                .as_deref()
                .map(|frames| (RowPosition::Bottom, frames)),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// A frame with its resolved top-left coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedFrame {
    pub row: RowPosition,
    /// 1-based position within the row.
    pub index: usize,
    #[serde(flatten)]
    pub frame: Frame,
    pub x: f64,
    pub y: f64,
    pub perimeter: f64,
}

impl PlacedFrame {
    pub fn bottom(&self) -> f64 {
        self.y + self.frame.height
    }
}

/// Per-row horizontal summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub row: RowPosition,
    pub frame_count: usize,
    pub total_width: f64,
    /// `None` for an empty row.
    pub spacing: Option<f64>,
}

/// Non-fatal conditions the caller may want to surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// Frames are collectively wider than the available width and overlap.
    NegativeSpacing { row: RowPosition, spacing: f64 },
    /// A frame extends past `wall_height - bottom_margin` by `overflow` cm.
    VerticalOverflow {
        row: RowPosition,
        index: usize,
        overflow: f64,
    },
}

/// Placement and material totals for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Row-major: every top-row frame, then every bottom-row frame.
    pub frames: Vec<PlacedFrame>,
    pub rows: Vec<RowLayout>,
    pub total_perimeter: f64,
    pub bar_length: f64,
    pub required_units: u64,
    pub unit_price: f64,
    pub total_cost: f64,
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutResult {
    pub fn row(&self, position: RowPosition) -> Option<&RowLayout> {
        self.rows.iter().find(|r| r.row == position)
    }

    pub fn spacing(&self, position: RowPosition) -> Option<f64> {
        self.row(position).and_then(|r| r.spacing)
    }

    pub fn frames_in(&self, position: RowPosition) -> impl Iterator<Item = &PlacedFrame> {
        self.frames.iter().filter(move |f| f.row == position)
    }

    pub fn has_negative_spacing(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, LayoutWarning::NegativeSpacing { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_perimeter() {
        assert_eq!(Frame::new(100.0, 140.0).perimeter(), 480.0);
    }

    #[test]
    fn test_default_margins_match_policy() {
        let m = Margins::default();
        assert_eq!((m.side, m.top, m.bottom, m.inter_row_gap), (10.0, 20.0, 10.0, 15.0));
    }

    #[test]
    fn test_rows_skips_missing_bottom() {
        let req = LayoutRequest::single_row(300.0, 260.0, vec![Frame::new(60.0, 120.0)]);
        let rows: Vec<_> = req.rows().map(|(pos, frames)| (pos, frames.len())).collect();
        assert_eq!(rows, vec![(RowPosition::Top, 1)]);

        let req = req.with_bottom(vec![]);
        assert_eq!(req.rows().count(), 2);
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let req: LayoutRequest = serde_json::from_str(
            r#"{"wall_width": 300, "wall_height": 260, "top": [{"width": 60, "height": 120}]}"#,
        )
        .unwrap();
        assert_eq!(req.margins, Margins::default());
        assert_eq!(req.bottom, None);
        assert_eq!(req.bottom_anchor, BottomAnchor::PairedByIndex);
    }

    #[test]
    fn test_bottom_anchor_wire_format() {
        let anchor: BottomAnchor =
            serde_json::from_str(r#"{"mode": "reference_height", "height": 90}"#).unwrap();
        assert_eq!(anchor, BottomAnchor::ReferenceHeight { height: 90.0 });
    }

    #[test]
    fn test_placed_frame_flattens_dimensions() {
        let placed = PlacedFrame {
            row: RowPosition::Top,
            index: 1,
            frame: Frame::new(60.0, 120.0),
            x: 120.0,
            y: 20.0,
            perimeter: 360.0,
        };
        let json = serde_json::to_value(placed).unwrap();
        assert_eq!(json["width"], 60.0);
        assert_eq!(json["row"], "top");
        assert_eq!(placed.bottom(), 140.0);
    }
}
