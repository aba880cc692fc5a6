//! Auto-layout — fills a single row with as many default frames as fit.
//!
//! This only builds a `LayoutRequest`; placement goes through the regular engine,
//! so the final spacing follows the edge-anchored rule rather than `gap`.

use serde::{Deserialize, Serialize};

use crate::layout::error::LayoutError;
use crate::layout::model::{Frame, LayoutRequest, Margins, MAX_FRAMES_PER_ROW};

pub const DEFAULT_AUTO_FRAME_WIDTH_CM: f64 = 60.0;
pub const DEFAULT_AUTO_FRAME_HEIGHT_CM: f64 = 120.0;
pub const DEFAULT_AUTO_GAP_CM: f64 = 10.0;

/// Frame shape and minimum gap used to decide how many frames fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoLayoutSpec {
    pub frame: Frame,
    pub gap: f64,
}

impl Default for AutoLayoutSpec {
    fn default() -> Self {
        AutoLayoutSpec {
            frame: Frame::new(DEFAULT_AUTO_FRAME_WIDTH_CM, DEFAULT_AUTO_FRAME_HEIGHT_CM),
            gap: DEFAULT_AUTO_GAP_CM,
        }
    }
}

/// `floor((available_width + gap) / (frame_width + gap))`
pub fn max_frame_count(available_width: f64, frame_width: f64, gap: f64) -> usize {
    ((available_width + gap) / (frame_width + gap)).floor().max(0.0) as usize
}

/// Frame sides must be finite and > 0, the gap finite and >= 0.
pub fn validate_auto_spec(spec: &AutoLayoutSpec) -> Result<(), LayoutError> {
    if !(spec.frame.width.is_finite() && spec.frame.width > 0.0) {
        return Err(LayoutError::dimension("auto.frame.width", spec.frame.width));
    }
    if !(spec.frame.height.is_finite() && spec.frame.height > 0.0) {
        return Err(LayoutError::dimension("auto.frame.height", spec.frame.height));
    }
    if !(spec.gap.is_finite() && spec.gap >= 0.0) {
        return Err(LayoutError::dimension("auto.gap", spec.gap));
    }
    Ok(())
}

/// Builds a single-row request holding as many `spec.frame` copies as fit.
///
/// Fails with `TooManyFrames` rather than allocating a row longer than
/// `MAX_FRAMES_PER_ROW`.
pub fn build_auto_request(
    wall_width: f64,
    wall_height: f64,
    margins: Margins,
    spec: &AutoLayoutSpec,
) -> Result<LayoutRequest, LayoutError> {
    validate_auto_spec(spec)?;

    let available_width = wall_width - 2.0 * margins.side;
    if !(available_width.is_finite() && available_width > 0.0) {
        return Err(LayoutError::dimension("available_width", available_width));
    }

    let count = max_frame_count(available_width, spec.frame.width, spec.gap);
    if count == 0 {
        return Err(LayoutError::NoFramesFit {
            available_width,
            frame_width: spec.frame.width,
        });
    }
    // `as usize` saturates, so a huge wall lands here instead of in `vec!`.
    if count > MAX_FRAMES_PER_ROW {
        return Err(LayoutError::TooManyFrames {
            count,
            limit: MAX_FRAMES_PER_ROW,
        });
    }

    Ok(
        LayoutRequest::single_row(wall_width, wall_height, vec![spec.frame; count])
            .with_margins(margins),
    )
}
