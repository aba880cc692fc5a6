use thiserror::Error;

/// Reasons the engine refuses a request. No partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid dimension '{field}': {value}")]
    InvalidDimension { field: String, value: f64 },

    #[error("invalid unit price: {value}")]
    InvalidPrice { value: f64 },

    #[error("bottom row has {bottom} frames but top row only has {top}")]
    RowMismatch { top: usize, bottom: usize },

    #[error("no {frame_width} cm frame fits in {available_width} cm of available width")]
    NoFramesFit {
        available_width: f64,
        frame_width: f64,
    },

    #[error("{count} frames would fit in one row; the limit is {limit}")]
    TooManyFrames { count: usize, limit: usize },
}

impl LayoutError {
    pub(crate) fn dimension(field: impl Into<String>, value: f64) -> Self {
        LayoutError::InvalidDimension {
            field: field.into(),
            value,
        }
    }
}
