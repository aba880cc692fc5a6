// Wall layout engine: frame placement, spacing, and molding quantities.
// Everything here is pure; HTTP concerns live in `handlers`.

pub mod auto;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod model;
pub mod quantity;
pub mod validation;

// Re-export the public API consumed by handlers and the summary builders.
pub use auto::{build_auto_request, validate_auto_spec, AutoLayoutSpec};
pub use engine::compute_layout;
pub use error::LayoutError;
pub use model::{
    BottomAnchor, Frame, LayoutRequest, LayoutResult, LayoutWarning, Margins, RowPosition,
    MAX_FRAMES_PER_ROW,
};
