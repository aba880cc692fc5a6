//! Material quantities derived from placed frames.

use crate::layout::model::PlacedFrame;

/// Sum of every frame's perimeter, in the order given.
pub fn total_perimeter(frames: &[PlacedFrame]) -> f64 {
    frames.iter().map(|f| f.perimeter).sum()
}

/// Number of whole bars needed to cover `total_perimeter`.
pub fn required_units(total_perimeter: f64, bar_length: f64) -> u64 {
    (total_perimeter / bar_length).ceil() as u64
}

pub fn total_cost(required_units: u64, unit_price: f64) -> f64 {
    required_units as f64 * unit_price
}
