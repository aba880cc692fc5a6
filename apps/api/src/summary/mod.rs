// Plain-text views of a computed layout for people rather than renderers.

pub mod report;
pub mod share;

pub use report::build_report_lines;
pub use share::{build_share_url, share_text};

/// Formats a centimeter value without a trailing `.0` for whole numbers.
pub(crate) fn format_cm(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value.round())
    } else {
        format!("{value:.1}")
    }
}

pub(crate) fn format_money(value: f64) -> String {
    format!("{value:.2}")
}
