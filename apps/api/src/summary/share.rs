//! Short message summarizing a layout, packed into a messaging link.

use crate::catalog::Product;
use crate::layout::LayoutResult;
use crate::summary::{format_cm, format_money};

/// Compact multi-line summary: frame sizes, totals, and cost.
pub fn share_text(result: &LayoutResult, product: &Product) -> String {
    let count = result.frames.len();
    let mut lines = vec![format!(
        "Molding plan: {count} {}",
        if count == 1 { "frame" } else { "frames" }
    )];
    lines.extend(result.frames.iter().map(|f| {
        format!(
            "{} {}: {}x{} cm",
            f.row.label(),
            f.index,
            format_cm(f.frame.width),
            format_cm(f.frame.height)
        )
    }));
    lines.push(format!(
        "Total {} cm, {} x {} cm bars ({})",
        format_cm(result.total_perimeter),
        result.required_units,
        format_cm(product.bar_length),
        product.tier.label()
    ));
    lines.push(format!("Cost: {}", format_money(result.total_cost)));
    lines.join("\n")
}

/// Appends the URL-encoded `text` to `base_url` (e.g. `https://wa.me/?text=`).
pub fn build_share_url(base_url: &str, text: &str) -> String {
    format!("{base_url}{}", urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCatalog;
    use crate::layout::{compute_layout, Frame, LayoutRequest};

    #[test]
    fn test_share_text_lists_frames_and_totals() {
        let request = LayoutRequest::single_row(300.0, 260.0, vec![Frame::new(100.0, 140.0)]);
        let product = ProductCatalog::default().standard;
        let result = compute_layout(&request, product.bar_length, product.unit_price).unwrap();

        assert_eq!(
            share_text(&result, &product),
            "Molding plan: 1 frame\ntop 1: 100x140 cm\nTotal 480 cm, 2 x 290 cm bars (standard)\nCost: 138.00"
        );
    }

    #[test]
    fn test_share_url_is_encoded() {
        let url = build_share_url("https://wa.me/?text=", "a b\nc&d");
        assert_eq!(url, "https://wa.me/?text=a%20b%0Ac%26d");
    }
}
