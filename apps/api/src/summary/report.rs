//! Line-by-line text for the printable layout report.
//!
//! The document renderer lays these out; nothing here knows about pages or fonts.

use crate::catalog::Product;
use crate::layout::{LayoutRequest, LayoutResult, LayoutWarning, RowPosition};
use crate::summary::{format_cm, format_money};

pub const REPORT_TITLE: &str = "Wall molding layout";

/// Title, wall, product, then per row a summary and one line per frame,
/// then totals and any warnings.
pub fn build_report_lines(
    request: &LayoutRequest,
    result: &LayoutResult,
    product: &Product,
) -> Vec<String> {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        format!(
            "Wall: {} x {} cm",
            format_cm(request.wall_width),
            format_cm(request.wall_height)
        ),
        format!(
            "Product: {} ({} cm bars at {} each)",
            product.tier.label(),
            format_cm(result.bar_length),
            format_money(result.unit_price)
        ),
    ];

    for row in &result.rows {
        if let Some(spacing) = row.spacing {
            lines.push(format!(
                "{} row: {} {}, spacing {} cm",
                row_title(row.row),
                row.frame_count,
                if row.frame_count == 1 { "frame" } else { "frames" },
                format_cm(spacing)
            ));
        }
        lines.extend(result.frames_in(row.row).map(|f| {
            format!(
                "{} row, frame {}: {} x {} cm, perimeter {} cm",
                row_title(f.row),
                f.index,
                format_cm(f.frame.width),
                format_cm(f.frame.height),
                format_cm(f.perimeter)
            )
        }));
    }

    lines.push(format!(
        "Total perimeter: {} cm",
        format_cm(result.total_perimeter)
    ));
    lines.push(format!("Bars required: {}", result.required_units));
    lines.push(format!("Total cost: {}", format_money(result.total_cost)));

    lines.extend(result.warnings.iter().map(warning_line));
    lines
}

pub(crate) fn warning_line(warning: &LayoutWarning) -> String {
    match warning {
        LayoutWarning::NegativeSpacing { row, spacing } => format!(
            "Warning: {} row frames overlap (spacing {} cm)",
            row.label(),
            format_cm(*spacing)
        ),
        LayoutWarning::VerticalOverflow {
            row,
            index,
            overflow,
        } => format!(
            "Warning: {} row frame {} extends {} cm past the bottom margin",
            row.label(),
            index,
            format_cm(*overflow)
        ),
    }
}

fn row_title(row: RowPosition) -> &'static str {
    match row {
        RowPosition::Top => "Top",
        RowPosition::Bottom => "Bottom",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCatalog;
    use crate::layout::{compute_layout, Frame};

    #[test]
    fn test_report_for_overfull_row() {
        let request = LayoutRequest::single_row(300.0, 260.0, vec![Frame::new(100.0, 140.0); 3]);
        let product = ProductCatalog::default().standard;
        let result = compute_layout(&request, product.bar_length, product.unit_price).unwrap();

        let lines = build_report_lines(&request, &result, &product);
        assert_eq!(
            lines,
            vec![
                "Wall molding layout",
                "Wall: 300 x 260 cm",
                "Product: standard (290 cm bars at 69.00 each)",
                "Top row: 3 frames, spacing -10 cm",
                "Top row, frame 1: 100 x 140 cm, perimeter 480 cm",
                "Top row, frame 2: 100 x 140 cm, perimeter 480 cm",
                "Top row, frame 3: 100 x 140 cm, perimeter 480 cm",
                "Total perimeter: 1440 cm",
                "Bars required: 5",
                "Total cost: 345.00",
                "Warning: top row frames overlap (spacing -10 cm)",
            ]
        );
    }

    #[test]
    fn test_report_skips_empty_bottom_row_summary() {
        let request = LayoutRequest::single_row(300.0, 260.0, vec![Frame::new(60.0, 120.0)])
            .with_bottom(vec![]);
        let product = ProductCatalog::default().premium;
        let result = compute_layout(&request, product.bar_length, product.unit_price).unwrap();

        let lines = build_report_lines(&request, &result, &product);
        assert!(lines.iter().any(|l| l == "Top row: 1 frame, spacing 110 cm"));
        assert!(!lines.iter().any(|l| l.starts_with("Bottom row")));
        assert!(lines.contains(&"Bars required: 2".to_string()));
    }
}
