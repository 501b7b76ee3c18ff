//! SVG renderer — strokes laid-out segments after applying the view transform.

use crate::layout::types::LayoutResult;
use crate::layout::view::Mat4;

const BACKGROUND: &str = "white";

/// Render the layout to an SVG document for a `width` × `height` canvas.
///
/// One `<line>` per segment, in layout order; endpoints go through `matrix`,
/// stroke widths are converted from graph units to pixels with the matrix's
/// y scale. Deterministic: same inputs, same string.
pub fn render(layout: &LayoutResult, matrix: &Mat4, width: f64, height: f64) -> String {
    let mut parts = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ),
        format!(r#"<rect width="{width}" height="{height}" fill="{BACKGROUND}"/>"#),
    ];

    let px_per_unit = matrix.y_scale();
    for seg in &layout.segments {
        let (x1, y1) = matrix.apply(seg.from.x, seg.from.y);
        let (x2, y2) = matrix.apply(seg.to.x, seg.to.y);
        let w = seg.width * px_per_unit;
        let c = seg.color;
        parts.push(format!(
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="rgb({},{},{})" stroke-width="{w:.2}" stroke-linecap="round"/>"#,
            c.r, c.g, c.b
        ));
    }

    parts.push("</svg>".to_string());
    parts.join("\n")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::{BoundingRect, Point, Rgb, Segment};
    use crate::layout::view;

    fn segment(from: Point, to: Point) -> Segment {
        Segment {
            from,
            to,
            width: 0.1,
            color: Rgb { r: 10, g: 20, b: 30 },
        }
    }

    fn layout_with(segments: Vec<Segment>) -> LayoutResult {
        let mut bounds = BoundingRect::at(Point::new(0.0, 0.0));
        for seg in &segments {
            bounds.expand(seg.from);
            bounds.expand(seg.to);
        }
        LayoutResult { segments, bounds }
    }

    #[test]
    fn test_empty_layout_renders_blank_canvas() {
        let layout = layout_with(vec![]);
        let svg = render(&layout, &Mat4::IDENTITY, 640.0, 480.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("<line"));
        assert!(svg.contains(r#"width="640" height="480""#));
    }

    #[test]
    fn test_one_line_per_segment() {
        let layout = layout_with(vec![
            segment(Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
            segment(Point::new(1.0, 0.0), Point::new(1.0, 1.0)),
        ]);
        let svg = render(&layout, &Mat4::IDENTITY, 640.0, 480.0);
        assert_eq!(svg.matches("<line").count(), 2);
        assert!(svg.contains(r#"stroke="rgb(10,20,30)""#));
    }

    #[test]
    fn test_endpoints_go_through_matrix() {
        let layout = layout_with(vec![segment(
            Point::new(-1.0, 0.0),
            Point::new(1.0, 1.0),
        )]);
        let matrix = view::fit(&layout.bounds, 640.0, 480.0);
        let svg = render(&layout, &matrix, 640.0, 480.0);
        let (x1, y1) = matrix.apply(-1.0, 0.0);
        assert!(svg.contains(&format!(r#"x1="{x1:.2}" y1="{y1:.2}""#)));
    }

    #[test]
    fn test_stroke_width_scaled_to_pixels() {
        let layout = layout_with(vec![segment(
            Point::new(-1.0, -1.0),
            Point::new(1.0, 1.0),
        )]);
        let matrix = view::fit(&layout.bounds, 640.0, 480.0);
        // 0.1 graph units * 240 px/unit = 24 px.
        let svg = render(&layout, &matrix, 640.0, 480.0);
        assert!(svg.contains(r#"stroke-width="24.00""#));
    }
}
