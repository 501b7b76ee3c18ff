//! View-fitting transform — maps the layout bounding rect onto a canvas.

use super::types::BoundingRect;

/// Row-major 4×4 homogeneous matrix packing a 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [[f64; 4]; 4]);

impl Mat4 {
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Apply to a 2D point (z = 0, w = 1).
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.0;
        (
            m[0][0] * x + m[0][1] * y + m[0][3],
            m[1][0] * x + m[1][1] * y + m[1][3],
        )
    }

    /// Pixels per graph unit on the y axis.
    pub fn y_scale(&self) -> f64 {
        self.0[1][1].abs()
    }
}

/// Fit `rect` onto a `width` × `height` pixel canvas.
///
/// Both axes are scaled by canvas-dimension / longest-rect-dimension, so on a
/// square canvas the longer rect side exactly fills it and the aspect ratio
/// is preserved; a wider or taller canvas stretches the shorter axis to keep
/// the content centered edge to edge. Screen y grows downward while graph y
/// grows upward, so the y scale is negative. The translation is derived from
/// the scale and the rect center, which keeps a degenerate (single-point)
/// rect finite and centered.
pub fn fit(rect: &BoundingRect, width: f64, height: f64) -> Mat4 {
    let extent = rect.width().max(rect.height());
    let extent = if extent > 0.0 { extent } else { 1.0 };
    let sx = width / extent;
    let sy = -height / extent;
    let center = rect.center();
    let tx = width / 2.0 - sx * center.x;
    let ty = height / 2.0 - sy * center.y;
    Mat4([
        [sx, 0.0, 0.0, tx],
        [0.0, sy, 0.0, ty],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

// ─── Tests ───────────────────────────────────────────────────────────────────
