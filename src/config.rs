//! StyleConfig — numeric parameters for geometry, stroke width and color.
//!
//! Pure data with value semantics: clone it, tweak fields with struct-update
//! syntax, and rerun the layout. Serde support exists so the CLI can load a
//! style from a JSON file; absent fields fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Style parameters for one layout pass.
///
/// The ranges in the field docs are the recommended slider bounds; values
/// outside them are accepted and simply look stranger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Turn-angle offset, range [0.5, 0.8].
    pub angle_shift: f64,
    /// Turn-angle amplitude, range [0.2, 0.5].
    pub angle_amplifier: f64,
    /// Edge-length exponent, range [0.95, 2.0].
    pub edge_length_gamma: f64,
    /// Stroke width floor, range [0, 0.1].
    pub stroke_min_value: f64,
    /// Stroke width scale, range [0, 0.5].
    pub stroke_width_factor: f64,
    /// Stroke width falloff exponent, range [0.5, 1.5].
    pub stroke_width_gamma: f64,
    /// Initial hue direction, range [0, π].
    pub color_direction: f64,
    /// Gradient rotations across the depth range, range [0, 3].
    pub color_rotations: f64,
    /// Hue saturation amplitude, range [0, 1].
    pub color_saturation_amplitude: f64,
    /// Intensity gamma, range [0.5, 1.5].
    pub color_intensity_gamma: f64,
    /// Exponent on the depth fraction feeding the gradient, range [0.1, 1.5].
    pub color_speed_gamma: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            angle_shift: 0.62,
            angle_amplifier: 0.32,
            edge_length_gamma: 1.1,
            stroke_min_value: 0.03,
            stroke_width_factor: 0.3,
            stroke_width_gamma: 1.0,
            color_direction: 2.49,
            color_rotations: 0.76,
            color_saturation_amplitude: 0.9,
            color_intensity_gamma: 1.3,
            color_speed_gamma: 0.8,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
