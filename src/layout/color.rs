//! Color gradient — helix-style mapping from a progress scalar to RGB.
//!
//! The gradient spirals around the gray diagonal of the RGB cube, so
//! intensity rises monotonically with `t` while the hue rotates.

use std::f64::consts::TAU;

use super::types::Rgb;

// Per-channel (cos, sin) coefficients of the helix. Fixed by the scheme.
const RED: (f64, f64) = (-0.14861, 1.78277);
const GREEN: (f64, f64) = (-0.29227, -0.90649);
const BLUE: (f64, f64) = (1.97294, 0.0);

/// Map `t` in [0, 1] plus four shape parameters to an RGB color.
///
/// `lg = t^gamma_intensity` sets the gray level, `hue_direction` (thirds of a
/// turn) and `rotations` set the hue phase, and `saturation` scales the
/// deviation from gray. Channels are clamped to [0, 1] before 8-bit
/// quantization. Stateless and bit-reproducible.
pub fn astro_color(
    t: f64,
    hue_direction: f64,
    rotations: f64,
    saturation: f64,
    gamma_intensity: f64,
) -> Rgb {
    let lg = t.powf(gamma_intensity);
    let psi = TAU * (hue_direction / 3.0 + rotations * t);
    let amplitude = saturation * lg * (1.0 - lg) / 2.0;
    let (cos, sin) = (psi.cos(), psi.sin());
    let channel = |(c, s): (f64, f64)| lg + amplitude * (c * cos + s * sin);
    Rgb::from_unit(channel(RED), channel(GREEN), channel(BLUE))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
