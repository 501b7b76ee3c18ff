//! collatz-path — Collatz trajectory tree to SVG angle-path renderer.
//!
//! Public API: `render_svg()`

pub mod config;
pub mod error;
pub mod layout;
pub mod renderers;
pub mod tree;

#[cfg(feature = "wasm")]
pub mod wasm;

use crate::config::StyleConfig;
use crate::error::Error;
use crate::layout::AnglePathLayout;
use crate::layout::view;
use crate::tree::TrajectoryTree;

/// Build the merged trajectory tree of `numbers` and render it as an SVG
/// document fitted to a `width` × `height` canvas.
///
/// Fails only on a non-positive starting number; numbers before the failing
/// one are simply discarded along with the partial tree.
pub fn render_svg(
    numbers: &[i64],
    style: &StyleConfig,
    width: f64,
    height: f64,
) -> Result<String, Error> {
    let mut tree = TrajectoryTree::new();
    tree.insert_all(numbers)?;
    let result = AnglePathLayout::layout(&tree, style);
    let matrix = view::fit(&result.bounds, width, height);
    Ok(renderers::svg::render(&result, &matrix, width, height))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
