//! Angle-path layout engine.
//!
//! Walks the trajectory tree parent-before-child and assigns every edge a
//! 2D position, a stroke width and a color. The turn direction alternates
//! with id parity, which produces the characteristic angle-path shape; both
//! width and color are graded by node depth relative to the tree's maximum
//! depth.

use std::collections::HashMap;

use log::debug;

use super::color::astro_color;
use super::types::{BoundingRect, LayoutResult, Point, Segment};
use crate::config::StyleConfig;
use crate::tree::{ROOT_ID, TrajectoryTree};

/// Angle-path layout engine.
pub struct AnglePathLayout;

impl AnglePathLayout {
    /// Lay out every tree edge as a colored, width-graded segment.
    ///
    /// Pure function of `(tree, style)`: repeated calls return identical
    /// results, and nothing is cached on the tree.
    pub fn layout(tree: &TrajectoryTree, style: &StyleConfig) -> LayoutResult {
        let max_depth = tree.max_depth() as f64;
        let origin = Point::new(0.0, 0.0);
        let mut angle: HashMap<u64, f64> = HashMap::from([(ROOT_ID, 0.0)]);
        let mut position: HashMap<u64, Point> = HashMap::from([(ROOT_ID, origin)]);
        let mut segments: Vec<Segment> = Vec::new();
        let mut bounds = BoundingRect::at(origin);

        tree.for_each(|node| {
            // The root only seeds the working maps; it emits no segment.
            let Some(parent_id) = node.parent else { return };
            let parent_angle = *angle
                .get(&parent_id)
                .expect("parent angle must be recorded before its children");
            let parent_pos = *position
                .get(&parent_id)
                .expect("parent position must be recorded before its children");

            let id = node.id as f64;
            let r = id / (1.0 + id.powf(style.edge_length_gamma));
            // Even ids turn one way, odd ids the other.
            let turn = style.angle_shift - 2.0 * (node.id % 2) as f64;
            let phi = parent_angle + style.angle_amplifier * turn;
            let pos = Point::new(parent_pos.x + r * phi.cos(), parent_pos.y + r * phi.sin());
            angle.insert(node.id, phi);
            position.insert(node.id, pos);

            // max_depth >= 1 whenever any non-root node exists.
            let fraction = node.depth as f64 / max_depth;
            let t = fraction.powf(style.color_speed_gamma);
            let width = style
                .stroke_min_value
                .max(style.stroke_width_factor * (1.0 - fraction.powf(style.stroke_width_gamma)));
            let color = astro_color(
                t,
                style.color_direction,
                style.color_rotations,
                style.color_saturation_amplitude,
                style.color_intensity_gamma,
            );

            segments.push(Segment {
                from: parent_pos,
                to: pos,
                width,
                color,
            });
            bounds.expand(pos);
        });

        debug!(
            "layout produced {} segments, bounds [{:.3}, {:.3}] x [{:.3}, {:.3}]",
            segments.len(),
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y
        );
        LayoutResult { segments, bounds }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
