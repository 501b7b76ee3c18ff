//! Layout engine — positions, widths, colors and the view-fitting transform.

pub mod color;
pub mod engine;
pub mod types;
pub mod view;

pub use engine::AnglePathLayout;
pub use types::{BoundingRect, LayoutResult, Point, Rgb, Segment};
pub use view::{Mat4, fit};
