//! Renderers — consumers of the layout output.

pub mod svg;
