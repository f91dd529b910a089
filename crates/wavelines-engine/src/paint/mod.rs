//! Colour model shared between the scene and renderers.

mod color;

pub use color::Color;
