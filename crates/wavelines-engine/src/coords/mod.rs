//! Coordinate types shared between the runtime and renderers.
//!
//! Sizes are logical pixels (DPI-aware). Geometry positions are scene units,
//! transformed to clip space by the camera matrix handed to each renderer.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
