//! wavelines engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the scene crate:
//! the window loop, the wgpu surface, and the polyline renderer.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
