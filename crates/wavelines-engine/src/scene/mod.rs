//! Draw stream recorded by the app and consumed by the renderers.
//!
//! Commands are kept and painted in push order. Shape payloads live under
//! `scene::shapes`.

mod list;

pub mod shapes;

pub use list::{DrawCmd, DrawList};
