//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in scene units (centre origin, +Y up).
//! - Vertex shaders transform to clip space with a view-projection uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
