//! wgpu device, surface and frame acquisition.
//!
//! [`Gpu`] owns the device/queue, the window surface and the MSAA color
//! target, and hands out one [`GpuFrame`] per redraw.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
