//! Geometry for the wavelines scene.
//!
//! Everything here is pure: control points, curve sampling and the camera
//! frustum are derived from a [`Viewport`] on each call and hold no hidden
//! state.
//!
//! Coordinate space: scene units equal logical pixels, origin at the window
//! centre, +X right, +Y up.

mod mat4;
mod projection;
mod vec3;
mod viewport;

pub mod spline;

pub use mat4::Mat4;
pub use projection::{compute_frustum, Frustum, OrthographicCamera, CAMERA_Z, FAR_PLANE, NEAR_PLANE};
pub use spline::{
    build_control_points, sample_curve, CatmullRomCurve, CurveError, CurveType, CONTROL_POINT_COUNT,
    DEFAULT_DIVISIONS,
};
pub use vec3::Vec3;
pub use viewport::Viewport;
