//! Catmull–Rom curves and the fixed control-point layout of the scene.

mod curve;
mod layout;

pub use curve::{CatmullRomCurve, CurveError, CurveType};
pub use layout::{build_control_points, sample_curve, CONTROL_POINT_COUNT, DEFAULT_DIVISIONS};
