use crate::{Vec3, Viewport};

use super::{CatmullRomCurve, CurveError};

/// Number of control points in the scene layout.
pub const CONTROL_POINT_COUNT: usize = 6;

/// Default sampling resolution; yields `DEFAULT_DIVISIONS + 1` points.
pub const DEFAULT_DIVISIONS: usize = 100;

/// Control points of the wave, spanning the viewport from left edge to beyond
/// the right edge.
///
/// Only x of every point and y of the fourth depend on the viewport; the rest
/// are fixed pixel offsets from the centre.
pub fn build_control_points(viewport: Viewport) -> [Vec3; CONTROL_POINT_COUNT] {
    let w = viewport.width;
    let h = viewport.height;

    [
        Vec3::new(-w / 2.0, -400.0, 0.0),
        Vec3::new(-w / 4.0, -500.0, 0.0),
        Vec3::new(0.0, -100.0, 0.0),
        Vec3::new(w / 4.0, -h / 4.0, 0.0),
        Vec3::new(w / 2.8, 260.0, 0.0),
        Vec3::new(w, 340.0, 0.0),
    ]
}

/// Samples an open centripetal Catmull–Rom curve through `points` into
/// `divisions + 1` points.
pub fn sample_curve(points: &[Vec3], divisions: usize) -> Result<Vec<Vec3>, CurveError> {
    CatmullRomCurve::new(points.to_vec())?.points(divisions)
}
