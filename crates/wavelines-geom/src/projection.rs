use super::{Mat4, Vec3, Viewport};

/// Near clipping plane. Negative so geometry behind the camera stays visible.
pub const NEAR_PLANE: f64 = -1000.0;
/// Far clipping plane.
pub const FAR_PLANE: f64 = 1000.0;
/// Camera distance from the z = 0 drawing plane.
pub const CAMERA_Z: f64 = 10.0;

/// Orthographic frustum bounds in scene units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frustum {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
}

/// Frustum centred on the origin, one scene unit per logical pixel.
pub fn compute_frustum(viewport: Viewport) -> Frustum {
    let half_w = viewport.width / 2.0;
    let half_h = viewport.height / 2.0;

    Frustum {
        left: -half_w,
        right: half_w,
        top: half_h,
        bottom: -half_h,
        near: NEAR_PLANE,
        far: FAR_PLANE,
    }
}

/// Orthographic camera looking down -Z from `(0, 0, CAMERA_Z)`.
///
/// The projection matrix is cached and rebuilt only by [`set_frustum`](Self::set_frustum).
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    frustum: Frustum,
    position: Vec3,
    projection: Mat4,
}

impl OrthographicCamera {
    pub fn new(frustum: Frustum) -> Self {
        let mut camera = Self {
            frustum,
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Camera fitted to `viewport`.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(compute_frustum(viewport))
    }

    #[inline]
    pub fn frustum(&self) -> Frustum {
        self.frustum
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Replaces the frustum bounds and recomputes the projection matrix.
    pub fn set_frustum(&mut self, frustum: Frustum) {
        self.frustum = frustum;
        self.update_projection_matrix();
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World-to-camera transform (inverse of the camera translation).
    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::translation(-self.position)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    fn update_projection_matrix(&mut self) {
        let f = self.frustum;
        self.projection = Mat4::orthographic(f.left, f.right, f.top, f.bottom, f.near, f.far);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn frustum_is_centred_on_viewport() {
        for &(w, h) in &[(800.0, 600.0), (1.0, 1.0), (1920.0, 1080.0), (333.3, 17.25)] {
            let f = compute_frustum(Viewport::new(w, h));
            assert!(close(f.left, -w / 2.0));
            assert!(close(f.right, w / 2.0));
            assert!(close(f.top, h / 2.0));
            assert!(close(f.bottom, -h / 2.0));
            assert_eq!(f.near, NEAR_PLANE);
            assert_eq!(f.far, FAR_PLANE);
        }
    }

    #[test]
    fn view_projection_maps_viewport_corners_to_ndc() {
        let camera = OrthographicCamera::for_viewport(Viewport::new(800.0, 600.0));
        let vp = camera.view_projection();

        let lo = vp.transform_point(Vec3::new(-400.0, -300.0, 0.0));
        let hi = vp.transform_point(Vec3::new(400.0, 300.0, 0.0));

        assert!(close(lo.x, -1.0) && close(lo.y, -1.0));
        assert!(close(hi.x, 1.0) && close(hi.y, 1.0));
        assert!((0.0..=1.0).contains(&lo.z));
        assert!((0.0..=1.0).contains(&hi.z));
    }

    #[test]
    fn one_scene_unit_is_one_pixel() {
        let camera = OrthographicCamera::for_viewport(Viewport::new(800.0, 600.0));
        let vp = camera.view_projection();
        let a = vp.transform_point(Vec3::new(0.0, 0.0, 0.0));
        let b = vp.transform_point(Vec3::new(1.0, 1.0, 0.0));
        // NDC spans 2 units over the viewport.
        assert!(close((b.x - a.x) * 400.0, 1.0));
        assert!(close((b.y - a.y) * 300.0, 1.0));
    }

    #[test]
    fn set_frustum_recomputes_projection() {
        let mut camera = OrthographicCamera::for_viewport(Viewport::new(800.0, 600.0));
        let before = camera.projection_matrix();

        camera.set_frustum(compute_frustum(Viewport::new(1024.0, 768.0)));

        assert_ne!(camera.projection_matrix(), before);
        assert_eq!(camera, OrthographicCamera::for_viewport(Viewport::new(1024.0, 768.0)));
    }

    #[test]
    fn camera_sits_in_front_of_drawing_plane() {
        let camera = OrthographicCamera::for_viewport(Viewport::new(10.0, 10.0));
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, CAMERA_Z));
        let p = camera.view_matrix().transform_point(Vec3::ZERO);
        assert!(close(p.z, -CAMERA_Z));
    }
}
