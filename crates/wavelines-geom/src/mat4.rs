use core::ops::Mul;

use super::Vec3;

/// 4x4 matrix, column-major (`cols[column][row]`), matching WGSL `mat4x4<f32>`
/// memory layout once narrowed with [`Mat4::to_cols_f32`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub cols: [[f64; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub const fn from_cols(cols: [[f64; 4]; 4]) -> Self {
        Self { cols }
    }

    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    /// Orthographic projection with clip-space depth in `[0, 1]`.
    ///
    /// `near` maps to depth 0 and `far` to depth 1 for points in front of the
    /// camera (view-space z is negative in front).
    pub fn orthographic(left: f64, right: f64, top: f64, bottom: f64, near: f64, far: f64) -> Self {
        let w = 1.0 / (right - left);
        let h = 1.0 / (top - bottom);
        let p = 1.0 / (far - near);

        Self::from_cols([
            [2.0 * w, 0.0, 0.0, 0.0],
            [0.0, 2.0 * h, 0.0, 0.0],
            [0.0, 0.0, -p, 0.0],
            [-(right + left) * w, -(top + bottom) * h, -near * p, 1.0],
        ])
    }

    /// Transforms a point (w = 1) and applies the perspective divide.
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        let c = &self.cols;
        let x = c[0][0] * v.x + c[1][0] * v.y + c[2][0] * v.z + c[3][0];
        let y = c[0][1] * v.x + c[1][1] * v.y + c[2][1] * v.z + c[3][1];
        let z = c[0][2] * v.x + c[1][2] * v.y + c[2][2] * v.z + c[3][2];
        let w = c[0][3] * v.x + c[1][3] * v.y + c[2][3] * v.z + c[3][3];

        if w == 0.0 || w == 1.0 {
            Vec3::new(x, y, z)
        } else {
            Vec3::new(x / w, y / w, z / w)
        }
    }

    pub fn to_cols_f32(&self) -> [[f32; 4]; 4] {
        self.cols.map(|col| col.map(|v| v as f32))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [[0.0f64; 4]; 4];
        for (c, col) in out.iter_mut().enumerate() {
            for (r, cell) in col.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum();
            }
        }
        Mat4::from_cols(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).to_array().iter().all(|d| d.abs() < 1e-9)
    }

    #[test]
    fn identity_is_neutral() {
        let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Mat4::IDENTITY * t, t);
        assert_eq!(t * Mat4::IDENTITY, t);
    }

    #[test]
    fn translation_moves_points() {
        let t = Mat4::translation(Vec3::new(5.0, -2.0, 0.5));
        assert!(approx(t.transform_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(6.0, -1.0, 1.5)));
    }

    #[test]
    fn translations_compose() {
        let a = Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
        let b = Mat4::translation(Vec3::new(0.0, 2.0, 0.0));
        assert!(approx((a * b).transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 0.0)));
    }

    #[test]
    fn orthographic_maps_box_corners_to_ndc() {
        let m = Mat4::orthographic(-400.0, 400.0, 300.0, -300.0, -1000.0, 1000.0);
        assert!(approx(m.transform_point(Vec3::new(-400.0, -300.0, 1000.0)), Vec3::new(-1.0, -1.0, 0.0)));
        assert!(approx(m.transform_point(Vec3::new(400.0, 300.0, -1000.0)), Vec3::new(1.0, 1.0, 1.0)));
        assert!(approx(m.transform_point(Vec3::ZERO), Vec3::new(0.0, 0.0, 0.5)));
    }

    #[test]
    fn narrowing_keeps_layout() {
        let t = Mat4::translation(Vec3::new(7.0, 8.0, 9.0));
        let f = t.to_cols_f32();
        assert_eq!(f[3], [7.0, 8.0, 9.0, 1.0]);
        assert_eq!(f[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
