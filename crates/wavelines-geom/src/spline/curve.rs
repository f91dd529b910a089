use crate::Vec3;

/// Knot spacings below this are treated as coincident points.
const MIN_KNOT_SPACING: f64 = 1e-4;

/// Parametrization used between control points.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CurveType {
    /// Knot spacing `|Pi - Pj|^0.5`. Avoids cusps and self-intersections.
    #[default]
    Centripetal,
    /// Knot spacing `|Pi - Pj|`.
    Chordal,
    /// Uniform knots; tangents scaled by the curve tension.
    CatmullRom,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("curve requires at least 2 control points, got {count}")]
    TooFewPoints { count: usize },
    #[error("control point {index} is not finite")]
    NonFinitePoint { index: usize },
    #[error("sampling requires at least one division")]
    ZeroDivisions,
}

/// Piecewise cubic curve passing through every control point.
///
/// Parameter `t` runs over `[0, 1]` across the whole curve; each segment
/// covers an equal share of it regardless of its length.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
    closed: bool,
    curve_type: CurveType,
    tension: f64,
}

impl CatmullRomCurve {
    pub const DEFAULT_TENSION: f64 = 0.5;

    /// Open centripetal curve through `points`.
    pub fn new(points: Vec<Vec3>) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints { count: points.len() });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::NonFinitePoint { index });
        }

        Ok(Self {
            points,
            closed: false,
            curve_type: CurveType::default(),
            tension: Self::DEFAULT_TENSION,
        })
    }

    #[must_use]
    pub fn with_curve_type(mut self, curve_type: CurveType) -> Self {
        self.curve_type = curve_type;
        self
    }

    /// Tangent scale for [`CurveType::CatmullRom`]; ignored by the other types.
    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Closed curves wrap from the last control point back to the first.
    #[must_use]
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    #[inline]
    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Evaluates the curve at `t`.
    ///
    /// Open curves clamp `t` to `[0, 1]`; closed curves wrap.
    pub fn point_at(&self, t: f64) -> Vec3 {
        let pts = &self.points;
        let l = pts.len() as isize;

        let t = if self.closed { t } else { t.clamp(0.0, 1.0) };
        let p = (l - if self.closed { 0 } else { 1 }) as f64 * t;
        let mut seg = p.floor() as isize;
        let mut weight = p - seg as f64;

        if self.closed {
            seg = seg.rem_euclid(l);
        } else if weight == 0.0 && seg == l - 1 {
            // t == 1 evaluates the end of the last segment.
            seg = l - 2;
            weight = 1.0;
        }

        let at = |i: isize| pts[i.rem_euclid(l) as usize];

        let p0 = if self.closed || seg > 0 {
            at(seg - 1)
        } else {
            pts[0] * 2.0 - pts[1]
        };
        let p1 = at(seg);
        let p2 = at(seg + 1);
        let p3 = if self.closed || seg + 2 < l {
            at(seg + 2)
        } else {
            pts[(l - 1) as usize] * 2.0 - pts[(l - 2) as usize]
        };

        let [px, py, pz] = match self.curve_type {
            CurveType::Centripetal | CurveType::Chordal => {
                let pow = if self.curve_type == CurveType::Centripetal { 0.25 } else { 0.5 };
                let mut dt0 = p0.distance_squared(p1).powf(pow);
                let mut dt1 = p1.distance_squared(p2).powf(pow);
                let mut dt2 = p2.distance_squared(p3).powf(pow);

                if dt1 < MIN_KNOT_SPACING {
                    dt1 = 1.0;
                }
                if dt0 < MIN_KNOT_SPACING {
                    dt0 = dt1;
                }
                if dt2 < MIN_KNOT_SPACING {
                    dt2 = dt1;
                }

                let knots = [dt0, dt1, dt2];
                [
                    CubicPoly::non_uniform(p0.x, p1.x, p2.x, p3.x, knots),
                    CubicPoly::non_uniform(p0.y, p1.y, p2.y, p3.y, knots),
                    CubicPoly::non_uniform(p0.z, p1.z, p2.z, p3.z, knots),
                ]
            }
            CurveType::CatmullRom => [
                CubicPoly::uniform(p0.x, p1.x, p2.x, p3.x, self.tension),
                CubicPoly::uniform(p0.y, p1.y, p2.y, p3.y, self.tension),
                CubicPoly::uniform(p0.z, p1.z, p2.z, p3.z, self.tension),
            ],
        };

        Vec3::new(px.eval(weight), py.eval(weight), pz.eval(weight))
    }

    /// Samples `divisions + 1` points at uniform parameter steps, both curve
    /// ends included.
    pub fn points(&self, divisions: usize) -> Result<Vec<Vec3>, CurveError> {
        if divisions == 0 {
            return Err(CurveError::ZeroDivisions);
        }

        let n = divisions as f64;
        Ok((0..=divisions).map(|i| self.point_at(i as f64 / n)).collect())
    }
}

/// Cubic Hermite segment `c0 + c1 t + c2 t^2 + c3 t^3` on `t ∈ [0, 1]`.
#[derive(Debug, Copy, Clone)]
struct CubicPoly {
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl CubicPoly {
    /// Segment from `x0` to `x1` with end tangents `t0`, `t1`.
    fn hermite(x0: f64, x1: f64, t0: f64, t1: f64) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn uniform(x0: f64, x1: f64, x2: f64, x3: f64, tension: f64) -> Self {
        Self::hermite(x1, x2, tension * (x2 - x0), tension * (x3 - x1))
    }

    /// Tangents from knot spacings `[dt0, dt1, dt2]`, rescaled to `[0, 1]`.
    fn non_uniform(x0: f64, x1: f64, x2: f64, x3: f64, [dt0, dt1, dt2]: [f64; 3]) -> Self {
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;

        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    #[inline]
    fn eval(&self, t: f64) -> f64 {
        let t2 = t * t;
        let t3 = t2 * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t3
    }
}
