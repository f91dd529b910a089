use wavelines_engine::scene::DrawList;
use wavelines_geom::{
    build_control_points, compute_frustum, CatmullRomCurve, CurveError, OrthographicCamera, Vec3,
    Viewport,
};

use crate::config::SceneConfig;
use crate::shapes::LineSet;

/// Samples the scene curve for `viewport`.
///
/// Pure: the same inputs always give bit-identical output.
pub fn update_spline(viewport: Viewport, config: &SceneConfig) -> Result<Vec<Vec3>, CurveError> {
    let controls = build_control_points(viewport);

    CatmullRomCurve::new(controls.to_vec())?
        .with_curve_type(config.curve_type)
        .with_tension(config.tension)
        .with_closed(config.closed)
        .points(config.divisions)
}

/// Owns the viewport and everything derived from it: camera, sampled
/// polyline and line shapes.
///
/// State after [`SceneDriver::resize`] equals a fresh [`SceneDriver::new`]
/// with the same viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDriver {
    config: SceneConfig,
    viewport: Viewport,
    camera: OrthographicCamera,
    polyline: Vec<Vec3>,
    lines: LineSet,
}

impl SceneDriver {
    /// Derives the startup scene. `viewport` should have a positive area.
    pub fn new(config: SceneConfig, viewport: Viewport) -> Result<Self, CurveError> {
        let polyline = update_spline(viewport, &config)?;

        let mut lines = LineSet::new(&config.offsets, config.line_color);
        lines.assign(&polyline);

        log::debug!(
            "scene built for {}x{}: {} samples, {} lines",
            viewport.width,
            viewport.height,
            polyline.len(),
            lines.len()
        );

        Ok(Self {
            camera: OrthographicCamera::for_viewport(viewport),
            config,
            viewport,
            polyline,
            lines,
        })
    }

    /// Re-derives frustum and geometry for `viewport`.
    ///
    /// Returns `false` when nothing changed: zero-area viewports are ignored,
    /// and a failed resample keeps the previous polyline.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if !viewport.is_valid() {
            log::debug!("ignoring resize to {}x{}", viewport.width, viewport.height);
            return false;
        }

        self.viewport = viewport;
        self.camera.set_frustum(compute_frustum(viewport));

        match update_spline(viewport, &self.config) {
            Ok(polyline) => {
                self.lines.assign(&polyline);
                self.polyline = polyline;
                log::debug!(
                    "resampled {} points for {}x{}",
                    self.polyline.len(),
                    viewport.width,
                    viewport.height
                );
                true
            }
            Err(e) => {
                log::error!("failed to resample curve for {}x{}: {e}", viewport.width, viewport.height);
                false
            }
        }
    }

    /// Pushes one polyline command per line shape.
    pub fn record(&self, list: &mut DrawList) {
        self.lines.record(list);
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &OrthographicCamera {
        &self.camera
    }

    pub fn polyline(&self) -> &[Vec3] {
        &self.polyline
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wavelines_engine::scene::DrawCmd;
    use wavelines_geom::CurveType;

    fn driver(w: f64, h: f64) -> SceneDriver {
        SceneDriver::new(SceneConfig::default(), Viewport::new(w, h)).unwrap()
    }

    fn assert_lines_match_polyline(d: &SceneDriver) {
        let expected: Vec<[f32; 3]> = d.polyline().iter().map(|p| p.to_f32_array()).collect();
        for shape in d.lines().shapes() {
            assert_eq!(&shape.points()[..], &expected[..]);
        }
    }

    #[test]
    fn startup_at_800x600() {
        let d = driver(800.0, 600.0);

        let f = d.camera().frustum();
        assert_eq!((f.left, f.right, f.top, f.bottom), (-400.0, 400.0, 300.0, -300.0));

        let pts = d.polyline();
        assert_eq!(pts.len(), 101);
        assert_eq!(pts[0], Vec3::new(-400.0, -400.0, 0.0));
        let last = pts[100] - Vec3::new(800.0, 340.0, 0.0);
        assert!(last.to_array().iter().all(|d| d.abs() < 1e-9), "last sample {:?}", pts[100]);

        assert_eq!(d.lines().len(), 4);
        assert_lines_match_polyline(&d);
    }

    #[test]
    fn startup_is_deterministic() {
        let a = update_spline(Viewport::new(1280.0, 720.0), &SceneConfig::default()).unwrap();
        let b = update_spline(Viewport::new(1280.0, 720.0), &SceneConfig::default()).unwrap();
        let bits = |v: &[Vec3]| v.iter().flat_map(|p| p.to_array().map(f64::to_bits)).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn resize_matches_fresh_startup() {
        let mut d = driver(800.0, 600.0);
        assert!(d.resize(Viewport::new(1024.0, 512.0)));

        let fresh = driver(1024.0, 512.0);
        assert_eq!(d.viewport(), fresh.viewport());
        assert_eq!(d.camera(), fresh.camera());
        assert_eq!(d.polyline(), fresh.polyline());
        assert_eq!(d.lines(), fresh.lines());
        assert_lines_match_polyline(&d);
    }

    #[test]
    fn zero_area_resize_is_ignored() {
        let mut d = driver(800.0, 600.0);
        let before = d.clone();

        assert!(!d.resize(Viewport::new(0.0, 0.0)));
        assert!(!d.resize(Viewport::new(800.0, 0.0)));
        assert_eq!(d, before);
    }

    #[test]
    fn startup_rejects_zero_divisions() {
        let config = SceneConfig { divisions: 0, ..SceneConfig::default() };
        let err = SceneDriver::new(config, Viewport::new(800.0, 600.0)).unwrap_err();
        assert_eq!(err, CurveError::ZeroDivisions);
    }

    #[test]
    fn curve_parameters_come_from_config() {
        let vp = Viewport::new(800.0, 600.0);
        let centripetal = update_spline(vp, &SceneConfig::default()).unwrap();
        let uniform = update_spline(
            vp,
            &SceneConfig { curve_type: CurveType::CatmullRom, ..SceneConfig::default() },
        )
        .unwrap();
        let coarse = update_spline(vp, &SceneConfig { divisions: 10, ..SceneConfig::default() }).unwrap();

        assert_eq!(coarse.len(), 11);
        assert_eq!(uniform.len(), centripetal.len());
        assert_ne!(uniform[50], centripetal[50]);
        assert_eq!(uniform[0], centripetal[0]);
    }

    #[test]
    fn record_emits_shared_polyline_per_shape() {
        let d = driver(800.0, 600.0);
        let mut list = DrawList::new();
        d.record(&mut list);

        assert_eq!(list.len(), 4);
        let cmds: Vec<_> = list
            .items()
            .iter()
            .map(|item| {
                let DrawCmd::Polyline(cmd) = item;
                cmd
            })
            .collect();
        assert!(cmds.iter().all(|c| c.points.len() == 101));
        assert!(cmds.windows(2).all(|w| Arc::ptr_eq(&w[0].points, &w[1].points)));
    }
}
