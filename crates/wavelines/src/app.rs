use anyhow::Result;

use wavelines_engine::coords::Viewport as WindowViewport;
use wavelines_engine::core::{App as EngineApp, AppControl, FrameCtx};
use wavelines_engine::render::shapes::polyline::PolylineRenderer;
use wavelines_engine::scene::DrawList;
use wavelines_geom::Viewport;

use crate::config::SceneConfig;
use crate::driver::SceneDriver;

/// Engine app drawing the wavelines scene.
///
/// The driver is created on the first non-empty viewport and updated on each
/// resize after that. The draw list is rebuilt only when geometry changes.
pub struct SceneApp {
    config: SceneConfig,
    driver: Option<SceneDriver>,
    draw_list: DrawList,
    polyline_renderer: PolylineRenderer,
}

impl SceneApp {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            driver: None,
            draw_list: DrawList::new(),
            polyline_renderer: PolylineRenderer::new(),
        })
    }

    /// `None` until the window has reported a non-empty size.
    pub fn driver(&self) -> Option<&SceneDriver> {
        self.driver.as_ref()
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    fn rebuild_draw_list(&mut self) {
        self.draw_list.clear();
        if let Some(driver) = &self.driver {
            driver.record(&mut self.draw_list);
        }
    }
}

fn scene_viewport(viewport: WindowViewport) -> Viewport {
    Viewport::new(f64::from(viewport.width), f64::from(viewport.height))
}

impl EngineApp for SceneApp {
    fn on_resize(&mut self, viewport: WindowViewport) -> AppControl {
        let viewport = scene_viewport(viewport);

        if let Some(driver) = self.driver.as_mut() {
            if !driver.resize(viewport) {
                return AppControl::Continue;
            }
        } else if !viewport.is_valid() {
            log::debug!("waiting for a non-empty window, got {}x{}", viewport.width, viewport.height);
            return AppControl::Continue;
        } else {
            match SceneDriver::new(self.config.clone(), viewport) {
                Ok(driver) => {
                    log::info!(
                        "scene ready: {} lines, {} samples each",
                        driver.lines().len(),
                        driver.polyline().len()
                    );
                    self.driver = Some(driver);
                }
                Err(e) => {
                    log::error!("failed to build scene: {e}");
                    return AppControl::Exit;
                }
            }
        }

        self.rebuild_draw_list();
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let view_proj = self
            .driver
            .as_ref()
            .map(|d| d.camera().view_projection().to_cols_f32());

        let dl = &self.draw_list;
        let r_pl = &mut self.polyline_renderer;

        ctx.render(self.config.background, |rctx, target| {
            if let Some(view_proj) = view_proj {
                r_pl.render(rctx, target, dl, view_proj);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavelines_engine::scene::DrawCmd;

    fn app() -> SceneApp {
        SceneApp::new(SceneConfig::default()).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SceneConfig { divisions: 0, ..SceneConfig::default() };
        assert!(SceneApp::new(config).is_err());
    }

    #[test]
    fn first_resize_builds_scene() {
        let mut app = app();
        assert!(app.driver().is_none());

        assert_eq!(app.on_resize(WindowViewport::new(800.0, 600.0)), AppControl::Continue);

        let driver = app.driver().unwrap();
        assert_eq!(driver.viewport(), Viewport::new(800.0, 600.0));
        assert_eq!(app.draw_list().len(), 4);
    }

    #[test]
    fn minimized_window_defers_startup() {
        let mut app = app();
        app.on_resize(WindowViewport::new(0.0, 0.0));
        assert!(app.driver().is_none());
        assert!(app.draw_list().is_empty());

        app.on_resize(WindowViewport::new(640.0, 480.0));
        assert!(app.driver().is_some());
    }

    #[test]
    fn resize_rebuilds_draw_list_with_new_geometry() {
        let mut app = app();
        app.on_resize(WindowViewport::new(800.0, 600.0));
        app.on_resize(WindowViewport::new(1200.0, 400.0));

        assert_eq!(app.draw_list().len(), 4);
        let fresh = SceneDriver::new(SceneConfig::default(), Viewport::new(1200.0, 400.0)).unwrap();
        let expected: Vec<[f32; 3]> = fresh.polyline().iter().map(|p| p.to_f32_array()).collect();

        for item in app.draw_list().items() {
            let DrawCmd::Polyline(cmd) = item;
            assert_eq!(&cmd.points[..], &expected[..]);
        }
    }

    #[test]
    fn zero_resize_keeps_previous_scene() {
        let mut app = app();
        app.on_resize(WindowViewport::new(800.0, 600.0));
        app.on_resize(WindowViewport::new(0.0, 0.0));

        assert_eq!(app.driver().unwrap().viewport(), Viewport::new(800.0, 600.0));
        assert_eq!(app.draw_list().len(), 4);
    }
}
