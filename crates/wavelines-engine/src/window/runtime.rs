use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::logical_viewport;
use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "wavelines".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
///
/// Drives a single window. Frames are drawn on demand: once after the window
/// is created, once after every resize or scale-factor change, and whenever
/// the platform asks for a repaint. Nothing redraws continuously.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window closes or the app exits.
    ///
    /// Returns the window/GPU setup error if startup failed.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
    startup_error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            exit_requested: false,
            startup_error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        let viewport = entry.with_window(|w| logical_viewport(w));
        log::info!("window created at {}x{} logical px", viewport.width, viewport.height);

        if self.app.on_resize(viewport) == AppControl::Exit {
            self.exit_requested = true;
        }

        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);
        Ok(())
    }

    /// Reconfigures the surface, notifies the app, and schedules one redraw.
    fn handle_resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(entry) = self.window.as_mut() else { return };

        entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        let viewport = entry.with_window(|w| logical_viewport(w));

        if self.app.on_resize(viewport) == AppControl::Exit {
            self.exit_requested = true;
            return;
        }

        entry.with_window(|w| w.request_redraw());
    }

    fn redraw(&mut self) {
        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else { return };

        let control = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
            };
            app.on_frame(&mut ctx)
        });

        if control == AppControl::Exit {
            self.exit_requested = true;
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.startup_error = Some(e);
            self.exit_requested = true;
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.window = None;
                self.exit_requested = true;
            }

            WindowEvent::Resized(new_size) => self.handle_resize(*new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = self
                    .window
                    .as_ref()
                    .map(|entry| entry.with_window(|w| w.inner_size()));
                if let Some(new_size) = new_size {
                    self.handle_resize(new_size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
