use crate::coords::Viewport;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the scene layer.
pub trait App {
    /// Called once when the window is created and again after every size or
    /// scale-factor change, with the new logical size. A redraw always follows.
    ///
    /// Zero-area viewports (minimized windows) are passed through; the app
    /// decides whether to ignore them.
    fn on_resize(&mut self, viewport: Viewport) -> AppControl {
        let _ = viewport;
        AppControl::Continue
    }

    /// Called for each redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        sizes: Vec<Viewport>,
    }

    impl App for Recorder {
        fn on_resize(&mut self, viewport: Viewport) -> AppControl {
            self.sizes.push(viewport);
            AppControl::Continue
        }

        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> AppControl {
            AppControl::Exit
        }
    }

    struct FrameOnly;

    impl App for FrameOnly {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> AppControl {
            AppControl::Exit
        }
    }

    #[test]
    fn resize_and_frame_are_the_whole_contract() {
        let mut app = Recorder { sizes: Vec::new() };
        app.on_resize(Viewport::new(800.0, 600.0));
        app.on_resize(Viewport::new(0.0, 0.0));
        assert_eq!(app.sizes, vec![Viewport::new(800.0, 600.0), Viewport::new(0.0, 0.0)]);
    }

    #[test]
    fn resize_defaults_to_continue() {
        assert_eq!(FrameOnly.on_resize(Viewport::new(1.0, 1.0)), AppControl::Continue);
    }
}
