//! The wavelines scene: four coincident curved lines through a
//! viewport-derived Catmull–Rom spline, drawn in pixel space.

mod app;
mod config;
mod driver;
mod shapes;

pub use app::SceneApp;
pub use config::SceneConfig;
pub use driver::{update_spline, SceneDriver};
pub use shapes::{LineSet, LineShape};
