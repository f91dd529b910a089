use anyhow::Result;

use wavelines::{SceneApp, SceneConfig};
use wavelines_engine::device::GpuInit;
use wavelines_engine::logging::{init_logging, LoggingConfig};
use wavelines_engine::window::{Runtime, RuntimeConfig};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        eprintln!("wavelines error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let app = SceneApp::new(SceneConfig::default())?;

    // Colours are written to the surface as given, without sRGB encoding.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    log::info!("starting wavelines");
    Runtime::run(RuntimeConfig::default(), gpu_init, app)
}
