mod app;
mod canvas;
mod config;
mod scheduler;
mod theme;
mod zone_picker;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use tock_dial::{ClockController, TimeSource};
use tock_engine::device::GpuInit;
use tock_engine::logging::{init_logging, LoggingConfig};
use tock_engine::text::{FontId, FontSystem};
use tock_engine::window::{Runtime, RuntimeConfig};

use crate::app::ClockApp;
use crate::config::AppConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = AppConfig::from_env();

    let mut fonts = FontSystem::new();
    let font = load_font(&mut fonts, &config.font_paths);

    let controller = ClockController::new(config.clock.clone(), TimeSource::system())
        .context("invalid clock configuration")?;

    let mut app = ClockApp::new(config.title.clone(), controller, fonts, font);
    app.start(Instant::now());

    let runtime = RuntimeConfig {
        title: app.window_title(),
        initial_size: LogicalSize::new(config.width, config.height),
        resizable: false,
    };

    Runtime::run(runtime, GpuInit::default(), app)
}

/// Loads the first readable font; text is skipped when none loads.
fn load_font(fonts: &mut FontSystem, paths: &[PathBuf]) -> Option<FontId> {
    for path in paths {
        let Ok(bytes) = std::fs::read(path) else { continue };
        match fonts.load_font(&bytes) {
            Ok(id) => {
                log::info!("loaded font {}", path.display());
                return Some(id);
            }
            Err(e) => log::warn!("{}: {e}", path.display()),
        }
    }
    log::warn!("no usable font found; numerals and zone line are hidden");
    None
}
