//! Switch Dash: a small game on the dash engine.
//!
//! Usage: `dash-demo [ASSET_DIR]`. Without a directory the built-in artwork
//! is used.

mod assets;
mod logic;

use std::path::PathBuf;

use anyhow::Result;

use dash_desktop::Application;
use dash_engine::logging::{init_logging, LoggingConfig};
use dash_engine::paint::Color;
use dash_engine::resources::DirSource;

use crate::logic::SwitchDash;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = Application::new()
        .title("Switch Dash")
        .canvas_size(800, 600)
        .bar_color(Color::from_argb(0xFF10_1014));

    let app = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(dir) => {
            log::info!("assets from {}", dir.display());
            app.assets(DirSource::new(dir))
        }
        None => app.assets(assets::builtin()?),
    };

    app.run(SwitchDash::new())
}
