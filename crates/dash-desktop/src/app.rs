use anyhow::Result;
use winit::dpi::LogicalSize;

use dash_engine::canvas::Canvas;
use dash_engine::core::GameLogic;
use dash_engine::coords::Size;
use dash_engine::paint::Color;
use dash_engine::resources::{AssetSource, DirSource};

use crate::device::GpuInit;
use crate::game::DesktopGame;
use crate::present::CanvasPresenter;
use crate::window::{Runtime, RuntimeConfig};

/// Desktop game launcher.
///
/// ```rust,ignore
/// Application::new()
///     .title("Switch Dash")
///     .canvas_size(800, 600)
///     .assets(DirSource::new("assets"))
///     .run(MyGame::default())?;
/// ```
pub struct Application {
    title: String,
    canvas_size: Size,
    window_size: Option<LogicalSize<f64>>,
    resizable: bool,
    bar_color: Color,
    assets: Option<Box<dyn AssetSource>>,
    gpu: GpuInit,
}

impl Application {
    /// Directory searched when no asset source is configured.
    pub const DEFAULT_ASSET_DIR: &'static str = "assets";

    pub fn new() -> Self {
        Self {
            title: "dash".to_string(),
            canvas_size: Size::new(800, 600),
            window_size: None,
            resizable: true,
            bar_color: Color::BLACK,
            assets: None,
            gpu: GpuInit::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Resolution of the drawing surface the game sees. Fixed for the run;
    /// the window scales it.
    pub fn canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_size = Size::new(width, height);
        self
    }

    /// Initial window size in logical pixels. Defaults to the canvas size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.window_size = Some(LogicalSize::new(width, height));
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Colour of the bars around the letterboxed canvas.
    pub fn bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    /// Where `Graphics::new_image` looks up names. Defaults to
    /// [`DEFAULT_ASSET_DIR`](Self::DEFAULT_ASSET_DIR).
    pub fn assets(mut self, source: impl AssetSource + 'static) -> Self {
        self.assets = Some(Box::new(source));
        self
    }

    pub fn gpu(mut self, init: GpuInit) -> Self {
        self.gpu = init;
        self
    }

    /// Opens the window and runs `logic` until it exits.
    pub fn run<L>(self, logic: L) -> Result<()>
    where
        L: GameLogic + 'static,
    {
        anyhow::ensure!(!self.canvas_size.is_empty(), "canvas size must be non-zero");

        let Self {
            title,
            canvas_size,
            window_size,
            resizable,
            bar_color,
            assets,
            gpu,
        } = self;

        let assets = assets.unwrap_or_else(|| Box::new(DirSource::new(Self::DEFAULT_ASSET_DIR)));
        let config = RuntimeConfig {
            title,
            initial_size: window_size.unwrap_or_else(|| {
                LogicalSize::new(canvas_size.width as f64, canvas_size.height as f64)
            }),
            resizable,
        };

        log::info!(
            "starting {:?}: canvas {}x{}",
            config.title, canvas_size.width, canvas_size.height
        );

        let game = DesktopGame::new(Canvas::new(canvas_size.width, canvas_size.height, assets));
        Runtime::run(config, gpu, game, CanvasPresenter::new(bar_color), logic)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
