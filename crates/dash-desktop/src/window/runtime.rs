use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use dash_engine::core::{Flow, GameLogic};
use dash_engine::coords::Size;
use dash_engine::graphics::Graphics;
use dash_engine::input::Input;
use dash_engine::paint::Color;
use dash_engine::resources::ResourceManager;
use dash_engine::time::FrameClock;

use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::game::DesktopGame;
use crate::input::translate_event;
use crate::present::{CanvasPresenter, Letterbox};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "dash".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: true,
        }
    }
}

/// Entry point for the frame loop.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs `logic` until it returns [`Flow::Exit`] or
    /// the window is closed.
    ///
    /// Fails if the window, the GPU or `logic.init` fail, or if the device is
    /// lost mid-run.
    pub fn run<L>(
        config: RuntimeConfig,
        gpu_init: GpuInit,
        game: DesktopGame,
        presenter: CanvasPresenter,
        logic: L,
    ) -> Result<()>
    where
        L: GameLogic + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RunState::new(config, gpu_init, game, presenter, logic);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    presenter: CanvasPresenter,
    letterbox: Option<Letterbox>,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RunState<L>
where
    L: GameLogic + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    logic: L,

    game: DesktopGame,
    resources: ResourceManager,
    clock: FrameClock,

    // `presenter` moves into the entry once the window exists.
    presenter: Option<CanvasPresenter>,
    window: Option<WindowEntry>,
    initialized: bool,
    error: Option<anyhow::Error>,
}

impl<L> RunState<L>
where
    L: GameLogic + 'static,
{
    fn new(
        config: RuntimeConfig,
        gpu_init: GpuInit,
        game: DesktopGame,
        presenter: CanvasPresenter,
        logic: L,
    ) -> Self {
        Self {
            config,
            gpu_init,
            logic,
            game,
            resources: ResourceManager::new(),
            clock: FrameClock::new(),
            presenter: Some(presenter),
            window: None,
            initialized: false,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let presenter = self
            .presenter
            .take()
            .unwrap_or_else(|| CanvasPresenter::new(Color::BLACK));
        let canvas_size = self.game.canvas.size();

        WindowEntryTryBuilder {
            presenter,
            letterbox: None,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .map(|mut entry| {
            let lb = entry.with_gpu(|gpu| letterbox_for(canvas_size, gpu));
            entry.with_letterbox_mut(|l| *l = lb);
            entry
        })
        .context("GPU initialization failed")
    }

    fn init_logic(&mut self) -> Result<()> {
        self.logic
            .init(&mut self.game, &mut self.resources)
            .context("game initialization failed")?;
        self.initialized = true;
        Ok(())
    }

    /// update → render → present → end of frame.
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let time = self.clock.tick();

        if self.logic.update(&mut self.game, time) == Flow::Exit {
            log::info!("game requested exit after {} frame(s)", time.frame_index + 1);
            event_loop.exit();
            return;
        }

        if let Err(e) = self.logic.render(&mut self.game.canvas) {
            log::error!("render failed: {e}");
        }

        let Self { window, game, .. } = self;
        let Some(entry) = window.as_mut() else { return; };

        let mut fatal = false;
        entry.with_mut(|fields| {
            if !fields.gpu.can_render() {
                return;
            }
            match fields.gpu.begin_frame() {
                Ok(mut frame) => {
                    *fields.letterbox = fields.presenter.present(fields.gpu, &mut frame, &game.canvas);
                    fields.gpu.submit(frame);
                }
                Err(e) => {
                    fatal = fields.gpu.handle_surface_error(e) == SurfaceErrorAction::Fatal;
                }
            }
        });

        self.game.input.end_frame();

        if fatal {
            self.fail(event_loop, anyhow::anyhow!("GPU surface is unusable (out of memory)"));
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        let canvas_size = self.game.canvas.size();
        let Some(entry) = self.window.as_mut() else { return; };

        let lb = entry.with_gpu_mut(|gpu| {
            gpu.resize(new_size);
            letterbox_for(canvas_size, gpu)
        });
        entry.with_letterbox_mut(|l| *l = lb);
        entry.with_window(|w| w.request_redraw());
    }
}

fn letterbox_for(canvas: Size, gpu: &Gpu<'_>) -> Option<Letterbox> {
    let size = gpu.size();
    Letterbox::fit(canvas, Size::new(size.width, size.height))
}

impl<L> ApplicationHandler for RunState<L>
where
    L: GameLogic + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => self.window = Some(entry),
            Err(e) => return self.fail(event_loop, e),
        }

        if !self.initialized {
            if let Err(e) = self.init_logic() {
                return self.fail(event_loop, e);
            }
        }

        // Loading time is not game time.
        self.clock.reset();

        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // The surface must not outlive a suspend; it is rebuilt on resume.
        if let Some(entry) = self.window.take() {
            self.presenter = Some(entry.into_heads().presenter);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Games redraw continuously; vsync paces the loop.
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.window.as_ref() else { return; };

        let pointer = self.game.input.pointer_pos();
        if let Some(ev) = translate_event(&event, entry.borrow_letterbox().as_ref(), pointer) {
            self.game.input.push(ev);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                self.resize(new_size);
            }

            WindowEvent::RedrawRequested => self.run_frame(event_loop),

            _ => {}
        }
    }
}
