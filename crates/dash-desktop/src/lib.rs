//! Desktop backend for dash.
//!
//! Opens a winit window, runs the frame loop and presents the engine's
//! software [`Canvas`](dash_engine::canvas::Canvas) through wgpu, scaled to
//! the window with letterboxing. Most games only need [`Application`].

mod app;
mod game;
mod input;

pub mod device;
pub mod present;
pub mod window;

pub use app::Application;
pub use game::DesktopGame;
