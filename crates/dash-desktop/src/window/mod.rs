//! Window + frame loop.
//!
//! Owns the winit event loop and the single game window, and drives a
//! [`GameLogic`](dash_engine::core::GameLogic) once per redraw.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
