//! Dash engine crate.
//!
//! Platform-free core of a small 2D game engine: the [`Graphics`] drawing
//! capability, [`Sprite`], the software [`Canvas`] surface, the image
//! registry, input state and frame timing. Window and GPU plumbing lives in
//! `dash-desktop`.
//!
//! [`Graphics`]: graphics::Graphics
//! [`Sprite`]: sprite::Sprite
//! [`Canvas`]: canvas::Canvas

pub mod core;
pub mod input;
pub mod time;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod graphics;
pub mod sprite;
pub mod canvas;
pub mod resources;
