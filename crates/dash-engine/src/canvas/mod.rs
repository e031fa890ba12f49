//! Software drawing surface.
//!
//! [`Canvas`] is the reference [`Graphics`](crate::graphics::Graphics)
//! backend: an RGBA8 pixel buffer at the game's own resolution. Platform
//! backends present it (scaled, letterboxed) instead of re-implementing the
//! drawing contract on the GPU, so every platform shows the same pixels.

mod blit;
mod surface;

pub use surface::Canvas;
