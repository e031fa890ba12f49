//! Getting the software canvas onto the window.
//!
//! The canvas keeps its own resolution. Each frame it is uploaded to a
//! texture and drawn into the largest aspect-preserving rectangle that fits
//! the window ([`Letterbox`]); the rest of the window is filled with the bar
//! colour. The same letterbox maps pointer positions back into canvas pixels.

mod letterbox;
mod presenter;

pub use letterbox::Letterbox;
pub use presenter::CanvasPresenter;
