//! Pixel and blending model shared by surfaces and images.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - per-call alpha policy (clamping)
//! - source-over compositing of a single pixel
//!
//! Geometry types remain in `coords`.

pub mod alpha;
pub mod blend;
pub mod color;

pub use alpha::clamp_alpha;
pub use blend::blend_over;
pub use color::Color;
