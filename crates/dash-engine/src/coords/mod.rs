//! Integer geometry shared by the graphics contract, sprites and backends.
//!
//! Canonical space:
//! - surface pixels (the game's own resolution, not window pixels)
//! - origin top-left
//! - +X right, +Y down
//!
//! Backends that present the surface at a different size map their window
//! coordinates into this space (see `dash-desktop`'s letterbox).

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
