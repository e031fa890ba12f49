//! Frame timing.
//!
//! One [`FrameClock`] per game loop; `tick()` once per presented frame gives
//! the [`FrameTime`] handed to `GameLogic::update`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
