//! wgpu device + window surface.
//!
//! Owns Instance/Adapter/Device/Queue and the swapchain of the game window,
//! and hands out one [`GpuFrame`] per presented frame. What gets drawn into
//! the frame is the presenter's business.

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
