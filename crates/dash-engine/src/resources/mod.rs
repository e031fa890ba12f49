//! Asset lookup and the image registry.
//!
//! - [`AssetSource`]: where named bytes come from (a directory, memory).
//! - [`ResourceManager`]: owns every image the game loaded and hands out
//!   sprites over them.
//!
//! Name format (relative path, bundle id, ...) belongs to the source; the rest
//! of the engine treats names as opaque strings.

mod manager;
mod source;

pub use manager::ResourceManager;
pub use source::{AssetSource, DirSource, MemorySource};
