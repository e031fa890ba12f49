use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::graphics::{GraphicsError, Result};

/// Resolves asset names to raw bytes.
pub trait AssetSource {
    /// Returns the bytes stored under `name`, or
    /// [`GraphicsError::ResourceNotFound`].
    fn read(&self, name: &str) -> Result<Vec<u8>>;
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        (**self).read(name)
    }
}

/// Assets stored as files below a root directory.
///
/// Names are relative paths with `/` separators. Absolute paths and `..`
/// components never resolve, so a name cannot escape the root.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let rel = Path::new(name);
        let mut normal = false;
        for component in rel.components() {
            match component {
                Component::Normal(_) => normal = true,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        normal.then(|| self.root.join(rel))
    }
}

impl AssetSource for DirSource {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let Some(path) = self.resolve(name) else {
            log::warn!("rejected asset name {name:?}: not a relative path below the asset root");
            return Err(GraphicsError::not_found(name));
        };

        std::fs::read(&path).map_err(|e| {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("failed to read asset {}: {e}", path.display());
            }
            GraphicsError::not_found(name)
        })
    }
}

/// Assets held in memory, keyed by name.
///
/// Useful for bundled (`include_bytes!`) or generated assets, and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Stores `bytes` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetSource for MemorySource {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| GraphicsError::not_found(name))
    }
}
