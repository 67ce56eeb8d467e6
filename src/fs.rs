//! File system port
//!
//! Validation only needs to ask whether a resolved path exists. Keeping that
//! behind a trait lets the validator run against an in-memory tree in tests.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - `MockFileSystem` - in-memory set of paths
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory file system for testing
///
/// A path exists if it was added, or if it is an ancestor of one that was.
/// Public only for the integration tests and fuzz targets.
#[doc(hidden)]
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    paths: BTreeSet<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`MockFileSystem::add`]
    pub fn with(mut self, path: impl Into<PathBuf>) -> Self {
        self.add(path);
        self
    }

    pub fn add(&mut self, path: impl Into<PathBuf>) {
        self.paths.insert(path.into());
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p.starts_with(path))
    }
}
