//! In-memory [`ComponentFs`] that records the order of creations

use super::fs::{classify_destination, ComponentFs};
use crate::error::Result;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryEntry {
    Dir,
    File(Vec<u8>),
}

#[derive(Debug, Default)]
pub struct MemoryFs {
    entries: BTreeMap<PathBuf, MemoryEntry>,
    log: Vec<PathBuf>,
    read_only: bool,
    fail_on: Option<PathBuf>,
}

impl MemoryFs {
    /// An empty filesystem whose root directory is `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(root.into(), MemoryEntry::Dir);
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Reject every write with a permission error
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Make the creation of `path` fail with a permission error
    pub fn fail_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_on = Some(path.into());
        self
    }

    /// Paths created so far, in creation order
    pub fn created(&self) -> &[PathBuf] {
        &self.log
    }

    pub fn entry(&self, path: &Path) -> Option<&MemoryEntry> {
        self.entries.get(path)
    }

    fn insert(&mut self, path: &Path, entry: MemoryEntry) -> io::Result<()> {
        if self.read_only || self.fail_on.as_deref() == Some(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        if self.entries.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "entry already exists",
            ));
        }
        let parent_is_dir = path
            .parent()
            .is_some_and(|parent| matches!(self.entries.get(parent), Some(MemoryEntry::Dir)));
        if !parent_is_dir {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "parent directory does not exist",
            ));
        }

        self.entries.insert(path.to_path_buf(), entry);
        self.log.push(path.to_path_buf());
        Ok(())
    }
}

impl ComponentFs for MemoryFs {
    async fn check_destination(&self, dir: &Path) -> Result<()> {
        let is_dir = match self.entries.get(dir) {
            Some(entry) => Ok(*entry == MemoryEntry::Dir),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "not found")),
        };
        let read_only = self.read_only;
        classify_destination(dir, is_dir, || {
            if read_only {
                Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ))
            } else {
                Ok(())
            }
        })
    }

    async fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        self.insert(path, MemoryEntry::Dir)
    }

    async fn create_file(&mut self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.insert(path, MemoryEntry::File(content.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_fs_requires_parent() {
        let mut fs = MemoryFs::with_root("/project");
        let err = fs
            .create_file(Path::new("/project/Button/index.ts"), b"")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(fs.created().is_empty());
    }
}
