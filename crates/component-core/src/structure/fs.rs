//! Filesystem seam used to write a component plan
//!
//! [`LocalFs`] writes to disk with `tokio::fs`.

use crate::error::{ComponentError, Result};
use std::io;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Operations a host must provide to write a component
///
/// Both creation methods must fail when the entry already exists.
#[allow(async_fn_in_trait)]
pub trait ComponentFs {
    /// Fail if `dir` is not an existing directory the current user can write to
    async fn check_destination(&self, dir: &Path) -> Result<()>;

    async fn create_dir(&mut self, path: &Path) -> io::Result<()>;

    async fn create_file(&mut self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// Writes to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl ComponentFs for LocalFs {
    async fn check_destination(&self, dir: &Path) -> Result<()> {
        let is_dir = fs::metadata(dir).await.map(|metadata| metadata.is_dir());
        // An anonymous temp file is removed as soon as it is dropped
        classify_destination(dir, is_dir, || tempfile::tempfile_in(dir).map(drop))
    }

    async fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir(path).await
    }

    async fn create_file(&mut self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;
        file.write_all(content).await?;
        file.flush().await
    }
}

/// Map the outcome of a directory lookup and a write attempt to a destination error
///
/// Writability is decided by actually creating an entry, so ownership, ACLs and
/// read-only mounts are all taken into account for the effective user.
pub(crate) fn classify_destination(
    dir: &Path,
    is_dir: io::Result<bool>,
    write_check: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    match is_dir {
        Ok(true) => {}
        Err(source) if source.kind() == io::ErrorKind::PermissionDenied => {
            return Err(ComponentError::DestinationNotWritable {
                path: dir.to_path_buf(),
                source,
            })
        }
        Ok(false) | Err(_) => {
            return Err(ComponentError::DestinationNotDirectory {
                path: dir.to_path_buf(),
            })
        }
    }

    write_check().map_err(|source| ComponentError::DestinationNotWritable {
        path: dir.to_path_buf(),
        source,
    })
}
