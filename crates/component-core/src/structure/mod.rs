//! Component directory structure: planning and writing
//!
//! This module provides:
//! - The ordered plan of directories and files for a component (`ComponentPlan`)
//! - The filesystem seam the plan is written through (`ComponentFs`)
//! - Target directory resolution and plan execution

pub mod fs;
#[cfg(test)]
mod memory;
pub mod plan;

use crate::error::{ComponentError, Result};
use std::path::{Path, PathBuf};

pub use fs::{ComponentFs, LocalFs};
pub use plan::{ComponentPlan, FsOperation, MODULE_SUBDIRECTORIES};

/// Directory a component is created in for the selected location
///
/// A location with a file extension is treated as a file and resolves to its
/// parent directory; anything else is used as-is.
pub fn resolve_target_dir(location: &Path) -> PathBuf {
    match (location.extension(), location.parent()) {
        (Some(_), Some(parent)) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        (Some(_), _) => PathBuf::from("."),
        (None, _) => location.to_path_buf(),
    }
}

/// Write a plan below `target_dir`, one operation at a time
///
/// The destination is checked before anything is created. Creation stops at
/// the first failure; entries created before it are left in place. Returns
/// the full paths of everything created.
pub async fn write_component<F: ComponentFs>(
    plan: &ComponentPlan,
    target_dir: &Path,
    fs: &mut F,
) -> Result<Vec<PathBuf>> {
    fs.check_destination(target_dir).await?;

    let mut created = Vec::with_capacity(plan.operations().len());
    for op in plan.operations() {
        let path = target_dir.join(op.path());
        let result = match op {
            FsOperation::CreateDir { .. } => fs.create_dir(&path).await,
            FsOperation::CreateFile { content, .. } => {
                fs.create_file(&path, content.as_bytes()).await
            }
        };
        result.map_err(|source| ComponentError::FilesystemWrite {
            path: path.clone(),
            source,
        })?;
        created.push(path);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::memory::{MemoryEntry, MemoryFs};
    use super::*;
    use crate::component::{validate, ContentGenerator, OptionKey, OptionSet};
    use tempfile::tempdir;

    fn button_plan(options: OptionSet, use_packages: bool) -> ComponentPlan {
        ComponentPlan::new(&ContentGenerator::new(
            validate("Button").unwrap(),
            options,
            use_packages,
        ))
    }

    #[test]
    fn test_resolve_target_dir() {
        assert_eq!(
            resolve_target_dir(Path::new("src/components")),
            PathBuf::from("src/components")
        );
        assert_eq!(
            resolve_target_dir(Path::new("src/components/App.tsx")),
            PathBuf::from("src/components")
        );
        assert_eq!(resolve_target_dir(Path::new("App.tsx")), PathBuf::from("."));
    }

    #[tokio::test]
    async fn test_write_component_in_plan_order() {
        let options = OptionSet::default().with(OptionKey::CreateModule, true);
        let plan = button_plan(options, false);
        let mut fs = MemoryFs::with_root("/src");

        let created = write_component(&plan, Path::new("/src"), &mut fs)
            .await
            .unwrap();

        assert_eq!(created, fs.created());
        assert_eq!(created.last().unwrap(), Path::new("/src/Button/Button.tsx"));
        let containers = created
            .iter()
            .position(|p| p == Path::new("/src/Button/containers/index.ts"))
            .unwrap();
        let components = created
            .iter()
            .position(|p| p == Path::new("/src/Button/components/index.ts"))
            .unwrap();
        assert!(containers < created.len() - 1);
        assert!(components < created.len() - 1);
        assert_eq!(
            fs.entry(Path::new("/src/Button/containers/index.ts")),
            Some(&MemoryEntry::File(b"\n".to_vec()))
        );
    }

    #[tokio::test]
    async fn test_not_directory_creates_nothing() {
        let plan = button_plan(OptionSet::default(), false);
        let mut fs = MemoryFs::with_root("/src");

        let err = write_component(&plan, Path::new("/elsewhere"), &mut fs)
            .await
            .unwrap_err();

        assert!(matches!(err, ComponentError::DestinationNotDirectory { .. }));
        assert!(fs.created().is_empty());
    }

    #[tokio::test]
    async fn test_not_writable_creates_nothing() {
        let plan = button_plan(OptionSet::default(), false);
        let mut fs = MemoryFs::with_root("/src").read_only();

        let err = write_component(&plan, Path::new("/src"), &mut fs)
            .await
            .unwrap_err();

        assert!(matches!(err, ComponentError::DestinationNotWritable { .. }));
        assert!(fs.created().is_empty());
    }

    #[tokio::test]
    async fn test_failure_leaves_earlier_entries() {
        let plan = button_plan(OptionSet::default(), false);
        let mut fs = MemoryFs::with_root("/src").fail_on("/src/Button/types.ts");

        let err = write_component(&plan, Path::new("/src"), &mut fs)
            .await
            .unwrap_err();

        assert_eq!(err.path(), Some(&PathBuf::from("/src/Button/types.ts")));
        assert_eq!(
            fs.created(),
            &[
                PathBuf::from("/src/Button"),
                PathBuf::from("/src/Button/index.ts")
            ]
        );
        assert!(fs.entry(Path::new("/src/Button/Button.tsx")).is_none());
    }

    #[tokio::test]
    async fn test_writes_files_to_disk() {
        let dir = tempdir().unwrap();
        let options = OptionSet::from_enabled(OptionKey::ALL);
        let plan = button_plan(options, true);

        write_component(&plan, dir.path(), &mut LocalFs)
            .await
            .unwrap();

        let root = dir.path().join("Button");
        for file in [
            "index.ts",
            "types.ts",
            "constants.ts",
            "utils.ts",
            "containers/index.ts",
            "components/index.ts",
            "Button.tsx",
        ] {
            assert!(root.join(file).is_file(), "missing {}", file);
        }
        assert_eq!(
            std::fs::read_to_string(root.join("types.ts")).unwrap(),
            "export type ButtonProps = {}\n"
        );
        assert_eq!(std::fs::read_to_string(root.join("utils.ts")).unwrap(), "");
        assert_eq!(
            std::fs::read_to_string(root.join("components/index.ts")).unwrap(),
            "\n"
        );
    }

    #[tokio::test]
    async fn test_existing_component_dir_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Button")).unwrap();
        let plan = button_plan(OptionSet::default(), false);

        let err = write_component(&plan, dir.path(), &mut LocalFs)
            .await
            .unwrap_err();

        assert!(matches!(err, ComponentError::FilesystemWrite { .. }));
        assert!(!dir.path().join("Button/index.ts").exists());
    }
}
