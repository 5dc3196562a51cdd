//! Ordered plan of the directories and files that make up a component

use crate::component::{ContentGenerator, OptionKey, EMPTY_BARREL_CONTENT};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Subdirectories created for a component that acts as a module
pub const MODULE_SUBDIRECTORIES: [&str; 2] = ["containers", "components"];

/// A single filesystem action, with a path relative to the target directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FsOperation {
    CreateDir { path: PathBuf },
    CreateFile { path: PathBuf, content: String },
}

impl FsOperation {
    pub fn path(&self) -> &Path {
        match self {
            FsOperation::CreateDir { path } | FsOperation::CreateFile { path, .. } => path,
        }
    }

    fn dir(path: PathBuf) -> Self {
        FsOperation::CreateDir { path }
    }

    fn file(path: PathBuf, content: impl Into<String>) -> Self {
        FsOperation::CreateFile {
            path,
            content: content.into(),
        }
    }
}

/// Everything needed to write one component, in creation order
///
/// The component's `.tsx` file is always the last operation, so its presence
/// on disk marks a finished generation.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentPlan {
    component_dir: PathBuf,
    operations: Vec<FsOperation>,
}

impl ComponentPlan {
    /// Build the plan for the generator's component and options
    pub fn new(generator: &ContentGenerator) -> Self {
        let name = generator.name().as_str();
        let options = generator.options();
        let dir = PathBuf::from(name);

        let mut operations = vec![
            FsOperation::dir(dir.clone()),
            FsOperation::file(dir.join("index.ts"), generator.index_file_content()),
        ];

        if options.get(OptionKey::CreateType) {
            operations.push(FsOperation::file(
                dir.join("types.ts"),
                generator.types_file_content(),
            ));
        }

        if options.get(OptionKey::CreateConstants) {
            operations.push(FsOperation::file(dir.join("constants.ts"), ""));
        }

        if options.get(OptionKey::CreateUtils) {
            operations.push(FsOperation::file(dir.join("utils.ts"), ""));
        }

        if options.get(OptionKey::CreateModule) {
            for sub in MODULE_SUBDIRECTORIES {
                let sub_dir = dir.join(sub);
                operations.push(FsOperation::dir(sub_dir.clone()));
                operations.push(FsOperation::file(
                    sub_dir.join("index.ts"),
                    EMPTY_BARREL_CONTENT,
                ));
            }
        }

        operations.push(FsOperation::file(
            dir.join(format!("{}.tsx", name)),
            generator.component_file_content(),
        ));

        Self {
            component_dir: dir,
            operations,
        }
    }

    /// Component directory, relative to the target directory
    pub fn component_dir(&self) -> &Path {
        &self.component_dir
    }

    pub fn operations(&self) -> &[FsOperation] {
        &self.operations
    }

    /// Relative paths of the files in the plan, in creation order
    pub fn files(&self) -> Vec<&Path> {
        self.operations
            .iter()
            .filter(|op| matches!(op, FsOperation::CreateFile { .. }))
            .map(FsOperation::path)
            .collect()
    }

    /// YAML rendition used for dry runs
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
