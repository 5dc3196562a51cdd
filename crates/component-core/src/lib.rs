//! Component Core - Shared library for React component scaffolding CLIs
//!
//! This library generates the files of a React component skeleton: a barrel
//! `index.ts`, an optional `types.ts`, optional empty `constants.ts` and
//! `utils.ts` stubs, optional `containers/` and `components/` module
//! directories, and the `{Name}.tsx` component itself. It is used by multiple
//! CLI binaries that share the same generation logic but declare component
//! types differently.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Content** - Name validation and pure content generation
//! - **Layer 2: Structure** - Ordered creation plan and the `ComponentFs` seam it is written through
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use component_core::{validate, ComponentPlan, ContentGenerator, LocalFs, OptionSet};
//! use std::path::Path;
//!
//! # async fn example() -> component_core::Result<()> {
//! let name = validate("Button")?;
//! let generator = ContentGenerator::new(name, OptionSet::default(), false);
//! let plan = ComponentPlan::new(&generator);
//! component_core::structure::write_component(&plan, Path::new("src/components"), &mut LocalFs)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod component;
pub mod error;
pub mod product;
pub mod structure;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use component::{
    validate, ComponentName, ContentGenerator, OptionFlags, OptionKey, OptionSet,
};
pub use error::{ComponentError, Result};
pub use product::{generator_for, ProductConfig};
pub use structure::{
    resolve_target_dir, write_component, ComponentFs, ComponentPlan, FsOperation, LocalFs,
};

#[cfg(feature = "tui")]
pub use tui::run;
