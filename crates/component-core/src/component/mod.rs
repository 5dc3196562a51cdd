//! Component model and content generation
//!
//! This module provides:
//! - Component name validation (`ComponentName`)
//! - The fixed option set a component is created with (`OptionSet`)
//! - Pure content generation for every generated file (`ContentGenerator`)

pub mod content;
pub mod name;
pub mod options;

pub use content::{ContentGenerator, EMPTY_BARREL_CONTENT, PACKAGES_MODULE};
pub use name::{validate, ComponentName};
pub use options::{OptionFlags, OptionKey, OptionSet};
