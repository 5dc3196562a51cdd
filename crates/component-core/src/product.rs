//! Product configuration trait for CLI binaries
//!
//! Each binary describes itself through this trait. The products share all
//! generation logic and differ only in how the component's type is declared.

use crate::component::{ComponentName, ContentGenerator, OptionSet, PACKAGES_MODULE};

/// Configuration trait for the component scaffolding products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (binary name)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Whether components are typed with the shared `CFC` type instead of
    /// plain React annotations
    fn use_packages(&self) -> bool;

    /// Module the shared component type is imported from
    fn packages_module(&self) -> &'static str {
        PACKAGES_MODULE
    }
}

/// Content generator configured with the product's typing mode
pub fn generator_for<C: ProductConfig>(
    config: &C,
    name: ComponentName,
    options: OptionSet,
) -> ContentGenerator {
    ContentGenerator::new(name, options, config.use_packages())
        .with_packages_module(config.packages_module())
}
