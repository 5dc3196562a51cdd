//! Component name validation

use crate::error::{ComponentError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Names must be longer than this many characters
const MIN_NAME_LENGTH: usize = 3;

// Upper-case start, then ASCII letters and digits only
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+[A-Za-z0-9]*$").unwrap());

/// A validated component identifier (e.g. `Button`, `UserCard2`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    /// Validate raw input and wrap it
    pub fn parse(input: &str) -> Result<Self> {
        validate(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the generated props type (`{Name}Props`)
    pub fn props_type(&self) -> String {
        format!("{}Props", self.0)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check a proposed component name against the naming policy
///
/// A name is valid when it is longer than three characters, starts with an
/// upper-case ASCII letter and contains only ASCII letters and digits.
pub fn validate(input: &str) -> Result<ComponentName> {
    if input.chars().count() <= MIN_NAME_LENGTH {
        return Err(ComponentError::InvalidName {
            input: input.to_string(),
            reason: "name must be longer than 3 characters",
        });
    }

    if !NAME_PATTERN.is_match(input) {
        return Err(ComponentError::InvalidName {
            input: input.to_string(),
            reason: "name must start with an upper-case letter and contain only latin letters and digits",
        });
    }

    Ok(ComponentName(input.to_string()))
}
