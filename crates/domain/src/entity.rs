//! Entity names — validated fragments that end up in procedure names.

use std::fmt;

use crate::error::DispatchError;

/// A validated, lowercase entity name such as `customer` or `customers`.
///
/// Entity names become the trailing fragment of a procedure name and double
/// as URL path segments, so the accepted alphabet is restricted to
/// `[a-z0-9_]`. Construction lowercases its input, which is what makes
/// lookups case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Validate and normalize a raw entity name.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidEntityName`] when the input is empty
    /// or contains characters outside `[a-zA-Z0-9_]`.
    pub fn new(raw: &str) -> Result<Self, DispatchError> {
        let lowered = raw.to_ascii_lowercase();
        let valid = !lowered.is_empty()
            && lowered
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(DispatchError::InvalidEntityName(raw.to_owned()));
        }
        Ok(Self(lowered))
    }

    /// The normalized name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
