//! Light identity type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a light, as assigned by the lights API
///
/// Ids are always compared as strings, never coerced from numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LightId(String);

impl LightId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LightId {
    fn from(s: &str) -> Self {
        LightId::new(s)
    }
}

impl From<String> for LightId {
    fn from(s: String) -> Self {
        LightId::new(s)
    }
}
