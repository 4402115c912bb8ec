//! Wire shapes returned by the lights API
//!
//! The bulk listing (`GET /lights`) is only guaranteed to carry `id`; the
//! per-light detail (`GET /lights/{id}`) is the authoritative source for the
//! power state and the device-native brightness (0-255).

use serde::{Deserialize, Serialize};

/// One entry of the `GET /lights` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightSummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub on: Option<bool>,
    /// Device-native brightness, 0-255
    #[serde(default)]
    pub brightness: Option<i64>,
}

impl LightSummary {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            room: None,
            on: None,
            brightness: None,
        }
    }
}

/// Body of `GET /lights/{id}`
///
/// Unknown keys (the API echoes `id`, `name` and `room` here too) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightDetail {
    #[serde(default)]
    pub on: Option<bool>,
    /// Device-native brightness, 0-255
    #[serde(default)]
    pub brightness: Option<i64>,
}
