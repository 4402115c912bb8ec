//! The light record and its comparable fields

use lights_client::LightSummary;
use serde::{Deserialize, Serialize};

use super::LightId;
use crate::brightness;

/// One light as last observed
///
/// `brightness` is always a percentage (0-100) once it lands here; the
/// device-native 0-255 value only exists on the wire. `on` and `brightness`
/// are optional because the bulk listing may omit them and enrichment can
/// fail.
///
/// Field declaration order is the rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    pub id: LightId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i64>,
}

impl Light {
    pub fn new(id: impl Into<LightId>, name: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room: room.into(),
            on: None,
            brightness: None,
        }
    }

    pub fn with_on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    /// Set brightness as a percentage
    pub fn with_brightness(mut self, percent: i64) -> Self {
        self.brightness = Some(percent);
        self
    }

    /// Build a light from a bulk listing entry
    ///
    /// A brightness carried by the listing is device-native and is converted
    /// to a percentage here.
    pub fn from_summary(summary: LightSummary) -> Self {
        Self {
            id: LightId::new(summary.id),
            name: summary.name.unwrap_or_default(),
            room: summary.room.unwrap_or_default(),
            on: summary.on,
            brightness: summary.brightness.map(brightness::to_percentage),
        }
    }

    /// Fill `on`/`brightness` from an older record of the same light where
    /// this one has nothing
    pub fn carry_over(&mut self, previous: &Light) {
        if self.on.is_none() {
            self.on = previous.on;
        }
        if self.brightness.is_none() {
            self.brightness = previous.brightness;
        }
    }
}

/// The fields compared between snapshots, in canonical order
///
/// `id` is deliberately absent: it is the join key, not a compared value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightField {
    Name,
    Room,
    On,
    Brightness,
}

impl LightField {
    /// Canonical comparison and rendering order
    pub const ALL: [LightField; 4] = [
        LightField::Name,
        LightField::Room,
        LightField::On,
        LightField::Brightness,
    ];

    /// JSON key of the field
    pub fn key(self) -> &'static str {
        match self {
            LightField::Name => "name",
            LightField::Room => "room",
            LightField::On => "on",
            LightField::Brightness => "brightness",
        }
    }
}

impl std::fmt::Display for LightField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
