//! Change event types

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use super::{Light, LightField, LightId};

/// The new value of one compared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Room(String),
    On(Option<bool>),
    /// Percentage
    Brightness(Option<i64>),
}

impl FieldChange {
    /// Read the current value of `field` from `light`
    pub fn read(light: &Light, field: LightField) -> Self {
        match field {
            LightField::Name => FieldChange::Name(light.name.clone()),
            LightField::Room => FieldChange::Room(light.room.clone()),
            LightField::On => FieldChange::On(light.on),
            LightField::Brightness => FieldChange::Brightness(light.brightness),
        }
    }

    pub fn field(&self) -> LightField {
        match self {
            FieldChange::Name(_) => LightField::Name,
            FieldChange::Room(_) => LightField::Room,
            FieldChange::On(_) => LightField::On,
            FieldChange::Brightness(_) => LightField::Brightness,
        }
    }
}

/// One observed difference between two snapshots
///
/// Serializes as a JSON object with `id` first:
/// - `Changed` → `{"id": .., "<field>": <new value>}`
/// - `Added` → the full light record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A single field of a known light changed
    Changed { id: LightId, change: FieldChange },

    /// A light appeared that was not in the previous snapshot
    Added(Light),
}

impl ChangeEvent {
    pub fn changed(id: impl Into<LightId>, change: FieldChange) -> Self {
        ChangeEvent::Changed {
            id: id.into(),
            change,
        }
    }

    /// The light this event is about
    pub fn light_id(&self) -> &LightId {
        match self {
            ChangeEvent::Changed { id, .. } => id,
            ChangeEvent::Added(light) => &light.id,
        }
    }

    /// The changed field, for single-field events
    pub fn field(&self) -> Option<LightField> {
        match self {
            ChangeEvent::Changed { change, .. } => Some(change.field()),
            ChangeEvent::Added(_) => None,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, ChangeEvent::Added(_))
    }
}

impl Serialize for ChangeEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChangeEvent::Added(light) => light.serialize(serializer),
            ChangeEvent::Changed { id, change } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("id", id)?;
                let key = change.field().key();
                match change {
                    FieldChange::Name(value) | FieldChange::Room(value) => {
                        map.serialize_entry(key, value)?
                    }
                    FieldChange::On(value) => map.serialize_entry(key, value)?,
                    FieldChange::Brightness(value) => map.serialize_entry(key, value)?,
                }
                map.end()
            }
        }
    }
}

/// Notice that a light disappeared from the listing
///
/// Removals are not queued; they are handed to the caller during the
/// reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    pub id: LightId,
    pub name: String,
}

impl Removed {
    pub fn of(light: &Light) -> Self {
        Self {
            id: light.id.clone(),
            name: light.name.clone(),
        }
    }
}

impl fmt::Display for Removed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) has been removed", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_change_serializes_id_first() {
        let event = ChangeEvent::changed("1", FieldChange::Brightness(Some(75)));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"id":"1","brightness":75}"#);
    }

    #[test]
    fn test_field_change_to_absent_serializes_null() {
        let event = ChangeEvent::changed("3", FieldChange::On(None));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"id":"3","on":null}"#);
    }

    #[test]
    fn test_added_serializes_full_record() {
        let light = Light::new("2", "Kitchen", "kitchen").with_on(false).with_brightness(25);
        let json = serde_json::to_string(&ChangeEvent::Added(light)).unwrap();
        assert_eq!(
            json,
            r#"{"id":"2","name":"Kitchen","room":"kitchen","on":false,"brightness":25}"#
        );
    }

    #[test]
    fn test_light_id_and_field() {
        let changed = ChangeEvent::changed("1", FieldChange::Room("Den".to_string()));
        assert_eq!(changed.light_id().as_str(), "1");
        assert_eq!(changed.field(), Some(LightField::Room));
        assert!(!changed.is_added());

        let added = ChangeEvent::Added(Light::new("5", "Porch", "outside"));
        assert_eq!(added.light_id().as_str(), "5");
        assert_eq!(added.field(), None);
        assert!(added.is_added());
    }

    #[test]
    fn test_read_matches_field() {
        let light = Light::new("1", "A", "r").with_on(true).with_brightness(50);
        for field in LightField::ALL {
            assert_eq!(FieldChange::read(&light, field).field(), field);
        }
        assert_eq!(
            FieldChange::read(&light, LightField::Brightness),
            FieldChange::Brightness(Some(50))
        );
    }

    #[test]
    fn test_removed_display() {
        let removed = Removed::of(&Light::new("2", "Kitchen", "kitchen"));
        assert_eq!(removed.to_string(), "Kitchen (2) has been removed");
    }
}
