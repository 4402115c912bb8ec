//! Ordered snapshot of every known light

use lights_client::LightSummary;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Light, LightId};

/// All lights observed at one point in time, in listing order
///
/// Lookups are linear and the first match wins. Ids are unique within a
/// snapshot built through [`Snapshot::from_summaries`] or [`Snapshot::push`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    lights: Vec<Light>,
}

impl Snapshot {
    /// Create a new empty snapshot
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Build a snapshot from a bulk listing
    ///
    /// Later entries repeating an id already seen are dropped.
    pub fn from_summaries(summaries: Vec<LightSummary>) -> Self {
        let mut snapshot = Self::new();
        for summary in summaries {
            snapshot.push(Light::from_summary(summary));
        }
        snapshot
    }

    /// Append a light, returning false if its id was already present
    pub fn push(&mut self, light: Light) -> bool {
        if self.contains(&light.id) {
            warn!("Duplicate light id {} in listing, keeping the first entry", light.id);
            return false;
        }
        self.lights.push(light);
        true
    }

    pub fn get(&self, id: &LightId) -> Option<&Light> {
        self.lights.iter().find(|light| &light.id == id)
    }

    pub fn contains(&self, id: &LightId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Light> {
        self.lights.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Light> {
        self.lights.iter_mut()
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Ids in listing order
    pub fn ids(&self) -> Vec<LightId> {
        self.lights.iter().map(|light| light.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

impl FromIterator<Light> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Light>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for light in iter {
            snapshot.push(light);
        }
        snapshot
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Light;
    type IntoIter = std::slice::Iter<'a, Light>;

    fn into_iter(self) -> Self::IntoIter {
        self.lights.iter()
    }
}

impl IntoIterator for Snapshot {
    type Item = Light;
    type IntoIter = std::vec::IntoIter<Light>;

    fn into_iter(self) -> Self::IntoIter {
        self.lights.into_iter()
    }
}
