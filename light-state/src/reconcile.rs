//! Snapshot diffing
//!
//! One pass over the incoming snapshot queues field changes and additions in
//! incoming order; a second pass over the current snapshot reports removals
//! in current order. Promotion of `incoming` to `current` is done by
//! [`SnapshotStore::reconcile`](crate::store::SnapshotStore::reconcile).

use tracing::{debug, trace};

use crate::model::{ChangeEvent, FieldChange, Light, LightField, Removed, Snapshot};
use crate::queue::ChangeQueue;

/// Counts from one reconciliation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Single-field change events queued
    pub changed_fields: usize,
    /// New-light events queued
    pub added: usize,
    /// Removal notices delivered
    pub removed: usize,
}

impl ReconcileSummary {
    /// Events pushed onto the queue (removals are not queued)
    pub fn queued(&self) -> usize {
        self.changed_fields + self.added
    }

    /// Whether the two snapshots were equivalent
    pub fn is_empty(&self) -> bool {
        self.queued() == 0 && self.removed == 0
    }
}

/// Fields of `incoming` that differ from `current`, in canonical order
pub fn changed_fields<'a>(
    current: &'a Light,
    incoming: &'a Light,
) -> impl Iterator<Item = FieldChange> + 'a {
    LightField::ALL.into_iter().filter_map(move |field| {
        let new_value = FieldChange::read(incoming, field);
        (new_value != FieldChange::read(current, field)).then_some(new_value)
    })
}

/// Compare `incoming` against `current`
///
/// Changes and additions are pushed onto `queue`; every light that vanished
/// is handed to `on_removed` as soon as it is found.
pub fn diff<F>(
    current: &Snapshot,
    incoming: &Snapshot,
    queue: &mut ChangeQueue,
    mut on_removed: F,
) -> ReconcileSummary
where
    F: FnMut(Removed),
{
    let mut summary = ReconcileSummary::default();

    for light in incoming {
        match current.get(&light.id) {
            Some(previous) => {
                for change in changed_fields(previous, light) {
                    trace!("Light {} changed {}", light.id, change.field());
                    queue.push(ChangeEvent::changed(light.id.clone(), change));
                    summary.changed_fields += 1;
                }
            }
            None => {
                debug!("New light found: {}", light.id);
                queue.push(ChangeEvent::Added(light.clone()));
                summary.added += 1;
            }
        }
    }

    for previous in current {
        if !incoming.contains(&previous.id) {
            debug!("Light removed: {}", previous.id);
            on_removed(Removed::of(previous));
            summary.removed += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LightId;

    fn snapshot(lights: Vec<Light>) -> Snapshot {
        lights.into_iter().collect()
    }

    fn living_room() -> Light {
        Light::new("1", "Living Room", "living_room").with_on(true).with_brightness(50)
    }

    fn kitchen() -> Light {
        Light::new("2", "Kitchen", "kitchen").with_on(false).with_brightness(25)
    }

    fn run(
        current: &Snapshot,
        incoming: &Snapshot,
    ) -> (Vec<ChangeEvent>, Vec<Removed>, ReconcileSummary) {
        let mut queue = ChangeQueue::new();
        let mut removed = Vec::new();
        let summary = diff(current, incoming, &mut queue, |r| removed.push(r));
        let events = queue.drain().collect();
        (events, removed, summary)
    }

    #[test]
    fn test_identical_snapshots_produce_nothing() {
        let current = snapshot(vec![living_room(), kitchen()]);
        let (events, removed, summary) = run(&current, &current.clone());

        assert!(events.is_empty());
        assert!(removed.is_empty());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_single_field_change() {
        let current = snapshot(vec![living_room()]);
        let incoming = snapshot(vec![living_room().with_brightness(75)]);

        let (events, _, summary) = run(&current, &incoming);
        assert_eq!(
            events,
            vec![ChangeEvent::changed("1", FieldChange::Brightness(Some(75)))]
        );
        assert_eq!(summary.changed_fields, 1);
    }

    #[test]
    fn test_multi_field_change_fans_out_in_field_order() {
        let current = snapshot(vec![living_room()]);
        let incoming = snapshot(vec![living_room().with_on(false).with_brightness(75)]);

        let (events, _, _) = run(&current, &incoming);
        assert_eq!(
            events,
            vec![
                ChangeEvent::changed("1", FieldChange::On(Some(false))),
                ChangeEvent::changed("1", FieldChange::Brightness(Some(75))),
            ]
        );
    }

    #[test]
    fn test_all_fields_changed() {
        let current = snapshot(vec![living_room()]);
        let incoming = snapshot(vec![Light::new("1", "Lounge", "den")
            .with_on(false)
            .with_brightness(0)]);

        let (events, _, _) = run(&current, &incoming);
        let fields: Vec<_> = events.iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, LightField::ALL.to_vec());
    }

    #[test]
    fn test_new_light_is_queued_whole() {
        let current = snapshot(vec![living_room()]);
        let incoming = snapshot(vec![living_room(), kitchen()]);

        let (events, removed, summary) = run(&current, &incoming);
        assert_eq!(events, vec![ChangeEvent::Added(kitchen())]);
        assert!(removed.is_empty());
        assert_eq!(summary.added, 1);
    }

    #[test]
    fn test_removed_light_is_reported_not_queued() {
        let current = snapshot(vec![living_room(), kitchen()]);
        let incoming = snapshot(vec![living_room()]);

        let (events, removed, summary) = run(&current, &incoming);
        assert!(events.is_empty());
        assert_eq!(
            removed,
            vec![Removed {
                id: LightId::new("2"),
                name: "Kitchen".to_string(),
            }]
        );
        assert_eq!(summary.removed, 1);
    }

    #[test]
    fn test_events_follow_incoming_order() {
        let current = snapshot(vec![living_room(), kitchen()]);
        let porch = Light::new("3", "Porch", "outside").with_on(true).with_brightness(100);
        let incoming = snapshot(vec![
            kitchen().with_on(true),
            porch.clone(),
            living_room().with_brightness(10),
        ]);

        let (events, _, _) = run(&current, &incoming);
        let ids: Vec<_> = events.iter().map(|e| e.light_id().as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
        assert_eq!(events[1], ChangeEvent::Added(porch));
    }

    #[test]
    fn test_removals_follow_current_order() {
        let porch = Light::new("3", "Porch", "outside");
        let current = snapshot(vec![porch, living_room(), kitchen()]);
        let incoming = snapshot(vec![living_room()]);

        let (_, removed, _) = run(&current, &incoming);
        let names: Vec<_> = removed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Porch", "Kitchen"]);
    }

    #[test]
    fn test_empty_incoming_removes_everything() {
        let current = snapshot(vec![living_room(), kitchen()]);
        let (events, removed, _) = run(&current, &Snapshot::new());
        assert!(events.is_empty());
        assert_eq!(removed.len(), 2);
    }

    #[test]
    fn test_state_disappearing_is_a_change() {
        let current = snapshot(vec![living_room()]);
        let incoming =
            snapshot(vec![Light::new("1", "Living Room", "living_room").with_on(true)]);

        let (events, _, _) = run(&current, &incoming);
        assert_eq!(events, vec![ChangeEvent::changed("1", FieldChange::Brightness(None))]);
    }
}
