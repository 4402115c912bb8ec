//! FIFO buffer of detected changes
//!
//! The reconciler pushes, the caller drains. Nothing is deduplicated or
//! coalesced, and entries stay queued across passes until someone pops them.

use std::collections::vec_deque::{self, VecDeque};

use crate::model::ChangeEvent;

/// Ordered queue of change events waiting to be reported
#[derive(Debug, Clone, Default)]
pub struct ChangeQueue {
    events: VecDeque<ChangeEvent>,
}

impl ChangeQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Add an event behind everything already queued
    pub fn push(&mut self, event: ChangeEvent) {
        self.events.push_back(event);
    }

    /// Remove and return the oldest event
    ///
    /// Returns `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<ChangeEvent> {
        self.events.pop_front()
    }

    /// Look at the oldest event without removing it
    pub fn peek(&self) -> Option<&ChangeEvent> {
        self.events.front()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Remove every queued event, oldest first
    pub fn drain(&mut self) -> vec_deque::Drain<'_, ChangeEvent> {
        self.events.drain(..)
    }
}

impl Extend<ChangeEvent> for ChangeQueue {
    fn extend<I: IntoIterator<Item = ChangeEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldChange, Light};

    fn event(id: &str, percent: i64) -> ChangeEvent {
        ChangeEvent::changed(id, FieldChange::Brightness(Some(percent)))
    }

    #[test]
    fn test_initially_empty() {
        let mut queue = ChangeQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.pop().is_none());
        assert!(queue.peek().is_none());
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = ChangeQueue::new();
        queue.push(event("1", 10));
        queue.push(event("2", 20));
        queue.push(event("3", 30));

        assert_eq!(queue.pop(), Some(event("1", 10)));
        assert_eq!(queue.pop(), Some(event("2", 20)));
        assert_eq!(queue.pop(), Some(event("3", 30)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = ChangeQueue::new();
        queue.push(ChangeEvent::Added(Light::new("1", "A", "r")));

        assert!(queue.peek().unwrap().is_added());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_no_deduplication() {
        let mut queue = ChangeQueue::new();
        queue.push(event("1", 10));
        queue.push(event("1", 10));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_drain_empties_in_order() {
        let mut queue = ChangeQueue::new();
        queue.extend(vec![event("1", 1), event("2", 2)]);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![event("1", 1), event("2", 2)]);
        assert!(queue.is_empty());
    }
}
