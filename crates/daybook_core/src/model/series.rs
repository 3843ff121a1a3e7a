//! Series domain model.
//!
//! # Responsibility
//! - Define the named, ordered grouping of events.
//!
//! # Invariants
//! - `events` is ordered membership; an event appears at most once.
//! - `name` is the lookup key; uniqueness is expected in practice but not
//!   enforced by construction.

use crate::model::event::EventId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a series.
pub type SeriesId = Uuid;

/// A named group of events, explicitly assembled or generated from a
/// recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    /// Member event ids in membership order.
    pub events: Vec<EventId>,
}

impl Series {
    pub fn new(name: impl Into<String>, events: Vec<EventId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            events,
        }
    }

    /// Appends a member; already-present ids are ignored.
    pub fn add_event(&mut self, event: EventId) {
        if !self.events.contains(&event) {
            self.events.push(event);
        }
    }

    /// Removes a member; returns whether it was present.
    pub fn remove_event(&mut self, event: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|id| *id != event);
        self.events.len() != before
    }

    pub fn contains(&self, event: EventId) -> bool {
        self.events.contains(&event)
    }
}
