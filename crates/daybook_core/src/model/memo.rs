//! Memo domain model.
//!
//! # Responsibility
//! - Define the note record attachable to one or more events.
//!
//! # Invariants
//! - `events` lists the ids of every event currently referencing this memo.
//! - A memo with zero referencing events is an orphan and must be removed by
//!   the registry that owns it.

use crate::model::event::EventId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a memo.
pub type MemoId = Uuid;

/// A note shared by any number of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub id: MemoId,
    pub note: String,
    /// Back-references to every event this memo is attached to.
    pub events: Vec<EventId>,
}

impl Memo {
    /// Creates a memo with a generated stable id and the given
    /// back-references.
    pub fn new(note: impl Into<String>, events: Vec<EventId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            note: note.into(),
            events,
        }
    }

    /// Records one more referencing event; already-known ids are ignored.
    pub fn attach_event(&mut self, event: EventId) {
        if !self.events.contains(&event) {
            self.events.push(event);
        }
    }

    /// Drops one back-reference and returns the remaining reference count.
    pub fn detach_event(&mut self, event: EventId) -> usize {
        self.events.retain(|id| *id != event);
        self.events.len()
    }

    /// An orphaned memo has no referencing events left.
    pub fn is_orphan(&self) -> bool {
        self.events.is_empty()
    }
}
