//! Memo registry: canonical owner of all memos.
//!
//! # Responsibility
//! - Create and delete memos; track which events reference each memo.
//!
//! # Invariants
//! - Deleting a memo here does not touch event-side references; the calendar
//!   facade keeps both views in sync.
//! - Orphan removal (last referencing event gone) is driven by the facade's
//!   cascade using `detach_event`'s remaining-count result.

use crate::model::event::EventId;
use crate::model::memo::{Memo, MemoId};
use crate::registry::{RegistryError, RegistryResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arena of memos plus an insertion-order index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoRegistry {
    arena: HashMap<MemoId, Memo>,
    order: Vec<MemoId>,
}

impl MemoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one new memo with back-references to `events`.
    ///
    /// The caller attaches the event-side references; this registry only
    /// records its own view.
    pub fn create(&mut self, note: impl Into<String>, events: Vec<EventId>) -> MemoId {
        let memo = Memo::new(note, events);
        let id = memo.id;
        debug!("event=memo_created id={id} refs={}", memo.events.len());
        self.arena.insert(id, memo);
        self.order.push(id);
        id
    }

    /// Removes a memo from the registry only.
    pub fn delete(&mut self, id: MemoId) -> Option<Memo> {
        let removed = self.arena.remove(&id);
        if removed.is_some() {
            self.order.retain(|other| *other != id);
            debug!("event=memo_deleted id={id}");
        }
        removed
    }

    /// Records one more referencing event on a memo.
    pub fn attach_event(&mut self, memo: MemoId, event: EventId) -> RegistryResult<()> {
        let memo = self
            .arena
            .get_mut(&memo)
            .ok_or(RegistryError::MemoNotFound(memo))?;
        memo.attach_event(event);
        Ok(())
    }

    /// Drops one back-reference and returns the remaining reference count,
    /// which is the cascade's orphan test.
    pub fn detach_event(&mut self, memo: MemoId, event: EventId) -> RegistryResult<usize> {
        let memo = self
            .arena
            .get_mut(&memo)
            .ok_or(RegistryError::MemoNotFound(memo))?;
        Ok(memo.detach_event(event))
    }

    pub fn get(&self, id: MemoId) -> Option<&Memo> {
        self.arena.get(&id)
    }

    /// Memos in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Memo> {
        self.order.iter().filter_map(|id| self.arena.get(id))
    }

    /// Ids of every memo carrying the exact note text.
    pub fn ids_with_note(&self, note: &str) -> Vec<MemoId> {
        self.iter()
            .filter(|memo| memo.note == note)
            .map(|memo| memo.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
