//! Owning store for calendar events.
//!
//! # Responsibility
//! - Act as the single owning collection for `Event` records.
//! - Preserve insertion order for deterministic listing and queries.
//!
//! # Invariants
//! - `arena` and `order` always describe the same id set.
//! - Events leave the store only through `remove`; the calendar facade is the
//!   only sanctioned caller of it.

use crate::model::event::{Event, EventId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arena of events plus an insertion-order index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStore {
    arena: HashMap<EventId, Event>,
    order: Vec<EventId>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an event and returns its id. Re-inserting an id that is
    /// already present replaces the record without duplicating the order
    /// entry.
    pub fn insert(&mut self, event: Event) -> EventId {
        let id = event.id;
        if self.arena.insert(id, event).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Removes an event, returning it if it was present.
    pub fn remove(&mut self, id: EventId) -> Option<Event> {
        let removed = self.arena.remove(&id);
        if removed.is_some() {
            self.order.retain(|other| *other != id);
        }
        removed
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.arena.get(&id)
    }

    pub fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.arena.get_mut(&id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.arena.contains_key(&id)
    }

    /// Events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.order.iter().filter_map(|id| self.arena.get(id))
    }

    /// Mutable traversal (arbitrary order), for status sweeps.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Event> {
        self.arena.values_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.order.iter().copied()
    }

    /// First event (in insertion order) with the given exact name.
    pub fn first_by_name(&self, name: &str) -> Option<&Event> {
        self.iter().find(|event| event.name == name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
