//! Alert registry: canonical owner of all alerts.
//!
//! # Responsibility
//! - Create and delete alerts; cascade per-event deletion.
//!
//! # Invariants
//! - Every stored alert references exactly one event id.
//! - `all` always returns a defensive copy; callers cannot mutate registry
//!   state through it.

use crate::model::alert::{Alert, AlertId};
use crate::model::event::EventId;
use chrono::{Duration, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arena of alerts plus a creation-order index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertRegistry {
    arena: HashMap<AlertId, Alert>,
    order: Vec<AlertId>,
}

impl AlertRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a one-shot alert bound to `event`.
    pub fn add_individual(
        &mut self,
        event: EventId,
        message: impl Into<String>,
        fire_at: NaiveDateTime,
    ) -> AlertId {
        self.register(Alert::individual(event, message, fire_at))
    }

    /// Registers a repeating alert bound to `event`, anchored at `anchor`.
    pub fn add_frequent(
        &mut self,
        event: EventId,
        message: impl Into<String>,
        interval: Duration,
        anchor: NaiveDateTime,
    ) -> AlertId {
        self.register(Alert::frequent(event, message, interval, anchor))
    }

    fn register(&mut self, alert: Alert) -> AlertId {
        let id = alert.id;
        debug!("event=alert_created id={id} for_event={}", alert.event);
        self.arena.insert(id, alert);
        self.order.push(id);
        id
    }

    /// Removes one alert, returning it if it was present.
    pub fn delete(&mut self, id: AlertId) -> Option<Alert> {
        let removed = self.arena.remove(&id);
        if removed.is_some() {
            self.order.retain(|other| *other != id);
            debug!("event=alert_deleted id={id}");
        }
        removed
    }

    /// Removes every alert bound to `event`; returns how many were dropped.
    pub fn delete_all_for_event(&mut self, event: EventId) -> usize {
        let doomed: Vec<AlertId> = self
            .iter()
            .filter(|alert| alert.event == event)
            .map(|alert| alert.id)
            .collect();
        for id in &doomed {
            self.delete(*id);
        }
        doomed.len()
    }

    /// Defensive copy of every registered alert, in creation order.
    pub fn all(&self) -> Vec<Alert> {
        self.iter().cloned().collect()
    }

    /// Alerts bound to one event, in creation order.
    pub fn for_event(&self, event: EventId) -> Vec<&Alert> {
        self.iter().filter(|alert| alert.event == event).collect()
    }

    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.arena.get(&id)
    }

    fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.order.iter().filter_map(|id| self.arena.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
