//! Series registry: grouping and recurrence generation.
//!
//! # Responsibility
//! - Own all series; group existing events or generate recurring ones.
//! - Hand generated events back to the caller, which owns their storage.
//!
//! # Invariants
//! - `create` never creates events; `build` creates events but does not store
//!   them.
//! - Name lookup returns the first series registered with that name.

use crate::model::event::{Event, EventId};
use crate::model::series::{Series, SeriesId};
use crate::registry::{RegistryError, RegistryResult};
use chrono::{Duration, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arena of series plus a registration-order index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesRegistry {
    arena: HashMap<SeriesId, Series>,
    order: Vec<SeriesId>,
}

impl SeriesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a series grouping already-existing events.
    pub fn create(&mut self, name: impl Into<String>, events: Vec<EventId>) -> SeriesId {
        let series = Series::new(name, events);
        let id = series.id;
        debug!(
            "event=series_created id={id} name={} members={}",
            series.name,
            series.events.len()
        );
        self.arena.insert(id, series);
        self.order.push(id);
        id
    }

    /// Generates `count` recurring events and registers one series holding
    /// them all.
    ///
    /// Occurrence `i` starts at `first + period*i` and ends `event_duration`
    /// later; each generated event is named after the series. The generated
    /// events are returned to the caller, which is responsible for inserting
    /// them into the owning event collection.
    pub fn build(
        &mut self,
        name: impl Into<String>,
        event_duration: Duration,
        period: Duration,
        count: u32,
        first: NaiveDateTime,
    ) -> (SeriesId, Vec<Event>) {
        let name = name.into();
        let mut events = Vec::with_capacity(count as usize);
        let mut start = first;
        for _ in 0..count {
            events.push(Event::new(name.clone(), start, start + event_duration));
            start += period;
        }
        let member_ids = events.iter().map(|event| event.id).collect();
        let id = self.create(name, member_ids);
        (id, events)
    }

    /// Appends an existing event to a series's membership.
    pub fn add_event(&mut self, series: SeriesId, event: EventId) -> RegistryResult<()> {
        let series = self
            .arena
            .get_mut(&series)
            .ok_or(RegistryError::SeriesNotFound(series))?;
        series.add_event(event);
        Ok(())
    }

    /// First registered series with the given exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Series> {
        self.iter().find(|series| series.name == name)
    }

    /// Every series whose membership includes `event`.
    pub fn containing(&self, event: EventId) -> Vec<&Series> {
        self.iter().filter(|series| series.contains(event)).collect()
    }

    /// Removes `event` from every series; returns how many memberships were
    /// dropped.
    pub fn remove_event_everywhere(&mut self, event: EventId) -> usize {
        let mut dropped = 0;
        for series in self.arena.values_mut() {
            if series.remove_event(event) {
                dropped += 1;
            }
        }
        dropped
    }

    pub fn get(&self, id: SeriesId) -> Option<&Series> {
        self.arena.get(&id)
    }

    /// Series in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.order.iter().filter_map(|id| self.arena.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SeriesRegistry;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn build_spaces_occurrences_by_period() {
        let mut registry = SeriesRegistry::new();
        let first = NaiveDate::from_ymd_opt(2024, 2, 5)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();

        let (id, events) =
            registry.build("yoga", Duration::hours(1), Duration::days(7), 4, first);

        assert_eq!(events.len(), 4);
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.start, first + Duration::days(7 * i as i64));
            assert_eq!(event.end, event.start + Duration::hours(1));
            assert_eq!(event.name, "yoga");
        }
        let members = &registry.get(id).unwrap().events;
        assert_eq!(members.len(), 4);
        assert!(events.iter().all(|event| members.contains(&event.id)));
    }

    #[test]
    fn find_by_name_returns_first_registered() {
        let mut registry = SeriesRegistry::new();
        let first = registry.create("gym", Vec::new());
        registry.create("gym", Vec::new());
        assert_eq!(registry.find_by_name("gym").map(|s| s.id), Some(first));
        assert!(registry.find_by_name("swim").is_none());
    }
}
