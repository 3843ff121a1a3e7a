//! Calendar aggregate root.
//!
//! # Responsibility
//! - Own the event store, the three registries, the time cursor and the
//!   shared-event inbox.
//! - Route every cross-registry mutation through one place so cascades never
//!   leave orphans or dangling ids behind.
//!
//! # Invariants
//! - `delete_event` is the only sanctioned event-deletion path; it touches
//!   all four registries in a fixed order.
//! - A memo's registry view and the event-side memo lists never diverge.
//! - The time cursor is only written through `set_now`, which sweeps every
//!   event's status in the same call.

use crate::model::alert::{Alert, AlertId};
use crate::model::event::{Event, EventId};
use crate::model::memo::{Memo, MemoId};
use crate::model::series::{Series, SeriesId};
use crate::registry::alert_registry::AlertRegistry;
use crate::registry::event_store::EventStore;
use crate::registry::memo_registry::MemoRegistry;
use crate::registry::series_registry::SeriesRegistry;
use crate::registry::RegistryError;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar facade operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    /// Target event is not in the owned collection.
    EventNotFound(EventId),
    /// Target memo is not registered.
    MemoNotFound(MemoId),
    /// Target series is not registered.
    SeriesNotFound(SeriesId),
    /// Target alert is not registered.
    AlertNotFound(AlertId),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::MemoNotFound(id) => write!(f, "memo not found: {id}"),
            Self::SeriesNotFound(id) => write!(f, "series not found: {id}"),
            Self::AlertNotFound(id) => write!(f, "alert not found: {id}"),
        }
    }
}

impl Error for CalendarError {}

impl From<RegistryError> for CalendarError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::EventNotFound(id) => Self::EventNotFound(id),
            RegistryError::MemoNotFound(id) => Self::MemoNotFound(id),
            RegistryError::SeriesNotFound(id) => Self::SeriesNotFound(id),
            RegistryError::AlertNotFound(id) => Self::AlertNotFound(id),
        }
    }
}

/// A single user's calendar: events, memos, series, alerts and the inbox of
/// events shared from other calendars.
///
/// The whole aggregate serializes as one graph; because every relationship is
/// an id list, reference identity survives any serde round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    events: EventStore,
    memos: MemoRegistry,
    series: SeriesRegistry,
    alerts: AlertRegistry,
    /// Shared events pending explicit acceptance via `add_event`.
    inbox: Vec<Event>,
    /// Current-time cursor; written only by `set_now`.
    now: NaiveDateTime,
}

impl Calendar {
    /// Creates an empty calendar with the given time cursor.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            events: EventStore::new(),
            memos: MemoRegistry::new(),
            series: SeriesRegistry::new(),
            alerts: AlertRegistry::new(),
            inbox: Vec::new(),
            now,
        }
    }

    // -----------------------------------------------------------------
    // Time cursor
    // -----------------------------------------------------------------

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Moves the time cursor and refreshes the status of every owned event
    /// in one sweep, so no event keeps a stale status between writes.
    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
        let cursor = now.date();
        let mut transitions = 0;
        for event in self.events.iter_mut() {
            if event.refresh_status(cursor) {
                transitions += 1;
            }
        }
        debug!("event=cursor_moved now={now} status_transitions={transitions}");
    }

    // -----------------------------------------------------------------
    // Event lifecycle
    // -----------------------------------------------------------------

    /// Inserts an event into the owned collection. Identity is the only
    /// uniqueness; duplicate names are allowed.
    pub fn add_event(&mut self, event: Event) -> EventId {
        let id = self.events.insert(event);
        debug!("event=event_added id={id}");
        id
    }

    /// Deletes an event and runs the full cascade, in fixed order:
    /// remove from the store, detach memos (deleting any orphaned memo),
    /// delete the event's alerts, and drop the event from every series.
    ///
    /// Returns the removed event.
    pub fn delete_event(&mut self, id: EventId) -> Result<Event, CalendarError> {
        let event = self
            .events
            .remove(id)
            .ok_or(CalendarError::EventNotFound(id))?;

        let mut memos_dropped = 0;
        for memo_id in &event.memos {
            if self.memos.detach_event(*memo_id, id)? == 0 {
                self.memos.delete(*memo_id);
                memos_dropped += 1;
            }
        }
        let alerts_dropped = self.alerts.delete_all_for_event(id);
        let series_dropped = self.series.remove_event_everywhere(id);

        info!(
            "event=event_deleted id={id} memos_dropped={memos_dropped} \
             alerts_dropped={alerts_dropped} series_dropped={series_dropped}"
        );
        Ok(event)
    }

    pub fn change_event_name(
        &mut self,
        id: EventId,
        name: impl Into<String>,
    ) -> Result<(), CalendarError> {
        let event = self
            .events
            .get_mut(id)
            .ok_or(CalendarError::EventNotFound(id))?;
        event.rename(name);
        Ok(())
    }

    pub fn change_event_tag(
        &mut self,
        id: EventId,
        tag: impl Into<String>,
    ) -> Result<(), CalendarError> {
        let event = self
            .events
            .get_mut(id)
            .ok_or(CalendarError::EventNotFound(id))?;
        event.set_tag(tag);
        Ok(())
    }

    /// Moves an event to a new time range.
    ///
    /// Refreshes the event's status against the cursor and deletes every
    /// alert bound to the event: previously scheduled reminders are anchored
    /// to absolute instants that just went stale.
    pub fn change_event_time(
        &mut self,
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<(), CalendarError> {
        let cursor = self.now.date();
        let event = self
            .events
            .get_mut(id)
            .ok_or(CalendarError::EventNotFound(id))?;
        event.set_start(start);
        event.set_end(end);
        event.refresh_status(cursor);

        let alerts_dropped = self.alerts.delete_all_for_event(id);
        debug!("event=event_retimed id={id} alerts_dropped={alerts_dropped}");
        Ok(())
    }

    /// Recreates an event at another time range.
    ///
    /// The duplicate is a fresh identity sharing the original's name, memo
    /// attachments (same memo ids, both sides updated) and series
    /// memberships. Original and duplicate are independent afterwards.
    pub fn duplicate_event(
        &mut self,
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<EventId, CalendarError> {
        let original = self.events.get(id).ok_or(CalendarError::EventNotFound(id))?;
        let mut duplicate = Event::new(original.name.clone(), start, end);
        duplicate.memos = original.memos.clone();

        let memo_ids = duplicate.memos.clone();
        let series_ids: Vec<SeriesId> = self
            .series
            .containing(id)
            .into_iter()
            .map(|series| series.id)
            .collect();

        let duplicate_id = self.events.insert(duplicate);
        for memo_id in memo_ids {
            self.memos.attach_event(memo_id, duplicate_id)?;
        }
        for series_id in series_ids {
            self.series.add_event(series_id, duplicate_id)?;
        }

        debug!("event=event_duplicated original={id} duplicate={duplicate_id}");
        Ok(duplicate_id)
    }

    // -----------------------------------------------------------------
    // Memos
    // -----------------------------------------------------------------

    /// Creates one memo and attaches it to every listed event.
    ///
    /// Every event id must be in the owned collection. Duplicate ids in
    /// `events` count once. With no events at all the memo is orphaned on
    /// arrival, so the orphan rule drops it in the same call; the returned
    /// id then resolves to nothing.
    pub fn create_memo(
        &mut self,
        events: &[EventId],
        note: impl Into<String>,
    ) -> Result<MemoId, CalendarError> {
        for event_id in events {
            self.ensure_event(*event_id)?;
        }
        let mut refs: Vec<EventId> = Vec::new();
        for event_id in events {
            if !refs.contains(event_id) {
                refs.push(*event_id);
            }
        }

        let memo_id = self.memos.create(note, refs.clone());
        if refs.is_empty() {
            self.memos.delete(memo_id);
            return Ok(memo_id);
        }
        for event_id in refs {
            if let Some(event) = self.events.get_mut(event_id) {
                event.attach_memo(memo_id);
            }
        }
        Ok(memo_id)
    }

    /// Deletes a memo from the registry and detaches it from every owned
    /// event that still references it, so the two views never diverge.
    pub fn delete_memo(&mut self, id: MemoId) -> Result<Memo, CalendarError> {
        let memo = self
            .memos
            .delete(id)
            .ok_or(CalendarError::MemoNotFound(id))?;
        for event in self.events.iter_mut() {
            event.detach_memo(id);
        }
        Ok(memo)
    }

    // -----------------------------------------------------------------
    // Alerts
    // -----------------------------------------------------------------

    /// Registers a one-shot alert for an owned event.
    pub fn add_individual_alert(
        &mut self,
        event: EventId,
        message: impl Into<String>,
        fire_at: NaiveDateTime,
    ) -> Result<AlertId, CalendarError> {
        self.ensure_event(event)?;
        Ok(self.alerts.add_individual(event, message, fire_at))
    }

    /// Registers a repeating alert for an owned event, anchored at the
    /// current time cursor (first fire one interval from now).
    pub fn add_frequent_alert(
        &mut self,
        event: EventId,
        message: impl Into<String>,
        interval: Duration,
    ) -> Result<AlertId, CalendarError> {
        self.ensure_event(event)?;
        Ok(self.alerts.add_frequent(event, message, interval, self.now))
    }

    pub fn delete_alert(&mut self, id: AlertId) -> Result<Alert, CalendarError> {
        self.alerts
            .delete(id)
            .ok_or(CalendarError::AlertNotFound(id))
    }

    /// Deletes every alert bound to an owned event; returns how many were
    /// dropped.
    pub fn delete_all_alerts_for_event(&mut self, event: EventId) -> Result<usize, CalendarError> {
        self.ensure_event(event)?;
        Ok(self.alerts.delete_all_for_event(event))
    }

    /// Defensive copy of every registered alert.
    pub fn all_alerts(&self) -> Vec<Alert> {
        self.alerts.all()
    }

    pub fn alert(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.get(id)
    }

    // -----------------------------------------------------------------
    // Series
    // -----------------------------------------------------------------

    /// Generates a recurring series and inserts the generated events into
    /// the owned collection. This is the only path by which generated events
    /// enter the calendar.
    pub fn add_recurring_series(
        &mut self,
        name: impl Into<String>,
        event_duration: Duration,
        period: Duration,
        count: u32,
        first: NaiveDateTime,
    ) -> SeriesId {
        let (series_id, generated) = self
            .series
            .build(name, event_duration, period, count, first);
        let generated_count = generated.len();
        for event in generated {
            self.events.insert(event);
        }
        info!("event=series_built id={series_id} generated={generated_count}");
        series_id
    }

    /// Registers a series grouping events already in the owned collection.
    pub fn add_series(
        &mut self,
        name: impl Into<String>,
        events: &[EventId],
    ) -> Result<SeriesId, CalendarError> {
        for event_id in events {
            self.ensure_event(*event_id)?;
        }
        Ok(self.series.create(name, events.to_vec()))
    }

    /// Member events of the first series with the given name, in membership
    /// order; empty when no series matches.
    pub fn events_by_series(&self, name: &str) -> Vec<&Event> {
        match self.series.find_by_name(name) {
            Some(series) => series
                .events
                .iter()
                .filter_map(|id| self.events.get(*id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every series whose membership includes the event.
    pub fn associated_series(&self, event: EventId) -> Vec<&Series> {
        self.series.containing(event)
    }

    pub fn series_by_id(&self, id: SeriesId) -> Option<&Series> {
        self.series.get(id)
    }

    /// Series in registration order (persistence walk).
    pub fn series_iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(id)
    }

    /// Events in insertion order (persistence walk).
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// First event with the given exact name.
    pub fn event_by_name(&self, name: &str) -> Option<&Event> {
        self.events.first_by_name(name)
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events.iter().map(|event| event.name.clone()).collect()
    }

    /// Events carrying the exact tag; empty (never absent) on no match.
    pub fn find_events_by_tag(&self, tag: &str) -> Vec<&Event> {
        self.events.iter().filter(|event| event.tag == tag).collect()
    }

    /// Events whose date range covers the given date.
    pub fn find_events_on_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| date >= event.start.date() && date <= event.end.date())
            .collect()
    }

    /// Events referencing the exact memo id.
    pub fn find_events_with_memo(&self, memo: MemoId) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.has_memo(memo))
            .collect()
    }

    /// Events with at least one attached memo carrying the exact note text,
    /// each event reported once, in insertion order.
    pub fn find_events_by_memo_note(&self, note: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| {
                event
                    .memos
                    .iter()
                    .any(|memo_id| self.memos.get(*memo_id).is_some_and(|memo| memo.note == note))
            })
            .collect()
    }

    /// Events whose end instant is strictly before the cursor.
    ///
    /// `None` iff the calendar holds no events at all; `Some(empty)` when
    /// events exist but none are past. The distinction is deliberate and
    /// relied on by callers that render "no events yet" differently from
    /// "nothing in this window".
    pub fn past_events(&self) -> Option<Vec<&Event>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.iter().filter(|e| e.end < self.now).collect())
    }

    /// Events straddling the cursor (start strictly before, end strictly
    /// after). Always a plain list.
    pub fn current_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.start < self.now && e.end > self.now)
            .collect()
    }

    /// Events whose start instant is strictly after the cursor; same
    /// absence distinction as [`Calendar::past_events`].
    pub fn future_events(&self) -> Option<Vec<&Event>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.iter().filter(|e| e.start > self.now).collect())
    }

    pub fn memo(&self, id: MemoId) -> Option<&Memo> {
        self.memos.get(id)
    }

    /// Memos in creation order (persistence walk).
    pub fn memos(&self) -> impl Iterator<Item = &Memo> {
        self.memos.iter()
    }

    pub fn has_memos(&self) -> bool {
        !self.memos.is_empty()
    }

    // -----------------------------------------------------------------
    // Shared-event inbox
    // -----------------------------------------------------------------

    /// Appends a shared event to the inbox. The inbox never grants
    /// collection membership; acceptance is a separate `add_event` call.
    pub fn add_event_notification(&mut self, event: Event) {
        debug!("event=invite_received id={}", event.id);
        self.inbox.push(event);
    }

    /// Pending event invites, oldest first.
    pub fn event_invites(&self) -> &[Event] {
        &self.inbox
    }

    /// Hands one pending invite off to the caller, removing it from the
    /// inbox. The caller completes acceptance with `add_event`.
    pub fn take_invite(&mut self, index: usize) -> Option<Event> {
        if index < self.inbox.len() {
            Some(self.inbox.remove(index))
        } else {
            None
        }
    }

    fn ensure_event(&self, id: EventId) -> Result<(), CalendarError> {
        if self.events.contains(id) {
            Ok(())
        } else {
            Err(CalendarError::EventNotFound(id))
        }
    }
}
