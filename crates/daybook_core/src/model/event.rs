//! Event domain model.
//!
//! # Responsibility
//! - Define the schedulable event record and its field-level mutations.
//! - Implement the date-granularity status machine.
//! - Expose a static field/column table for table-style presentation layers.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `memos` holds non-owning memo ids without duplicates.
//! - `end >= start` is expected but not enforced; callers own time ordering.

use crate::model::memo::MemoId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an event.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EventId = Uuid;

/// Lifecycle status of an event relative to the calendar's time cursor.
///
/// Status is only rewritten by explicit write operations (`change_event_time`,
/// the `set_now` sweep); it is never recomputed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Created and not yet reached by the time cursor.
    Scheduled,
    /// The cursor date falls inside the event's date range.
    Ongoing,
    /// The cursor date has passed the event's end date.
    Past,
}

impl EventStatus {
    /// Stable lowercase label, used by logs and the column table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Ongoing => "ongoing",
            Self::Past => "past",
        }
    }
}

/// A named, time-ranged schedulable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable global id used for all cross-registry relationships.
    pub id: EventId,
    pub name: String,
    pub start: NaiveDateTime,
    /// Expected to be `>= start`; not validated (known gap).
    pub end: NaiveDateTime,
    /// Free-form label; empty string means untagged.
    pub tag: String,
    pub status: EventStatus,
    /// Non-owning ids of memos attached to this event, in attach order.
    pub memos: Vec<MemoId>,
}

impl Event {
    /// Creates an event with a generated stable id, empty tag and
    /// `Scheduled` status.
    pub fn new(name: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::with_id(Uuid::new_v4(), name, start, end)
    }

    /// Creates an event with a caller-provided stable id.
    ///
    /// Used by share/import paths where identity already exists externally.
    pub fn with_id(
        id: EventId,
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start,
            end,
            tag: String::new(),
            status: EventStatus::Scheduled,
            memos: Vec::new(),
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Moves the start instant. Does not check ordering against `end`.
    pub fn set_start(&mut self, start: NaiveDateTime) {
        self.start = start;
    }

    /// Moves the end instant. Does not check ordering against `start`.
    pub fn set_end(&mut self, end: NaiveDateTime) {
        self.end = end;
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Attaches a memo id; already-attached ids are ignored.
    pub fn attach_memo(&mut self, memo: MemoId) {
        if !self.memos.contains(&memo) {
            self.memos.push(memo);
        }
    }

    /// Detaches one memo id; returns whether it was attached.
    pub fn detach_memo(&mut self, memo: MemoId) -> bool {
        let before = self.memos.len();
        self.memos.retain(|id| *id != memo);
        self.memos.len() != before
    }

    /// Drops every memo id and returns them, for cascade bookkeeping.
    pub fn detach_all_memos(&mut self) -> Vec<MemoId> {
        std::mem::take(&mut self.memos)
    }

    pub fn has_memo(&self, memo: MemoId) -> bool {
        self.memos.contains(&memo)
    }

    /// Advances the status machine against the cursor date.
    ///
    /// Rules (date granularity):
    /// - cursor inside `start..=end` dates and not already `Ongoing` -> `Ongoing`
    /// - cursor past the end date and not already `Past` -> `Past`
    /// - otherwise unchanged; there is no transition back to `Scheduled`.
    ///
    /// Returns whether a transition happened.
    pub fn refresh_status(&mut self, cursor: NaiveDate) -> bool {
        let start = self.start.date();
        let end = self.end.date();
        if cursor >= start && cursor <= end && self.status != EventStatus::Ongoing {
            self.status = EventStatus::Ongoing;
            true
        } else if cursor > end && self.status != EventStatus::Past {
            self.status = EventStatus::Past;
            true
        } else {
            false
        }
    }

    /// Statically declared field-name-to-accessor table for table renderers.
    ///
    /// Replaces runtime reflection over event fields: a presentation layer
    /// binds a column to a field name and calls the paired accessor.
    pub fn columns() -> &'static [(&'static str, fn(&Event) -> String)] {
        EVENT_COLUMNS
    }
}

/// Field-name-to-accessor table backing [`Event::columns`].
const EVENT_COLUMNS: &[(&str, fn(&Event) -> String)] = &[
    ("name", |e| e.name.clone()),
    ("start", |e| e.start.to_string()),
    ("end", |e| e.end.to_string()),
    ("tag", |e| e.tag.clone()),
    ("status", |e| e.status.as_str().to_string()),
];
