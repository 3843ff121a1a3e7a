//! Alert domain model.
//!
//! # Responsibility
//! - Define the reminder record bound to exactly one event.
//!
//! # Invariants
//! - Every alert references exactly one event id.
//! - A frequent alert with a non-positive interval never fires; intervals
//!   are not validated at construction.

use crate::model::event::EventId;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an alert.
pub type AlertId = Uuid;

/// How and when an alert fires.
///
/// Intervals are persisted as whole seconds because `chrono::Duration` has no
/// serde representation; accessors expose them as `Duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSchedule {
    /// Fires once at a fixed instant.
    Individual { fire_at: NaiveDateTime },
    /// Fires repeatedly, every `interval_secs` seconds after `anchor`.
    ///
    /// Convention: `anchor` is the calendar's time cursor at creation, so the
    /// first fire is one interval after the alert was created.
    Frequent {
        interval_secs: i64,
        anchor: NaiveDateTime,
    },
}

/// A reminder bound to one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    /// The single event this alert reminds about.
    pub event: EventId,
    pub message: String,
    pub schedule: AlertSchedule,
}

impl Alert {
    /// Creates a one-shot alert firing at `fire_at`.
    pub fn individual(event: EventId, message: impl Into<String>, fire_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            event,
            message: message.into(),
            schedule: AlertSchedule::Individual { fire_at },
        }
    }

    /// Creates a repeating alert anchored at `anchor`.
    pub fn frequent(
        event: EventId,
        message: impl Into<String>,
        interval: Duration,
        anchor: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            event,
            message: message.into(),
            schedule: AlertSchedule::Frequent {
                interval_secs: interval.num_seconds(),
                anchor,
            },
        }
    }

    /// The repeat interval, or `None` for one-shot alerts.
    pub fn interval(&self) -> Option<Duration> {
        match &self.schedule {
            AlertSchedule::Individual { .. } => None,
            AlertSchedule::Frequent { interval_secs, .. } => {
                Some(Duration::seconds(*interval_secs))
            }
        }
    }

    /// Fire instants inside `from..=to`, in order.
    ///
    /// One-shot alerts yield at most one instant; frequent alerts yield
    /// `anchor + k*interval` for `k >= 1`. A non-positive interval yields
    /// nothing.
    pub fn fire_times_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<NaiveDateTime> {
        match &self.schedule {
            AlertSchedule::Individual { fire_at } => {
                if *fire_at >= from && *fire_at <= to {
                    vec![*fire_at]
                } else {
                    Vec::new()
                }
            }
            AlertSchedule::Frequent {
                interval_secs,
                anchor,
            } => {
                if *interval_secs <= 0 {
                    return Vec::new();
                }
                let interval = Duration::seconds(*interval_secs);
                let mut fires = Vec::new();
                let mut next = *anchor + interval;
                while next <= to {
                    if next >= from {
                        fires.push(next);
                    }
                    next += interval;
                }
                fires
            }
        }
    }
}
