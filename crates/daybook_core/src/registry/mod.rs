//! Registry layer: arena ownership for every entity kind.
//!
//! # Responsibility
//! - Own one arena per entity kind, keyed by stable ids.
//! - Keep deterministic insertion-order iteration next to the arenas.
//!
//! # Invariants
//! - Registries never reach into each other; cross-registry consistency is
//!   the calendar facade's job.
//! - Removal from an arena also removes the id from the order index.

use crate::model::alert::AlertId;
use crate::model::event::EventId;
use crate::model::memo::MemoId;
use crate::model::series::SeriesId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod alert_registry;
pub mod event_store;
pub mod memo_registry;
pub mod series_registry;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Semantic not-found errors raised by the arena registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    EventNotFound(EventId),
    MemoNotFound(MemoId),
    SeriesNotFound(SeriesId),
    AlertNotFound(AlertId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::MemoNotFound(id) => write!(f, "memo not found: {id}"),
            Self::SeriesNotFound(id) => write!(f, "series not found: {id}"),
            Self::AlertNotFound(id) => write!(f, "alert not found: {id}"),
        }
    }
}

impl Error for RegistryError {}
