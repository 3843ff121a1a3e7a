//! Core domain logic for Daybook, a single-user calendar.
//! This crate is the single source of truth for calendar invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::alert::{Alert, AlertId, AlertSchedule};
pub use model::event::{Event, EventId, EventStatus};
pub use model::memo::{Memo, MemoId};
pub use model::series::{Series, SeriesId};
pub use registry::{RegistryError, RegistryResult};
pub use search::{search_events, MatchField, SearchHit};
pub use service::calendar::{Calendar, CalendarError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
