//! Multi-strategy event search.
//!
//! # Responsibility
//! - Resolve one user-supplied term against every matching strategy the
//!   calendar supports: tag, date, memo note, exact name.
//! - Report each event once, labeled with the strategy that matched first.
//!
//! # Invariants
//! - A term that fails to parse as a date only disables the date strategy;
//!   the remaining strategies still run.
//! - Blank terms yield no hits.
//! - Hit order is deterministic: strategy order first, then the calendar's
//!   event insertion order.

use crate::model::event::EventId;
use crate::service::calendar::Calendar;
use chrono::NaiveDate;

/// Date format accepted by the date strategy.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which strategy produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Tag,
    Date,
    MemoNote,
    Name,
}

/// Single search hit returned by [`search_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub event: EventId,
    pub matched: MatchField,
}

/// Searches the calendar's events with every strategy at once.
pub fn search_events(calendar: &Calendar, term: &str) -> Vec<SearchHit> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = Vec::new();

    let tagged: Vec<EventId> = calendar
        .find_events_by_tag(term)
        .iter()
        .map(|event| event.id)
        .collect();
    push_new(&mut hits, tagged, MatchField::Tag);

    // An unparsable term is not an error; it just means the date strategy
    // has nothing to contribute.
    if let Ok(date) = NaiveDate::parse_from_str(term, DATE_FORMAT) {
        let dated: Vec<EventId> = calendar
            .find_events_on_date(date)
            .iter()
            .map(|event| event.id)
            .collect();
        push_new(&mut hits, dated, MatchField::Date);
    }

    let noted: Vec<EventId> = calendar
        .find_events_by_memo_note(term)
        .iter()
        .map(|event| event.id)
        .collect();
    push_new(&mut hits, noted, MatchField::MemoNote);

    if let Some(named) = calendar.event_by_name(term) {
        push_new(&mut hits, vec![named.id], MatchField::Name);
    }

    hits
}

fn push_new(hits: &mut Vec<SearchHit>, ids: Vec<EventId>, matched: MatchField) {
    for event in ids {
        if !hits.iter().any(|hit| hit.event == event) {
            hits.push(SearchHit { event, matched });
        }
    }
}
