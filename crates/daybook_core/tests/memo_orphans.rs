use chrono::{NaiveDate, NaiveDateTime};
use daybook_core::{Calendar, CalendarError, Event};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

#[test]
fn memo_survives_until_its_last_referencing_event_is_deleted() {
    let mut cal = Calendar::new(at(1, 8));
    let a = cal.add_event(Event::new("a", at(2, 9), at(2, 10)));
    let b = cal.add_event(Event::new("b", at(3, 9), at(3, 10)));
    let c = cal.add_event(Event::new("c", at(4, 9), at(4, 10)));
    let memo = cal.create_memo(&[a, b, c], "quarterly goals").unwrap();

    cal.delete_event(a).unwrap();
    assert!(cal.memo(memo).is_some());
    cal.delete_event(b).unwrap();
    assert!(cal.memo(memo).is_some());
    assert_eq!(cal.memo(memo).unwrap().events, vec![c]);

    cal.delete_event(c).unwrap();
    assert!(cal.memo(memo).is_none());
    assert!(!cal.has_memos());
}

#[test]
fn create_memo_attaches_both_sides_and_dedupes_event_ids() {
    let mut cal = Calendar::new(at(1, 8));
    let a = cal.add_event(Event::new("a", at(2, 9), at(2, 10)));
    let memo = cal.create_memo(&[a, a], "double-listed").unwrap();

    assert_eq!(cal.memo(memo).unwrap().events, vec![a]);
    assert_eq!(cal.event(a).unwrap().memos, vec![memo]);
}

#[test]
fn event_less_memo_is_orphaned_on_arrival_and_dropped() {
    let mut cal = Calendar::new(at(1, 8));
    let memo = cal.create_memo(&[], "floating note").unwrap();

    assert!(cal.memo(memo).is_none());
    assert!(!cal.has_memos());
    assert!(cal.find_events_with_memo(memo).is_empty());
}

#[test]
fn create_memo_against_unknown_event_is_an_error() {
    let mut cal = Calendar::new(at(1, 8));
    let ghost = uuid::Uuid::new_v4();
    assert_eq!(
        cal.create_memo(&[ghost], "nope"),
        Err(CalendarError::EventNotFound(ghost))
    );
    assert!(!cal.has_memos());
}

#[test]
fn two_events_share_one_memo_instance() {
    let mut cal = Calendar::new(at(1, 8));
    let a = cal.add_event(Event::new("a", at(2, 9), at(2, 10)));
    let b = cal.add_event(Event::new("b", at(3, 9), at(3, 10)));
    let memo = cal.create_memo(&[a, b], "same note").unwrap();

    // Same id on both sides means the same memo, not two copies.
    assert_eq!(cal.event(a).unwrap().memos, cal.event(b).unwrap().memos);
    let found = cal.find_events_with_memo(memo);
    assert_eq!(found.len(), 2);
}

#[test]
fn find_events_by_memo_note_reports_each_event_once() {
    let mut cal = Calendar::new(at(1, 8));
    let a = cal.add_event(Event::new("a", at(2, 9), at(2, 10)));
    let b = cal.add_event(Event::new("b", at(3, 9), at(3, 10)));
    // Two distinct memos with the same note text, both on event a.
    cal.create_memo(&[a, b], "agenda").unwrap();
    cal.create_memo(&[a], "agenda").unwrap();

    let found = cal.find_events_by_memo_note("agenda");
    let ids: Vec<_> = found.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![a, b]);

    assert!(cal.find_events_by_memo_note("missing").is_empty());
}
