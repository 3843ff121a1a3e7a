use chrono::{Duration, NaiveDate, NaiveDateTime};
use daybook_core::{Calendar, Event};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

#[test]
fn recurring_series_generates_exactly_count_events_on_the_grid() {
    let mut cal = Calendar::new(at(1, 8));
    let first = at(10, 9);

    cal.add_recurring_series("standup", Duration::hours(1), Duration::days(1), 3, first);

    let members = cal.events_by_series("standup");
    assert_eq!(members.len(), 3);
    for (i, event) in members.iter().enumerate() {
        assert_eq!(event.start, first + Duration::days(i as i64));
        assert_eq!(event.end, event.start + Duration::hours(1));
        assert_eq!(event.name, "standup");
    }
    // Generated events are owned by the calendar's collection.
    assert_eq!(cal.events().count(), 3);
}

#[test]
fn explicit_series_groups_existing_events_without_creating_new_ones() {
    let mut cal = Calendar::new(at(1, 8));
    let a = cal.add_event(Event::new("kickoff", at(3, 10), at(3, 11)));
    let b = cal.add_event(Event::new("retro", at(7, 10), at(7, 11)));

    cal.add_series("sprint 12", &[a, b]).unwrap();

    assert_eq!(cal.events().count(), 2);
    let members: Vec<_> = cal
        .events_by_series("sprint 12")
        .iter()
        .map(|event| event.id)
        .collect();
    assert_eq!(members, vec![a, b]);
}

#[test]
fn events_by_series_is_empty_for_unknown_names() {
    let cal = Calendar::new(at(1, 8));
    assert!(cal.events_by_series("nothing here").is_empty());
}

#[test]
fn an_event_can_belong_to_many_series_at_once() {
    let mut cal = Calendar::new(at(1, 8));
    let shared = cal.add_event(Event::new("sync", at(5, 9), at(5, 10)));
    let solo = cal.add_event(Event::new("focus", at(5, 11), at(5, 12)));

    cal.add_series("weekly", &[shared]).unwrap();
    cal.add_series("important", &[shared, solo]).unwrap();

    let names: Vec<_> = cal
        .associated_series(shared)
        .iter()
        .map(|series| series.name.clone())
        .collect();
    assert_eq!(names, vec!["weekly", "important"]);
    assert_eq!(cal.associated_series(solo).len(), 1);
}

#[test]
fn duplicate_name_lookup_prefers_the_first_registered_series() {
    let mut cal = Calendar::new(at(1, 8));
    let a = cal.add_event(Event::new("a", at(2, 9), at(2, 10)));
    let b = cal.add_event(Event::new("b", at(2, 11), at(2, 12)));
    cal.add_series("gym", &[a]).unwrap();
    cal.add_series("gym", &[b]).unwrap();

    let members: Vec<_> = cal
        .events_by_series("gym")
        .iter()
        .map(|event| event.id)
        .collect();
    assert_eq!(members, vec![a]);
}
