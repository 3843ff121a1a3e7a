use chrono::{NaiveDate, NaiveDateTime};
use daybook_core::{search_events, Calendar, Event, MatchField};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

#[test]
fn unparsable_date_terms_do_not_suppress_other_strategies() {
    let mut cal = Calendar::new(at(1, 8));
    let tagged = cal.add_event(Event::new("a", at(2, 9), at(2, 10)));
    cal.change_event_tag(tagged, "not-a-date").unwrap();
    let named = cal.add_event(Event::new("not-a-date", at(3, 9), at(3, 10)));
    let noted = cal.add_event(Event::new("b", at(4, 9), at(4, 10)));
    cal.create_memo(&[noted], "not-a-date").unwrap();

    let hits = search_events(&cal, "not-a-date");
    let ids: Vec<_> = hits.iter().map(|hit| hit.event).collect();
    assert_eq!(ids, vec![tagged, noted, named]);
    assert_eq!(hits[0].matched, MatchField::Tag);
    assert_eq!(hits[1].matched, MatchField::MemoNote);
    assert_eq!(hits[2].matched, MatchField::Name);
}

#[test]
fn date_terms_match_events_covering_that_date() {
    let mut cal = Calendar::new(at(1, 8));
    let on_day = cal.add_event(Event::new("demo", at(20, 14), at(20, 15)));
    cal.add_event(Event::new("off_day", at(21, 14), at(21, 15)));

    let hits = search_events(&cal, "2024-11-20");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].event, on_day);
    assert_eq!(hits[0].matched, MatchField::Date);
}

#[test]
fn an_event_matching_several_strategies_is_reported_once() {
    let mut cal = Calendar::new(at(1, 8));
    let id = cal.add_event(Event::new("retro", at(5, 16), at(5, 17)));
    cal.change_event_tag(id, "retro").unwrap();
    cal.create_memo(&[id], "retro").unwrap();

    let hits = search_events(&cal, "retro");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched, MatchField::Tag);
}

#[test]
fn no_strategy_matching_yields_an_empty_result() {
    let mut cal = Calendar::new(at(1, 8));
    cal.add_event(Event::new("something", at(2, 9), at(2, 10)));
    assert!(search_events(&cal, "nothing matches this").is_empty());
}
