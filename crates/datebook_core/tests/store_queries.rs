use datebook_core::{EventDraft, EventStore, StoreError};

fn store_with(dates_and_titles: &[(&str, &str)]) -> EventStore {
    let mut store = EventStore::new();
    for (date, title) in dates_and_titles {
        store.add_event(date, title).unwrap();
    }
    store
}

#[test]
fn on_date_rejects_invalid_date() {
    let store = EventStore::new();
    assert_eq!(
        store.list_events_on_date("2024-13-01").unwrap_err(),
        StoreError::InvalidDate("2024-13-01".to_string())
    );
}

#[test]
fn on_date_returns_only_matching_events() {
    let store = store_with(&[
        ("2024-01-01", "New year"),
        ("2024-01-02", "Back to work"),
        ("2024-01-01", "Brunch"),
    ]);

    let events = store.list_events_on_date("2024-01-01").unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "New year");
    assert_eq!(events[1].title, "Brunch");
}

#[test]
fn on_date_with_no_matches_is_empty_not_an_error() {
    let store = store_with(&[("2024-01-01", "New year")]);
    assert!(store.list_events_on_date("2024-06-01").unwrap().is_empty());
}

#[test]
fn range_includes_both_endpoints() {
    let store = store_with(&[
        ("2024-01-01", "On start"),
        ("2024-01-15", "Inside"),
        ("2024-01-31", "On end"),
        ("2024-02-01", "After"),
        ("2023-12-31", "Before"),
    ]);

    let events = store
        .list_events_in_range("2024-01-01", "2024-01-31")
        .unwrap();
    let titles: Vec<&str> = events.iter().map(|event| event.title.as_str()).collect();
    assert_eq!(titles, ["On start", "Inside", "On end"]);
}

#[test]
fn range_with_equal_bounds_matches_one_day() {
    let store = store_with(&[("2024-01-15", "Inside"), ("2024-01-16", "Outside")]);

    let events = store
        .list_events_in_range("2024-01-15", "2024-01-15")
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Inside");
}

#[test]
fn range_rejects_invalid_bounds() {
    let store = EventStore::new();

    assert_eq!(
        store
            .list_events_in_range("2024-02-30", "2024-03-01")
            .unwrap_err(),
        StoreError::InvalidDate("2024-02-30".to_string())
    );
    assert_eq!(
        store
            .list_events_in_range("2024-02-01", "2024/03/01")
            .unwrap_err(),
        StoreError::InvalidDate("2024/03/01".to_string())
    );
}

#[test]
fn range_rejects_inverted_bounds() {
    let store = EventStore::new();

    assert_eq!(
        store
            .list_events_in_range("2024-02-01", "2024-01-01")
            .unwrap_err(),
        StoreError::InvertedRange {
            start: "2024-02-01".to_string(),
            end: "2024-01-01".to_string(),
        }
    );
}

#[test]
fn week_view_rejects_invalid_start() {
    let store = EventStore::new();
    assert_eq!(
        store.list_events_in_week("2024-1-01").unwrap_err(),
        StoreError::InvalidDate("2024-1-01".to_string())
    );
}

#[test]
fn week_view_covers_seven_consecutive_days() {
    let store = store_with(&[
        ("2024-01-01", "Day one"),
        ("2024-01-07", "Day seven"),
        ("2024-01-08", "Next week"),
    ]);

    let buckets = store.list_events_in_week("2024-01-01").unwrap();
    assert_eq!(buckets.len(), 7);

    let days: Vec<&str> = buckets.iter().map(|bucket| bucket.date.as_str()).collect();
    assert_eq!(
        days,
        [
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
            "2024-01-06",
            "2024-01-07",
        ]
    );

    assert_eq!(buckets[0].events.len(), 1);
    assert_eq!(buckets[0].events[0].title, "Day one");
    assert!(buckets[1].events.is_empty());
    assert_eq!(buckets[6].events[0].title, "Day seven");
    assert!(buckets.iter().all(|bucket| bucket
        .events
        .iter()
        .all(|event| event.title != "Next week")));
}

#[test]
fn week_view_spans_month_boundaries() {
    let store = store_with(&[("2024-03-02", "March event")]);

    let buckets = store.list_events_in_week("2024-02-27").unwrap();
    assert_eq!(buckets[2].date, "2024-02-29");
    assert_eq!(buckets[4].date, "2024-03-02");
    assert_eq!(buckets[4].events[0].title, "March event");
}

#[test]
fn week_view_sorts_each_day_by_case_insensitive_title() {
    let store = store_with(&[("2024-01-01", "beta"), ("2024-01-01", "Alpha")]);

    let buckets = store.list_events_in_week("2024-01-01").unwrap();
    let titles: Vec<&str> = buckets[0]
        .events
        .iter()
        .map(|event| event.title.as_str())
        .collect();
    assert_eq!(titles, ["Alpha", "beta"]);
}

#[test]
fn week_view_truncates_at_the_representable_calendar_end() {
    let store = EventStore::new();

    let buckets = store.list_events_in_week("9999-12-28").unwrap();
    let days: Vec<&str> = buckets.iter().map(|bucket| bucket.date.as_str()).collect();
    assert_eq!(days, ["9999-12-28", "9999-12-29", "9999-12-30", "9999-12-31"]);
}

#[test]
fn search_rejects_blank_keyword() {
    let store = EventStore::new();
    assert_eq!(
        store.search_events("   ").unwrap_err(),
        StoreError::EmptyKeyword
    );
}

#[test]
fn search_is_case_insensitive() {
    let store = store_with(&[("2024-01-01", "Dentist appointment")]);

    let hits = store.search_events("DENTIST").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dentist appointment");
}

#[test]
fn search_matches_note_but_not_location() {
    let mut store = EventStore::new();
    store
        .add_event_detailed(EventDraft {
            date: "2024-01-01".to_string(),
            title: "Groceries".to_string(),
            location: "Corner shop".to_string(),
            note: "buy milk".to_string(),
        })
        .unwrap();
    store
        .add_event_detailed(EventDraft {
            date: "2024-01-02".to_string(),
            title: "Errand".to_string(),
            location: "Milk bar".to_string(),
            note: "".to_string(),
        })
        .unwrap();

    let hits = store.search_events("milk").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Groceries");
}

#[test]
fn search_results_are_sorted_by_date() {
    let store = store_with(&[("2024-05-01", "sync call"), ("2024-01-01", "sync kickoff")]);

    let hits = store.search_events("sync").unwrap();
    assert_eq!(hits[0].date, "2024-01-01");
    assert_eq!(hits[1].date, "2024-05-01");
}
