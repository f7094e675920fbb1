use chrono::NaiveTime;
use event_calendar::{loader, Calendar, Event, Month};
use proptest::prelude::*;

fn event(name: &str, month: Month, day: u8, hour: u32, minute: u32, duration: u32) -> Event {
    let start = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
    Event::new(name, month, day, start, duration).unwrap()
}

fn names(calendar: &Calendar, month: Month) -> Vec<&str> {
    calendar.events_in(month).iter().map(Event::name).collect()
}

#[test]
fn february_events_are_ordered_by_start() {
    let mut calendar = Calendar::new();
    calendar.add_event(event("A", Month::February, 3, 10, 0, 30));
    calendar.add_event(event("B", Month::February, 3, 9, 0, 60));
    calendar.add_event(event("C", Month::March, 1, 8, 0, 15));

    assert_eq!(names(&calendar, Month::February), ["B", "A"]);
    assert_eq!(calendar.total_events_in_month(Month::February), 2);
    assert_eq!(calendar.total_events_in_month(Month::March), 1);
    assert_eq!(calendar.total_events_in_month(Month::April), 0);
}

#[test]
fn longest_event_across_months() {
    let calendar: Calendar = [
        event("half hour", Month::January, 1, 9, 0, 30),
        event("ninety", Month::January, 2, 11, 0, 90),
        event("three quarters", Month::June, 4, 14, 0, 45),
    ]
    .into_iter()
    .collect();

    assert_eq!(calendar.longest_event(), "ninety");
}

#[test]
fn cancel_events_only_touches_requested_months() {
    let mut calendar: Calendar = [
        event("feb wed", Month::February, 3, 9, 0, 30),
        event("mar wed", Month::March, 3, 9, 0, 30),
        event("mar mon", Month::March, 1, 10, 0, 30),
        event("apr wed", Month::April, 3, 9, 0, 30),
    ]
    .into_iter()
    .collect();

    let removed = calendar.cancel_events(&[Month::February, Month::March], 3);

    assert_eq!(removed, 2);
    assert_eq!(calendar.months().collect::<Vec<_>>(), [Month::March, Month::April]);
    assert_eq!(names(&calendar, Month::March), ["mar mon"]);
    assert_eq!(names(&calendar, Month::April), ["apr wed"]);
}

#[test]
fn render_is_stable_without_mutation() {
    let calendar: Calendar = [
        event("Review", Month::November, 4, 15, 0, 60),
        event("Planning", Month::May, 1, 9, 0, 120),
    ]
    .into_iter()
    .collect();

    assert_eq!(calendar.render(), calendar.render());
}

#[test]
fn bundled_sample_loads() {
    let mut calendar = Calendar::new();
    let added = loader::load_str(include_str!("../../data/events.txt"), &mut calendar).unwrap();

    assert_eq!(added, calendar.len());
    assert!(added > 0);
    assert!(!calendar.months_with_most_events().is_empty());
}

fn arb_event() -> impl Strategy<Value = Event> {
    (0..12usize, 1..=7u8, 0..24u32, 0..60u32, 0..240u32).prop_map(|(month, day, hour, minute, duration)| {
        event("generated", Month::ALL[month], day, hour, minute, duration)
    })
}

proptest! {
    #[test]
    fn every_month_stays_sorted(events in prop::collection::vec(arb_event(), 0..64)) {
        let mut calendar = Calendar::new();

        for event in events {
            calendar.add_event(event);

            for (_, stored) in calendar.iter() {
                prop_assert!(!stored.is_empty());
                for pair in stored.windows(2) {
                    prop_assert!(!pair[1].precedes(&pair[0]));
                }
            }
        }
    }

    #[test]
    fn counts_track_adds_and_cancellations(
        events in prop::collection::vec(arb_event(), 0..64),
        cancel_months in prop::collection::vec(0..12usize, 0..6),
        day in 1..=7u8,
    ) {
        let mut calendar: Calendar = events.iter().cloned().collect();
        let cancel_months = cancel_months.into_iter().map(|idx| Month::ALL[idx]).collect::<Vec<_>>();

        let removed = calendar.cancel_events(&cancel_months, day);

        let expected_removed = events
            .iter()
            .filter(|event| cancel_months.contains(&event.month()) && event.day_of_week() == day)
            .count();
        prop_assert_eq!(removed, expected_removed);

        for month in Month::ALL {
            let expected = events
                .iter()
                .filter(|event| event.month() == month)
                .filter(|event| !(cancel_months.contains(&month) && event.day_of_week() == day))
                .count();
            prop_assert_eq!(calendar.total_events_in_month(month), expected);
            prop_assert_eq!(calendar.months().any(|present| present == month), expected > 0);
        }
    }

    #[test]
    fn months_with_most_events_hold_the_maximum(events in prop::collection::vec(arb_event(), 0..64)) {
        let calendar: Calendar = events.into_iter().collect();
        let highest = Month::ALL
            .iter()
            .map(|month| calendar.total_events_in_month(*month))
            .max()
            .unwrap_or(0);

        let expected = calendar
            .months()
            .filter(|month| calendar.total_events_in_month(*month) == highest)
            .collect::<Vec<_>>();

        prop_assert_eq!(calendar.months_with_most_events().into_iter().collect::<Vec<_>>(), expected);
    }
}
