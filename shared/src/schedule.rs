//! Upcoming-event filtering and ordering for the dashboard list.

use chrono::{NaiveDateTime, Timelike};

use crate::models::EventRecord;

/// Keep only events that have not yet ended relative to `now`.
///
/// An event is upcoming when its date is after today, or it is dated today
/// and its end time is still ahead of the current wall-clock minute. Events
/// with no end time fall back to their start time; events carrying no times
/// at all count as upcoming for the whole day.
pub fn filter_upcoming(events: &[EventRecord], now: NaiveDateTime) -> Vec<EventRecord> {
    let today = now.date();
    // Event times carry minute resolution, so compare at the same grain.
    let current = now
        .time()
        .with_second(0)
        .and_then(|time| time.with_nanosecond(0))
        .unwrap_or_else(|| now.time());

    events
        .iter()
        .filter(|event| {
            if event.date != today {
                return event.date > today;
            }
            match (event.start_time, event.end_time) {
                (_, Some(end)) => end > current,
                (Some(start), None) => start > current,
                (None, None) => true,
            }
        })
        .cloned()
        .collect()
}

/// Stable ascending order by date, then start time.
///
/// Ties keep their relative input order; the input is not mutated. Events
/// without a start time sort ahead of timed events on the same day.
pub fn sort_by_date_then_time(events: &[EventRecord]) -> Vec<EventRecord> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| (event.date, event.start_time));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn event(id: &str, date: &str, start: Option<&str>, end: Option<&str>) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: format!("Event {id}"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date"),
            start_time: start.map(|s| {
                NaiveTime::parse_from_str(s, "%H:%M").expect("valid start time")
            }),
            end_time: end.map(|s| NaiveTime::parse_from_str(s, "%H:%M").expect("valid end time")),
            location: "Somewhere".to_string(),
            required_items: String::new(),
            organiser: "alice".to_string(),
            family_id: "family_abc123".to_string(),
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        format!("{date}T{time}:00")
            .parse()
            .expect("valid datetime")
    }

    #[test]
    fn test_future_dates_are_always_retained() {
        let events = vec![event("a", "2025-03-11", None, None)];
        let kept = filter_upcoming(&events, at("2025-03-10", "23:59"));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_past_dates_are_excluded() {
        let events = vec![event("a", "2025-03-09", Some("23:00"), Some("23:30"))];
        assert!(filter_upcoming(&events, at("2025-03-10", "00:00")).is_empty());
    }

    #[test]
    fn test_today_cutoff_uses_end_time() {
        let events = vec![event("a", "2025-03-10", Some("08:00"), Some("09:00"))];

        assert!(filter_upcoming(&events, at("2025-03-10", "10:00")).is_empty());
        assert_eq!(filter_upcoming(&events, at("2025-03-10", "08:00")).len(), 1);
    }

    #[test]
    fn test_today_without_end_time_falls_back_to_start() {
        let events = vec![event("a", "2025-03-10", Some("14:00"), None)];

        assert_eq!(filter_upcoming(&events, at("2025-03-10", "13:59")).len(), 1);
        assert!(filter_upcoming(&events, at("2025-03-10", "14:00")).is_empty());
    }

    #[test]
    fn test_today_without_any_times_is_kept_all_day() {
        let events = vec![event("a", "2025-03-10", None, None)];
        assert_eq!(filter_upcoming(&events, at("2025-03-10", "23:59")).len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_upcoming(&[], at("2025-03-10", "12:00")).is_empty());
    }

    #[test]
    fn test_sort_orders_by_date_then_start_time() {
        let events = vec![
            event("late", "2025-03-11", Some("09:00"), None),
            event("evening", "2025-03-10", Some("19:00"), None),
            event("morning", "2025-03-10", Some("08:00"), None),
            event("early", "2025-03-09", Some("20:00"), None),
        ];

        let sorted = sort_by_date_then_time(&events);
        let ids: Vec<&str> = sorted.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["early", "morning", "evening", "late"]);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let events = vec![
            event("first", "2025-03-10", Some("10:00"), None),
            event("second", "2025-03-10", Some("10:00"), None),
            event("third", "2025-03-10", Some("10:00"), None),
        ];

        let once = sort_by_date_then_time(&events);
        let ids: Vec<&str> = once.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);

        let twice = sort_by_date_then_time(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let events = vec![
            event("b", "2025-03-11", None, None),
            event("a", "2025-03-10", None, None),
        ];
        let _ = sort_by_date_then_time(&events);
        assert_eq!(events[0].id, "b");
    }

    #[test]
    fn test_fetch_filter_sort_round_trip_ordering() {
        let events = vec![
            event("middle", "2025-03-10", Some("14:00"), Some("15:00")),
            event("last", "2025-03-11", Some("09:00"), Some("10:00")),
            event("first", "2025-03-09", Some("09:00"), Some("10:00")),
        ];

        let upcoming = filter_upcoming(&events, at("2025-03-08", "12:00"));
        let sorted = sort_by_date_then_time(&upcoming);
        let ids: Vec<&str> = sorted.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first", "middle", "last"]);
    }
}
