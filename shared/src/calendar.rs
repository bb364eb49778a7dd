//! Month-grid construction for the calendar view.
//!
//! The grid is an ordered run of cells: leading padding for the weekday
//! offset of day 1 (Sunday-first), then one cell per day of the month. The
//! calendar works on the full event list, not just upcoming events.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::EventRecord;

/// One rendered cell of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub enum MonthCell {
    /// Placeholder before day 1 so weekdays line up.
    Padding,
    Day(DayCell),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    /// Events dated on this cell, in input order.
    pub events: Vec<EventRecord>,
    pub is_today: bool,
    pub is_selected: bool,
}

/// A displayed month, anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
}

impl MonthGrid {
    /// Grid for the given year and 1-based month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Grid for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Previous month, rolling the year at January.
    pub fn prev(&self) -> Self {
        Self {
            first: self.first - Months::new(1),
        }
    }

    /// Next month, rolling the year at December.
    pub fn next(&self) -> Self {
        Self {
            first: self.first + Months::new(1),
        }
    }

    /// Number of days in the month: day before the first of the next month.
    pub fn days_in_month(&self) -> u32 {
        self.next().first.pred_opt().map_or(31, |last| last.day())
    }

    /// Weekday offset of day 1, with Sunday as 0.
    pub fn leading_offset(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), day)
    }

    /// Build the ordered cell sequence for rendering.
    pub fn build_cells(
        &self,
        events: &[EventRecord],
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> Vec<MonthCell> {
        let days = self.days_in_month();
        let mut cells = Vec::with_capacity((self.leading_offset() + days) as usize);

        for _ in 0..self.leading_offset() {
            cells.push(MonthCell::Padding);
        }

        for day in 1..=days {
            let Some(date) = self.date_of(day) else {
                continue;
            };
            let day_events: Vec<EventRecord> = events
                .iter()
                .filter(|event| event.date == date)
                .cloned()
                .collect();
            cells.push(MonthCell::Day(DayCell {
                date,
                day,
                events: day_events,
                is_today: date == today,
                is_selected: selected == Some(date),
            }));
        }

        cells
    }
}

/// Events on one calendar day, ordered by ascending start time.
pub fn events_on(date: NaiveDate, events: &[EventRecord]) -> Vec<EventRecord> {
    let mut on_day: Vec<EventRecord> = events
        .iter()
        .filter(|event| event.date == date)
        .cloned()
        .collect();
    on_day.sort_by_key(|event| event.start_time);
    on_day
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn event_on(id: &str, date: NaiveDate, start: Option<&str>) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: format!("Event {id}"),
            date,
            start_time: start.map(|s| {
                NaiveTime::parse_from_str(s, "%H:%M").expect("valid start time")
            }),
            end_time: None,
            location: "Somewhere".to_string(),
            required_items: String::new(),
            organiser: "alice".to_string(),
            family_id: "family_abc123".to_string(),
        }
    }

    fn day_cells(cells: &[MonthCell]) -> Vec<&DayCell> {
        cells
            .iter()
            .filter_map(|cell| match cell {
                MonthCell::Day(day) => Some(day),
                MonthCell::Padding => None,
            })
            .collect()
    }

    #[test]
    fn test_leap_year_february_has_29_day_cells() {
        let grid = MonthGrid::new(2024, 2).expect("valid month");
        assert_eq!(grid.days_in_month(), 29);

        let cells = grid.build_cells(&[], NaiveDate::MIN, None);
        assert_eq!(day_cells(&cells).len(), 29);
    }

    #[test]
    fn test_non_leap_february_has_28_day_cells() {
        let grid = MonthGrid::new(2025, 2).expect("valid month");
        assert_eq!(grid.days_in_month(), 28);
    }

    #[test]
    fn test_month_starting_wednesday_gets_three_padding_cells() {
        // January 2025 starts on a Wednesday.
        let grid = MonthGrid::new(2025, 1).expect("valid month");
        let cells = grid.build_cells(&[], NaiveDate::MIN, None);

        assert_eq!(grid.leading_offset(), 3);
        assert!(matches!(cells[0], MonthCell::Padding));
        assert!(matches!(cells[2], MonthCell::Padding));
        match &cells[3] {
            MonthCell::Day(day) => assert_eq!(day.day, 1),
            MonthCell::Padding => panic!("expected day 1 after the padding run"),
        }
    }

    #[test]
    fn test_navigation_rolls_the_year() {
        let december = MonthGrid::new(2024, 12).expect("valid month");
        let january = december.next();
        assert_eq!((january.year(), january.month()), (2025, 1));

        let back = january.prev();
        assert_eq!((back.year(), back.month()), (2024, 12));
    }

    #[test]
    fn test_events_bucket_onto_their_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
        let other = NaiveDate::from_ymd_opt(2025, 3, 11).expect("valid date");
        let events = vec![
            event_on("a", date, Some("10:00")),
            event_on("b", other, Some("09:00")),
            event_on("c", date, Some("08:00")),
        ];

        let grid = MonthGrid::new(2025, 3).expect("valid month");
        let cells = grid.build_cells(&events, NaiveDate::MIN, None);
        let days = day_cells(&cells);

        assert_eq!(days[9].events.len(), 2);
        assert_eq!(days[10].events.len(), 1);
        assert!(days[11].events.is_empty());
    }

    #[test]
    fn test_today_and_selected_flags() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
        let selected = NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date");

        let grid = MonthGrid::containing(today);
        let cells = grid.build_cells(&[], today, Some(selected));
        let days = day_cells(&cells);

        assert!(days[9].is_today);
        assert!(!days[9].is_selected);
        assert!(days[14].is_selected);
        assert!(!days[14].is_today);
    }

    #[test]
    fn test_events_on_sorts_by_start_time() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
        let events = vec![
            event_on("late", date, Some("16:30")),
            event_on("untimed", date, None),
            event_on("early", date, Some("07:15")),
        ];

        let on_day = events_on(date, &events);
        let ids: Vec<&str> = on_day.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["untimed", "early", "late"]);
    }
}
