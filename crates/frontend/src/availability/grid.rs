//! Pure month-grid math for the availability calendar.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use contracts::calendar::CalendarEvent;
use contracts::domain::booking::BookingStatus;

/// One cell of the 6x7 month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days that pad the grid.
    pub in_month: bool,
    pub status: Option<DayStatus>,
    /// Event titles overlapping this day, for the cell tooltip.
    pub titles: Vec<String>,
}

/// Occupancy of one calendar day, derived from the events overlapping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Booked,
    Pending,
}

impl DayStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            DayStatus::Booked => "calendar-day--booked",
            DayStatus::Pending => "calendar-day--pending",
        }
    }
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

pub fn prev_month(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    month_start(start - Duration::days(1))
}

pub fn next_month(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    // Day 1 plus 32 days always lands in the next month.
    month_start(start + Duration::days(32))
}

/// The 42 dates shown for a month: a Sunday-started 6x7 grid padded with the
/// surrounding months.
pub fn month_grid_dates(month: NaiveDate) -> Vec<NaiveDate> {
    let start = month_start(month);
    let lead = start.weekday().num_days_from_sunday() as i64;
    let first_cell = start - Duration::days(lead);
    (0..42).map(|i| first_cell + Duration::days(i)).collect()
}

/// Resolve the day's occupancy from the events overlapping it. A confirmed
/// booking wins over a pending one; rejected and cancelled bookings never
/// block a date.
pub fn day_status(date: NaiveDate, events: &[CalendarEvent]) -> Option<DayStatus> {
    let mut status = None;
    for event in events {
        if !event_covers(event, date) {
            continue;
        }
        match event.effective_status() {
            BookingStatus::Approved => return Some(DayStatus::Booked),
            BookingStatus::Pending => status = Some(DayStatus::Pending),
            BookingStatus::Rejected | BookingStatus::Cancelled => {}
        }
    }
    status
}

/// Titles of the blocking events overlapping the day.
pub fn day_titles(date: NaiveDate, events: &[CalendarEvent]) -> Vec<String> {
    events
        .iter()
        .filter(|e| {
            event_covers(e, date)
                && matches!(
                    e.effective_status(),
                    BookingStatus::Approved | BookingStatus::Pending
                )
        })
        .map(|e| e.title.clone())
        .collect()
}

fn event_covers(event: &CalendarEvent, date: NaiveDate) -> bool {
    match (event.start_datetime(), event.end_datetime()) {
        (Some(start), Some(end)) => start.date() <= date && date <= end.date(),
        _ => false,
    }
}

/// Build the full cell list for the month view.
pub fn month_cells(month: NaiveDate, events: &[CalendarEvent]) -> Vec<DayCell> {
    let current = month_start(month);
    month_grid_dates(month)
        .into_iter()
        .map(|date| DayCell {
            date,
            in_month: date.year() == current.year() && date.month() == current.month(),
            status: day_status(date, events),
            titles: day_titles(date, events),
        })
        .collect()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: &str, end: &str, status: Option<BookingStatus>) -> CalendarEvent {
        CalendarEvent {
            title: "Wedding - Arjun".to_string(),
            start: start.to_string(),
            end: end.to_string(),
            status,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_is_42_cells_starting_on_sunday() {
        // November 2026 starts on a Sunday.
        let dates = month_grid_dates(date(2026, 11, 15));
        assert_eq!(dates.len(), 42);
        assert_eq!(dates[0], date(2026, 11, 1));
        assert_eq!(dates[41], date(2026, 12, 12));

        // December 2026 starts on a Tuesday, so two leading November days.
        let dates = month_grid_dates(date(2026, 12, 1));
        assert_eq!(dates[0], date(2026, 11, 29));
        assert_eq!(dates[2], date(2026, 12, 1));
    }

    #[test]
    fn month_navigation_wraps_across_years() {
        assert_eq!(prev_month(date(2026, 1, 20)), date(2025, 12, 1));
        assert_eq!(next_month(date(2026, 12, 5)), date(2027, 1, 1));
    }

    #[test]
    fn approved_wins_over_pending() {
        let events = vec![
            event(
                "2026-01-10T00:00:00",
                "2026-01-12T23:59:59",
                Some(BookingStatus::Pending),
            ),
            event(
                "2026-01-11T00:00:00",
                "2026-01-11T23:59:59",
                Some(BookingStatus::Approved),
            ),
        ];
        assert_eq!(day_status(date(2026, 1, 10), &events), Some(DayStatus::Pending));
        assert_eq!(day_status(date(2026, 1, 11), &events), Some(DayStatus::Booked));
        assert_eq!(day_status(date(2026, 1, 13), &events), None);
    }

    #[test]
    fn rejected_and_cancelled_bookings_do_not_block_dates() {
        for status in [BookingStatus::Rejected, BookingStatus::Cancelled] {
            let events = vec![event(
                "2026-01-10T00:00:00",
                "2026-01-10T23:59:59",
                Some(status),
            )];
            assert_eq!(day_status(date(2026, 1, 10), &events), None);
            assert!(day_titles(date(2026, 1, 10), &events).is_empty());
        }
    }

    #[test]
    fn events_without_status_count_as_booked() {
        let events = vec![event("2026-01-10T18:30:00", "2026-01-11T02:00:00", None)];
        assert_eq!(day_status(date(2026, 1, 10), &events), Some(DayStatus::Booked));
        assert_eq!(day_status(date(2026, 1, 11), &events), Some(DayStatus::Booked));
    }

    #[test]
    fn padding_cells_are_flagged() {
        let cells = month_cells(date(2026, 12, 1), &[]);
        assert!(!cells[0].in_month);
        assert!(cells[2].in_month);
        assert_eq!(cells.iter().filter(|c| c.in_month).count(), 31);
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(date(2026, 11, 1))); // Sunday
        assert!(is_weekend(date(2026, 11, 7))); // Saturday
        assert!(!is_weekend(date(2026, 11, 4)));
    }
}
