use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::booking::BookingStatus;

/// One occupied slot from `GET /bookings/dates/`.
///
/// The backend emits naive ISO datetimes (no offset). `status` is optional so
/// older deployments that only send title/start/end still parse; events
/// without it are treated as booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

impl CalendarEvent {
    pub fn start_datetime(&self) -> Option<NaiveDateTime> {
        parse_event_datetime(&self.start)
    }

    pub fn end_datetime(&self) -> Option<NaiveDateTime> {
        parse_event_datetime(&self.end)
    }

    /// Status used for calendar coloring; absent means confirmed-busy.
    pub fn effective_status(&self) -> BookingStatus {
        self.status.unwrap_or(BookingStatus::Approved)
    }
}

/// Parse the datetime formats the backend is known to emit: naive ISO with or
/// without fractional seconds, or full RFC 3339.
pub fn parse_event_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_naive_iso() {
        let dt = parse_event_datetime("2026-01-10T18:30:00").unwrap();
        assert_eq!(dt.to_string(), "2026-01-10 18:30:00");
    }

    #[test]
    fn parses_fractional_and_rfc3339() {
        assert!(parse_event_datetime("2026-01-10T18:30:00.123456").is_some());
        assert!(parse_event_datetime("2026-01-10T18:30:00+05:30").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_event_datetime("not a date").is_none());
    }

    #[test]
    fn missing_status_means_booked() {
        let json = r#"{"title": "Wedding", "start": "2026-01-10T00:00:00", "end": "2026-01-11T23:59:59"}"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.effective_status(), BookingStatus::Approved);
    }
}
