use serde::{Deserialize, Serialize};

/// Aggregate dashboard payload from `GET /dashboard-stats/`.
///
/// All values are server-computed; the frontend only binds them to cards and
/// charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_bookings: u64,
    pub unread_inquiries: u64,
    pub upcoming_events: u64,
    #[serde(default)]
    pub bookings_per_month: Vec<MonthlyCount>,
    #[serde(default)]
    pub event_type_distribution: Vec<EventTypeCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// Calendar month, 1-12.
    pub month: u32,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTypeCount {
    pub event_type: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_payload() {
        let json = r#"{
            "total_bookings": 42,
            "unread_inquiries": 5,
            "upcoming_events": 9,
            "bookings_per_month": [{"month": 1, "count": 4}, {"month": 6, "count": 11}],
            "event_type_distribution": [{"event_type": "Wedding", "count": 30}]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_bookings, 42);
        assert_eq!(stats.bookings_per_month.len(), 2);
        assert_eq!(stats.event_type_distribution[0].event_type, "Wedding");
    }

    #[test]
    fn missing_series_default_to_empty() {
        let json = r#"{"total_bookings": 0, "unread_inquiries": 0, "upcoming_events": 0}"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert!(stats.bookings_per_month.is_empty());
    }
}
