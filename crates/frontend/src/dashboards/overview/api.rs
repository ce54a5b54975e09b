use contracts::dashboard::DashboardStats;

use crate::shared::api::{get_json, ApiError};

/// Server-aggregated dashboard numbers and series.
pub async fn fetch_stats() -> Result<DashboardStats, ApiError> {
    get_json("/dashboard-stats/").await
}
