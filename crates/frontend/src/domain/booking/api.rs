use contracts::calendar::CalendarEvent;
use contracts::domain::booking::{
    Booking, BookingDraft, BookingStatus, StatusUpdate, StatusUpdateResponse,
};

use crate::shared::api::{get_json, get_text, patch_json, post_json, ApiError};

pub async fn fetch_bookings() -> Result<Vec<Booking>, ApiError> {
    get_json("/bookings/").await
}

pub async fn fetch_booking(id: i64) -> Result<Booking, ApiError> {
    get_json(&format!("/bookings/{id}/")).await
}

/// Submit the public booking form. Returns the created booking (with its
/// server-assigned id and pending status).
pub async fn create_booking(draft: &BookingDraft) -> Result<Booking, ApiError> {
    post_json("/bookings/", draft).await
}

/// Approve or reject a booking. The backend answers with a confirmation
/// envelope around the updated record.
pub async fn update_status(id: i64, status: BookingStatus) -> Result<Booking, ApiError> {
    let resp: StatusUpdateResponse =
        patch_json(&format!("/bookings/{id}/status/"), &StatusUpdate { status }).await?;
    Ok(resp.booking)
}

/// Booked date ranges for the availability calendar.
pub async fn fetch_dates() -> Result<Vec<CalendarEvent>, ApiError> {
    get_json("/bookings/dates/").await
}

/// Server-rendered CSV of all bookings.
pub async fn export_csv() -> Result<String, ApiError> {
    get_text("/bookings/export/").await
}

/// URL of the server-rendered receipt for a booking.
pub fn receipt_url(id: i64) -> String {
    crate::shared::api::api_url(&format!("/bookings/{id}/receipt/"))
}
