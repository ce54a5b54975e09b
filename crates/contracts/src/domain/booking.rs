use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Booking lifecycle status. Set to `pending` on creation by the backend,
/// mutated only by admin approve/reject actions. Legacy rows can carry other
/// strings (the stored column is free text), so anything unrecognized folds
/// into `Cancelled` instead of failing the whole list decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Cancelled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "status-badge status-badge--pending",
            BookingStatus::Approved => "status-badge status-badge--approved",
            BookingStatus::Rejected => "status-badge status-badge--rejected",
            BookingStatus::Cancelled => "status-badge status-badge--cancelled",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

/// Event categories offered on the public booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Wedding,
    Engagement,
    Reception,
    Birthday,
    Corporate,
    // The backend stores free text, so anything we do not recognize folds here.
    #[serde(other)]
    Other,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Wedding,
        EventType::Engagement,
        EventType::Reception,
        EventType::Birthday,
        EventType::Corporate,
        EventType::Other,
    ];

    /// Wire value as posted to and returned by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Engagement => "Engagement",
            EventType::Reception => "Reception",
            EventType::Birthday => "Birthday",
            EventType::Corporate => "Corporate",
            EventType::Other => "Other",
        }
    }

    /// Human label for select options.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Birthday => "Birthday Party",
            EventType::Corporate => "Corporate Event",
            other => other.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodPreference {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    Both,
}

impl FoodPreference {
    pub const ALL: [FoodPreference; 3] =
        [FoodPreference::Veg, FoodPreference::NonVeg, FoodPreference::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodPreference::Veg => "Veg",
            FoodPreference::NonVeg => "Non-Veg",
            FoodPreference::Both => "Both",
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

/// A customer's reservation request for the venue over a date/time range.
///
/// Owned by the backend; this UI never deletes bookings and only mutates
/// `status` through the dedicated PATCH endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub alternate_phone: Option<String>,
    pub email: String,
    pub event_type: EventType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub address_line: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub estimated_guests: Option<u32>,
    #[serde(default)]
    pub food_preference: Option<FoodPreference>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `PATCH /bookings/:id/status/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

/// Response of `PATCH /bookings/:id/status/`: the backend wraps the updated
/// booking in a confirmation envelope rather than returning it bare.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateResponse {
    pub message: String,
    pub booking: Booking,
}

// ============================================================================
// Public form draft
// ============================================================================

/// Field errors keyed by form field name, mirroring the backend validation
/// error shape so both render through the same path.
pub type FieldErrors = BTreeMap<String, String>;

/// Raw state of the public booking form. Everything is collected as text and
/// posted as-is; `validate` only enforces required-field presence and
/// date/time ordering. The backend remains authoritative.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alternate_phone: String,
    pub email: String,
    pub event_type: String,
    pub from_date: String,
    pub to_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address_line: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pincode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub estimated_guests: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub food_preference: String,
}

impl BookingDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name".into(), "Full name is required.".into());
        }
        if self.phone.trim().is_empty() {
            errors.insert("phone".into(), "Phone number is required.".into());
        }
        if self.email.trim().is_empty() {
            errors.insert("email".into(), "Email address is required.".into());
        } else if !self.email.contains('@') {
            errors.insert("email".into(), "Enter a valid email address.".into());
        }
        if self.event_type.trim().is_empty() {
            errors.insert("event_type".into(), "Select an event type.".into());
        }

        let from = parse_required_date(&self.from_date, "from_date", &mut errors);
        let to = parse_required_date(&self.to_date, "to_date", &mut errors);

        if let (Some(from), Some(to)) = (from, to) {
            if to < from {
                errors.insert(
                    "to_date".into(),
                    "End date cannot be earlier than start date.".into(),
                );
            } else if from == to {
                // Same-day bookings need a sensible time window when both
                // times are given; this mirrors the backend rule.
                let start = parse_time(&self.start_time);
                let end = parse_time(&self.end_time);
                if let (Some(start), Some(end)) = (start, end) {
                    if end <= start {
                        errors.insert(
                            "end_time".into(),
                            "End time must be after start time.".into(),
                        );
                    }
                }
            }
        }

        if !self.estimated_guests.trim().is_empty()
            && self.estimated_guests.trim().parse::<u32>().is_err()
        {
            errors.insert(
                "estimated_guests".into(),
                "Estimated guests must be a whole number.".into(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn parse_required_date(value: &str, field: &str, errors: &mut FieldErrors) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        errors.insert(field.into(), "This date is required.".into());
        return None;
    }
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            errors.insert(field.into(), "Enter a valid date.".into());
            None
        }
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            name: "Anitha R".into(),
            phone: "9843100000".into(),
            email: "anitha@example.com".into(),
            event_type: "Wedding".into(),
            from_date: "2026-01-10".into(),
            to_date: "2026-01-11".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let errors = BookingDraft::default().validate().unwrap_err();
        for field in ["name", "phone", "email", "event_type", "from_date", "to_date"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn end_date_before_start_date_is_rejected() {
        let mut draft = valid_draft();
        draft.from_date = "2026-01-11".into();
        draft.to_date = "2026-01-10".into();
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains_key("to_date"));
    }

    #[test]
    fn same_day_requires_end_time_after_start_time() {
        let mut draft = valid_draft();
        draft.to_date = draft.from_date.clone();
        draft.start_time = "18:00".into();
        draft.end_time = "17:00".into();
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains_key("end_time"));

        draft.end_time = "22:00".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn empty_optional_fields_are_not_serialized() {
        let json = serde_json::to_value(valid_draft()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("alternate_phone"));
        assert!(!obj.contains_key("start_time"));
        assert_eq!(obj["event_type"], "Wedding");
    }

    #[test]
    fn unknown_event_type_folds_into_other() {
        let json = r#"{
            "id": 7,
            "name": "K. Mani",
            "phone": "9000000000",
            "email": "mani@example.com",
            "event_type": "House Warming",
            "from_date": "2026-02-01",
            "to_date": "2026-02-01",
            "status": "pending"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.event_type, EventType::Other);
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn status_round_trips_lowercase() {
        let patch = StatusUpdate { status: BookingStatus::Approved };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"status":"approved"}"#
        );
    }

    #[test]
    fn legacy_status_strings_fold_into_cancelled() {
        // A single legacy row must not blank the whole bookings list.
        let json = r#"[
            {
                "id": 1,
                "name": "Anitha R",
                "phone": "9843100000",
                "email": "anitha@example.com",
                "event_type": "Wedding",
                "from_date": "2026-01-10",
                "to_date": "2026-01-11",
                "status": "cancelled"
            },
            {
                "id": 2,
                "name": "K. Mani",
                "phone": "9000000000",
                "email": "mani@example.com",
                "event_type": "Reception",
                "from_date": "2026-02-01",
                "to_date": "2026-02-01",
                "status": "approved"
            }
        ]"#;
        let bookings: Vec<Booking> = serde_json::from_str(json).unwrap();
        assert_eq!(bookings[0].status, BookingStatus::Cancelled);
        assert_eq!(bookings[1].status, BookingStatus::Approved);
    }

    #[test]
    fn status_patch_response_unwraps_the_booking() {
        let json = r#"{
            "message": "Status updated to approved.",
            "booking": {
                "id": 12,
                "name": "Anitha R",
                "phone": "9843100000",
                "email": "anitha@example.com",
                "event_type": "Wedding",
                "from_date": "2026-01-10",
                "to_date": "2026-01-11",
                "status": "approved"
            }
        }"#;
        let resp: StatusUpdateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.booking.id, 12);
        assert_eq!(resp.booking.status, BookingStatus::Approved);
        // The envelope is not a bare booking; decoding it as one must fail.
        assert!(serde_json::from_str::<Booking>(json).is_err());
    }
}
