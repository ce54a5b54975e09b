use std::collections::BTreeMap;

use serde::Deserialize;

/// Error body shapes the backend is known to produce.
///
/// Either a flat message (`{"error": "..."}` / `{"detail": "..."}`) or a
/// field-keyed validation map where each field maps to one message or a list
/// of messages. Anything unparseable is carried as raw text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Flat(FlatError),
    Fields(BTreeMap<String, OneOrMany>),
    Raw(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlatError {
    #[serde(alias = "detail")]
    pub error: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn joined(&self) -> String {
        match self {
            OneOrMany::One(s) => s.clone(),
            OneOrMany::Many(v) => v.join(", "),
        }
    }
}

impl ErrorPayload {
    /// Best-effort parse of a response body; falls back to the raw text so a
    /// proxy error page still surfaces something readable.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<ErrorPayload>(body)
            .unwrap_or_else(|_| ErrorPayload::Raw(body.to_string()))
    }

    /// Single display string, for pages that show one error box.
    pub fn message(&self) -> String {
        match self {
            ErrorPayload::Flat(f) => f.error.clone(),
            ErrorPayload::Fields(map) => map
                .iter()
                .map(|(field, msgs)| format!("{}: {}", field, msgs.joined()))
                .collect::<Vec<_>>()
                .join("; "),
            ErrorPayload::Raw(s) => s.clone(),
        }
    }

    /// Per-field messages, for forms that render errors next to inputs.
    /// Flat errors land under the conventional `non_field_errors` key.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        match self {
            ErrorPayload::Fields(map) => {
                for (field, msgs) in map {
                    out.insert(field.clone(), msgs.joined());
                }
            }
            ErrorPayload::Flat(f) => {
                out.insert("non_field_errors".to_string(), f.error.clone());
            }
            ErrorPayload::Raw(s) => {
                out.insert("non_field_errors".to_string(), s.clone());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_error() {
        let payload = ErrorPayload::from_body(r#"{"error": "Booking not found"}"#);
        assert_eq!(payload.message(), "Booking not found");
    }

    #[test]
    fn parses_detail_alias() {
        let payload =
            ErrorPayload::from_body(r#"{"detail": "Authentication credentials were not provided."}"#);
        assert_eq!(
            payload.message(),
            "Authentication credentials were not provided."
        );
    }

    #[test]
    fn parses_field_map_with_lists() {
        let payload = ErrorPayload::from_body(
            r#"{"email": ["Enter a valid email address."], "phone": "This field is required."}"#,
        );
        let fields = payload.field_errors();
        assert_eq!(fields["email"], "Enter a valid email address.");
        assert_eq!(fields["phone"], "This field is required.");
    }

    #[test]
    fn falls_back_to_raw_text() {
        let payload = ErrorPayload::from_body("<html>502 Bad Gateway</html>");
        assert_eq!(payload.message(), "<html>502 Bad Gateway</html>");
        assert!(payload.field_errors().contains_key("non_field_errors"));
    }
}
