//! Wire Types
//!
//! Records returned by the Fullstack Events API. Every endpoint wraps its
//! payload as `{ "data": ... }`; the field names on RSVP records are
//! camelCase because the upstream service is JavaScript.

use serde::{Deserialize, Serialize};

/// Standard response wrapper used by every endpoint
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A schedulable happening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// ISO-ish timestamp, kept verbatim; formatting happens at render time
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
}

/// A person record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A join record asserting a guest's attendance intent for an event
///
/// The API returns additional bookkeeping fields; only the two foreign
/// keys matter here, the rest are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub event_id: i64,
    pub guest_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_event_envelope() {
        let body = r#"{
            "data": [
                {
                    "id": 1,
                    "name": "Launch",
                    "description": "Kickoff party",
                    "date": "2025-07-04T19:30:00.000Z",
                    "location": "Pier 39"
                }
            ]
        }"#;

        let envelope: Envelope<Vec<Event>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].name, "Launch");
        assert_eq!(envelope.data[0].location, "Pier 39");
    }

    #[test]
    fn test_decode_rsvp_ignores_extra_fields() {
        let body = r#"{
            "data": [
                {
                    "id": 42,
                    "eventId": 1,
                    "guestId": 10,
                    "createdAt": "2025-06-01T00:00:00.000Z"
                }
            ]
        }"#;

        let envelope: Envelope<Vec<Rsvp>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data[0].event_id, 1);
        assert_eq!(envelope.data[0].guest_id, 10);
    }

    #[test]
    fn test_decode_event_missing_optional_fields() {
        let body = r#"{ "data": { "id": 7, "name": "Standup" } }"#;

        let envelope: Envelope<Event> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.id, 7);
        assert_eq!(envelope.data.description, "");
        assert_eq!(envelope.data.date, "");
    }
}
