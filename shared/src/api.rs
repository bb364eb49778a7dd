use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::wire_time;

// ============================================================================
// Auth API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,

    #[validate(length(min = 5))]
    pub family_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub username: String,
    pub userrole: String,
    pub userfamily: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 20))]
    pub username: String,

    #[validate(length(min = 8))]
    pub password: String,

    #[validate(length(min = 5))]
    pub family_id: String,
}

/// Success is `{success: true}`; failures come back as `{msg}` only.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub msg: Option<String>,
}

// ============================================================================
// Event API Types
// ============================================================================

/// Body for `/new-event-entry` and `/update-event/:id`. An update is a full
/// replace of the stored document; the backend stamps the organiser from
/// `username` on create.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(rename = "event")]
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub date: NaiveDate,

    #[serde(with = "wire_time::option")]
    pub start_time: Option<NaiveTime>,

    #[serde(with = "wire_time::option")]
    pub end_time: Option<NaiveTime>,

    #[validate(length(min = 1, max = 300))]
    pub location: String,

    pub required_items: String,

    pub username: String,
    pub userrole: String,
    pub userfamily: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveEventResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyEventsRequest {
    pub family_id: String,
}

/// Sent with `/delete-event/:id`; the backend checks that `username` is the
/// event's organiser before deleting.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteEventRequest {
    pub username: String,
    pub userfamily: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteEventResponse {
    #[serde(rename = "event deleted")]
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_response_reads_spaced_field_name() {
        let response: DeleteEventResponse =
            serde_json::from_str(r#"{"event deleted": true}"#).expect("should deserialize");
        assert!(response.deleted);
    }

    #[test]
    fn test_register_failure_body_has_no_success_flag() {
        let response: RegisterResponse =
            serde_json::from_str(r#"{"msg": "username taken"}"#).expect("should deserialize");
        assert!(!response.success);
        assert_eq!(response.msg.as_deref(), Some("username taken"));
    }

    #[test]
    fn test_event_payload_serializes_wire_names() {
        let payload = EventPayload {
            title: "Swimming Lesson".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date"),
            start_time: NaiveTime::from_hms_opt(14, 0, 0),
            end_time: NaiveTime::from_hms_opt(15, 0, 0),
            location: "Sports Centre".to_string(),
            required_items: "Towel".to_string(),
            username: "alice".to_string(),
            userrole: "parent".to_string(),
            userfamily: "family_abc123".to_string(),
        };

        let json = serde_json::to_value(&payload).expect("should serialize");
        assert_eq!(json["event"], "Swimming Lesson");
        assert_eq!(json["date"], "2025-03-10");
        assert_eq!(json["startTime"], "14:00");
        assert_eq!(json["requiredItems"], "Towel");
        assert_eq!(json["userfamily"], "family_abc123");
    }

    #[test]
    fn test_request_validation_rejects_short_fields() {
        let request = RegisterRequest {
            username: "al".to_string(),
            password: "short".to_string(),
            family_id: "fam".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
