use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One family event, in the shape the backend document store returns it.
///
/// Dates and times are real chrono values; the backend speaks `YYYY-MM-DD`
/// and `HH:MM` strings, which the serde layer converts at the boundary so
/// ordering never depends on string formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Backend-assigned identifier, immutable after creation.
    #[serde(rename = "_id")]
    pub id: String,

    /// Event title. The wire field is named `event`.
    #[serde(rename = "event")]
    pub title: String,

    pub date: NaiveDate,

    #[serde(default, with = "wire_time::option")]
    pub start_time: Option<NaiveTime>,

    #[serde(default, with = "wire_time::option")]
    pub end_time: Option<NaiveTime>,

    /// Free text, shown on the card and used as the geocoding query.
    pub location: String,

    #[serde(default)]
    pub required_items: String,

    /// Username of the creator; gates the edit/delete controls in the UI.
    /// The backend re-checks ownership on every mutation.
    pub organiser: String,

    pub family_id: String,
}

/// `HH:MM` wire format used by the backend for event times.
pub mod wire_time {
    pub const FORMAT: &str = "%H:%M";

    /// For `Option<NaiveTime>` fields. An absent key or empty string is
    /// `None`; `None` serializes back to the empty string the forms submit.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

        use super::FORMAT;

        pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
                None => serializer.serialize_str(""),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = Option::<String>::deserialize(deserializer)?;
            match raw.as_deref() {
                None | Some("") => Ok(None),
                Some(text) => NaiveTime::parse_from_str(text, FORMAT)
                    .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
                    .map(Some)
                    .map_err(D::Error::custom),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_deserialize_backend_document() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "event": "Swimming Lesson",
            "date": "2025-03-10",
            "startTime": "14:00",
            "endTime": "15:00",
            "location": "Sports Centre",
            "requiredItems": "Swimming costume, towel",
            "organiser": "alice",
            "familyId": "family_abc123"
        }"#;

        let record: EventRecord = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(record.id, "65f1c0ffee");
        assert_eq!(record.title, "Swimming Lesson");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date"));
        assert_eq!(
            record.start_time,
            NaiveTime::from_hms_opt(14, 0, 0)
        );
        assert_eq!(record.end_time, NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(record.organiser, "alice");
    }

    #[test]
    fn test_empty_and_missing_times_are_none() {
        let json = r#"{
            "_id": "1",
            "event": "All day fair",
            "date": "2025-06-01",
            "endTime": "",
            "location": "Village green",
            "organiser": "bob",
            "familyId": "family_abc123"
        }"#;

        let record: EventRecord = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(record.start_time, None);
        assert_eq!(record.end_time, None);
        assert_eq!(record.required_items, "");
    }

    #[test]
    fn test_times_serialize_in_wire_format() {
        let record = EventRecord {
            id: "1".to_string(),
            title: "Dentist".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date"),
            start_time: NaiveTime::from_hms_opt(9, 5, 0),
            end_time: None,
            location: "High Street".to_string(),
            required_items: String::new(),
            organiser: "alice".to_string(),
            family_id: "family_abc123".to_string(),
        };

        let json = serde_json::to_value(&record).expect("should serialize");
        assert_eq!(json["startTime"], "09:05");
        assert_eq!(json["endTime"], "");
        assert_eq!(json["date"], "2025-03-10");
        assert_eq!(json["event"], "Dentist");
    }
}
