//! Task model definitions

use chrono::{NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used for the `date` field and for validation.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format used for `created_at` / `updated_at` in the document.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Task status
///
/// The JSON representation uses the display strings ("Pending",
/// "In Progress", "Completed") so the persisted document stays
/// human-readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    /// All statuses, in the order the form offers them.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// CSS class for the status badge in the task table.
    pub fn badge_class(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "status-pending",
            TaskStatus::InProgress => "status-progress",
            TaskStatus::Completed => "status-completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "In Progress" => Ok(TaskStatus::InProgress),
            "Completed" => Ok(TaskStatus::Completed),
            _ => Err(()),
        }
    }
}

/// A task in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: TaskStatus,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(
        default,
        with = "timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<NaiveDateTime>,
}

impl Task {
    /// Create a new task with the given id and trimmed text fields.
    pub fn new(
        id: u64,
        title: &str,
        description: &str,
        date: NaiveDate,
        status: TaskStatus,
    ) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            date,
            status,
            created_at: now(),
            updated_at: None,
        }
    }
}

/// Current time at second precision; the document stores no subseconds, so
/// dropping them up front keeps persisted round-trips exact.
pub(crate) fn now() -> NaiveDateTime {
    let t = Utc::now().naive_utc();
    t.with_nanosecond(0).unwrap_or(t)
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

mod timestamp_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_str(&t.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn new_task_trims_text_fields() {
        let task = Task::new(1, "  Buy milk  ", " urgent ", date("2024-06-01"), TaskStatus::Pending);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "urgent");
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn status_round_trips_through_display_strings() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
        }
        assert!("Done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn task_serializes_with_document_field_formats() {
        let mut task = Task::new(3, "Title", "Desc", date("2024-06-01"), TaskStatus::InProgress);
        task.created_at =
            NaiveDateTime::parse_from_str("2024-05-30 08:15:00", TIMESTAMP_FORMAT).unwrap();

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["status"], "In Progress");
        assert_eq!(json["created_at"], "2024-05-30 08:15:00");
        // Absent until the first update.
        assert!(json.get("updated_at").is_none());
    }

    #[test]
    fn task_deserializes_without_updated_at() {
        let json = r#"{
            "id": 1,
            "title": "Buy milk",
            "description": "",
            "date": "2024-06-01",
            "status": "Pending",
            "created_at": "2024-05-30 08:15:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.updated_at.is_none());
    }
}
