//! Learning-topic record.

use super::{new_record_id, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tri-state progress of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TopicStatus {
    pub const ALL: [TopicStatus; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub id: RecordId,
    /// Serialized as `topic`.
    #[serde(rename = "topic")]
    pub name: String,
    pub status: TopicStatus,
    /// Day of the last status change (or creation). Serialized as `date`.
    #[serde(rename = "date")]
    pub last_updated: NaiveDate,
}

impl TopicRecord {
    /// New topic in `NotStarted` state. `name` must already be normalized.
    pub fn new(name: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            status: TopicStatus::NotStarted,
            last_updated: today,
        }
    }

    /// Status and date always move together.
    pub fn set_status(&mut self, status: TopicStatus, today: NaiveDate) {
        self.status = status;
        self.last_updated = today;
    }
}

#[cfg(test)]
mod tests {
    use super::{TopicRecord, TopicStatus};
    use chrono::NaiveDate;

    #[test]
    fn serializes_with_stored_field_names() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut topic = TopicRecord::new("Heaps", today);
        topic.id = "1714550400000".to_string();
        topic.set_status(TopicStatus::InProgress, today);

        let json = serde_json::to_value(&topic).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1714550400000",
                "topic": "Heaps",
                "status": "in-progress",
                "date": "2024-05-01"
            })
        );
    }
}
