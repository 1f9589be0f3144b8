//! Saved drawings and the canvas snapshot encoding.

use super::{new_record_id, RecordId};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// PNG data URL prefix of every snapshot produced by the canvas.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Full-bitmap capture of the drawing surface as a self-describing image
/// source (`data:image/png;base64,...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanvasSnapshot(String);

impl CanvasSnapshot {
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        Self(data_url.into())
    }

    pub fn as_data_url(&self) -> &str {
        &self.0
    }

    /// Base64 payload after the PNG data URL prefix, if present.
    pub fn png_base64(&self) -> Option<&str> {
        self.0.strip_prefix(PNG_DATA_URL_PREFIX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "dataUrl")]
    pub snapshot: CanvasSnapshot,
    /// Display-only save time. Stored galleries carry locale strings such as
    /// `5/29/2024, 3:04:05 PM`, so the value is kept opaque.
    pub timestamp: String,
}

impl DrawingRecord {
    pub fn new(
        name: impl Into<String>,
        snapshot: CanvasSnapshot,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            snapshot,
            timestamp: timestamp.into(),
        }
    }
}

/// Formats `now` in local time as `M/D/YYYY, h:mm:ss AM`.
pub fn display_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{display_timestamp, DrawingRecord};
    use chrono::{Local, TimeZone, Utc};

    #[test]
    fn locale_timestamps_deserialize() {
        let raw = r#"{"id":"1717000000000","name":"Drawing 1","dataUrl":"data:image/png;base64,AA==","timestamp":"5/29/2024, 3:04:05 PM"}"#;
        let drawing: DrawingRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(drawing.timestamp, "5/29/2024, 3:04:05 PM");
        assert_eq!(drawing.snapshot.png_base64(), Some("AA=="));
    }

    #[test]
    fn display_timestamp_uses_twelve_hour_local_time() {
        let now = Utc.with_ymd_and_hms(2024, 5, 29, 15, 4, 5).unwrap();
        let local = now.with_timezone(&Local);
        let label = display_timestamp(now);
        assert!(label.starts_with(&local.format("%-m/%-d/%Y, ").to_string()));
        assert!(label.ends_with(" AM") || label.ends_with(" PM"));
        assert!(label.contains(":04:05"));
    }
}
