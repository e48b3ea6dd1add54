use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plant::PlantKind;

/// 1-based ordinal of a day within its calendar year.
pub type DayIndex = u32;

/// A memory saved for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub content: String,
    /// Time of the last save.
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "plantType")]
    pub plant_kind: PlantKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_camel_case_fields() {
        let entry = JournalEntry {
            content: "Rain all day".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 2, 14, 9, 30, 0).unwrap(),
            plant_kind: PlantKind::Fern,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"content\":\"Rain all day\""));
        assert!(json.contains("\"createdAt\":\"2023-02-14T09:30:00Z\""));
        assert!(json.contains("\"plantKind\":\"fern\""));
    }

    #[test]
    fn accepts_legacy_field_names() {
        let json = r#"{"content":"Old","date":"2024-03-01T12:00:00.000Z","plantType":"daisy"}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.content, "Old");
        assert_eq!(entry.plant_kind, PlantKind::Daisy);
        assert_eq!(
            entry.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
        );
    }
}
