//! The pipeline's output record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured metadata extracted from one document.
///
/// Field declaration order fixes the JSON key order. Absent title/author
/// serialize as `null` so the keys are always present for callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Detected document title, if any line qualified.
    pub title: Option<String>,
    /// Detected author name, if any marker pattern matched.
    pub author: Option<String>,
    /// Date strings in order of first appearance, deduplicated.
    pub dates: Vec<String>,
    /// Keywords ranked by descending frequency.
    pub keywords: Vec<String>,
    /// Extractive summary; selected sentences in original order.
    pub summary: String,
    /// Whitespace-delimited token count.
    pub word_count: usize,
    /// Character count including whitespace.
    pub character_count: usize,
    /// When this record was produced.
    pub extraction_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> MetadataRecord {
        MetadataRecord {
            title: None,
            author: Some("Jane Doe".to_string()),
            dates: vec!["2024-03-15".to_string()],
            keywords: vec!["falcon".to_string()],
            summary: "Falcons fly fast.".to_string(),
            word_count: 3,
            character_count: 17,
            extraction_date: Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("title").unwrap().is_null());
        assert_eq!(json["author"], "Jane Doe");
    }

    #[test]
    fn json_key_order_is_stable() {
        let json = serde_json::to_string(&sample()).unwrap();
        let keys = [
            "\"title\"",
            "\"author\"",
            "\"dates\"",
            "\"keywords\"",
            "\"summary\"",
            "\"word_count\"",
            "\"character_count\"",
            "\"extraction_date\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn round_trips_through_json() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
