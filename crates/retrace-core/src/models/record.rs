use serde::{Deserialize, Deserializer, Serialize};

/// One browsing-history entry as reported by the host browser.
///
/// Immutable once fetched; the store replaces the whole collection on each
/// fetch rather than merging. Only `url`, `title` and `last_visit_time` drive
/// the engine — the visit counters ride along for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Local-clock visit instant in epoch milliseconds. `None` means the
    /// backend had no dated visit for the entry; such records never bucket.
    #[serde(
        default,
        deserialize_with = "de_epoch_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_visit_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typed_count: Option<u32>,
}

/// Browsers report fractional epoch milliseconds; whole milliseconds are
/// plenty for calendar bucketing.
fn de_epoch_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = Option::<f64>::deserialize(deserializer)?;
    Ok(millis.map(|ms| ms as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_browser_export_json() {
        let json = r#"[
            {
                "id": "42",
                "url": "https://example.com/",
                "title": "Example Domain",
                "lastVisitTime": 1705312800123.75,
                "visitCount": 3,
                "typedCount": 1
            },
            {
                "id": "43",
                "url": "https://no-visits.example/"
            }
        ]"#;

        let records: Vec<HistoryRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "https://example.com/");
        assert_eq!(records[0].title.as_deref(), Some("Example Domain"));
        assert_eq!(records[0].last_visit_time, Some(1705312800123));
        assert_eq!(records[0].visit_count, Some(3));
        assert_eq!(records[1].title, None);
        assert_eq!(records[1].last_visit_time, None);
    }

    #[test]
    fn test_serializes_camel_case_and_skips_missing() {
        let record = HistoryRecord {
            url: "https://example.com/".to_string(),
            title: None,
            last_visit_time: Some(1705312800123),
            visit_count: None,
            typed_count: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"lastVisitTime\":1705312800123"));
        assert!(!json.contains("title"));
        assert!(!json.contains("visitCount"));
    }
}
