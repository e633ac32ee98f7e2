//! Text filtering over history records.
//!
//! Whole-query, case-insensitive substring semantics: a record matches when
//! its title or URL contains the query. An empty query matches everything.

use crate::models::HistoryRecord;

/// Filter `records` down to those matching `query`.
///
/// The result is always a subsequence of the input in the original order; an
/// empty query returns a copy of the input unchanged.
pub fn filter_records(records: &[HistoryRecord], query: &str) -> Vec<HistoryRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, &needle))
        .cloned()
        .collect()
}

/// Check a single record against an already-lowercased needle.
/// `filter_records` folds the query once; UI highlight paths can reuse this.
pub fn record_matches(record: &HistoryRecord, needle: &str) -> bool {
    if let Some(title) = &record.title {
        if title.to_lowercase().contains(needle) {
            return true;
        }
    }
    record.url.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(url: &str, title: Option<&str>) -> HistoryRecord {
        HistoryRecord {
            url: url.to_string(),
            title: title.map(|t| t.to_string()),
            last_visit_time: Some(0),
            visit_count: None,
            typed_count: None,
        }
    }

    #[test]
    fn test_empty_query_returns_all() {
        let records = vec![rec("https://a.example/", None), rec("https://b.example/", None)];
        assert_eq!(filter_records(&records, ""), records);
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        let records = vec![
            rec("https://rust-lang.org/", Some("The Rust Programming Language")),
            rec("https://example.com/", Some("Example Domain")),
        ];
        let filtered = filter_records(&records, "RUST");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].url, "https://rust-lang.org/");
    }

    #[test]
    fn test_matches_url_when_title_missing() {
        let records = vec![
            rec("https://docs.rs/chrono", None),
            rec("https://example.com/", Some("Example")),
        ];
        let filtered = filter_records(&records, "docs.RS");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].url, "https://docs.rs/chrono");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let records = vec![rec("https://example.com/", Some("Example"))];
        assert!(filter_records(&records, "zebra").is_empty());
    }

    #[test]
    fn test_result_is_subsequence_of_input() {
        let records = vec![
            rec("https://one.example/search", None),
            rec("https://two.example/", None),
            rec("https://three.example/search", None),
        ];
        let filtered = filter_records(&records, "search");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].url, "https://one.example/search");
        assert_eq!(filtered[1].url, "https://three.example/search");
    }
}
