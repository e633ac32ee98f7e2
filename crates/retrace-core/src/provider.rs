//! Collaborator seam to the host browser's history facility.
//!
//! The engine never talks to a browser API directly; front-ends supply an
//! implementation of [`HistoryProvider`] (an extension adapter, a remote
//! bridge, ...). [`MemoryHistoryProvider`] backs tests and UI development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::models::HistoryRecord;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("history backend unavailable")]
    Unavailable,
    #[error("history fetch failed: {0}")]
    Fetch(String),
    #[error("failed to delete history entry: {0}")]
    Deletion(String),
}

#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// The full unfiltered record set. Replaces the store's raw collection
    /// wholesale on success.
    async fn fetch_all(&self) -> Result<Vec<HistoryRecord>, ProviderError>;

    /// Remove every stored visit for `url` (exact match).
    async fn delete_entry(&self, url: &str) -> Result<(), ProviderError>;
}

/// In-memory provider over a plain record list.
pub struct MemoryHistoryProvider {
    records: RwLock<Vec<HistoryRecord>>,
}

impl MemoryHistoryProvider {
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl HistoryProvider for MemoryHistoryProvider {
    async fn fetch_all(&self) -> Result<Vec<HistoryRecord>, ProviderError> {
        let records = self.records.read().map_err(|_| ProviderError::Unavailable)?;
        Ok(records.clone())
    }

    async fn delete_entry(&self, url: &str) -> Result<(), ProviderError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| ProviderError::Unavailable)?;
        let before = records.len();
        records.retain(|record| record.url != url);
        if records.len() == before {
            return Err(ProviderError::Deletion(format!(
                "no history entry for {}",
                url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(url: &str) -> HistoryRecord {
        HistoryRecord {
            url: url.to_string(),
            title: None,
            last_visit_time: Some(0),
            visit_count: None,
            typed_count: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_all_returns_snapshot() {
        let provider = MemoryHistoryProvider::new(vec![rec("https://a.example/")]);
        let records = provider.fetch_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "https://a.example/");
    }

    #[tokio::test]
    async fn test_delete_removes_exact_matches_only() {
        let provider = MemoryHistoryProvider::new(vec![
            rec("https://a.example/"),
            rec("https://a.example/page"),
            rec("https://a.example/"),
        ]);

        provider.delete_entry("https://a.example/").await.unwrap();

        let remaining = provider.fetch_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].url, "https://a.example/page");
    }

    #[tokio::test]
    async fn test_delete_unknown_url_errors() {
        let provider = MemoryHistoryProvider::new(Vec::new());
        let err = provider
            .delete_entry("https://missing.example/")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Deletion(_)));
    }
}
