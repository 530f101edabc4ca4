//! In-process review store.
//!
//! Rows live in insertion order; since `created_at` is assigned at insert
//! time, reverse iteration gives newest-first ordering for the paginated
//! queries and the latest-by-URL lookup.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::record::{NewReview, ReviewRecord};

/// Store-level failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id.
    #[error("review not found: {0}")]
    NotFound(Uuid),
}

/// One page of a newest-first listing.
#[derive(Debug, Clone)]
pub struct ReviewPage {
    pub reviews: Vec<ReviewRecord>,
    pub total_count: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

/// Aggregate statistics over all persisted reviews.
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub total_reviews: u64,
    /// Reviews created within the last 7 days.
    pub recent_reviews: u64,
    /// Repository primary language → review count (records without a
    /// language are not counted).
    pub language_statistics: BTreeMap<String, u64>,
}

/// Append-only review table behind a shared lock.
///
/// Cloning is cheap and shares the same underlying table.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    inner: Arc<RwLock<Vec<ReviewRecord>>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists a new record, assigning id and creation timestamp.
    pub async fn insert(&self, new: NewReview) -> ReviewRecord {
        let record = ReviewRecord {
            id: Uuid::new_v4(),
            source_url: new.source_url,
            repository_owner: new.repository_owner,
            repository_name: new.repository_name,
            team_name: new.team_name,
            repository_language: new.repository_language,
            repository_description: new.repository_description,
            analysis_depth: new.analysis_depth,
            include_tests: new.include_tests,
            include_documentation: new.include_documentation,
            full_report: new.full_report,
            summary: new.summary,
            repository_stats: new.repository_stats,
            created_at: Utc::now(),
        };

        let mut rows = self.inner.write().await;
        rows.push(record.clone());
        debug!(id = %record.id, url = %record.source_url, "review inserted");
        record
    }

    pub async fn get_by_id(&self, id: Uuid) -> Option<ReviewRecord> {
        let rows = self.inner.read().await;
        rows.iter().find(|r| r.id == id).cloned()
    }

    /// Most recent record with exactly this source URL, if any.
    pub async fn find_latest_by_url(&self, url: &str) -> Option<ReviewRecord> {
        let rows = self.inner.read().await;
        rows.iter().rev().find(|r| r.source_url == url).cloned()
    }

    /// Newest-first page over all records. `page` is 1-based; zero values
    /// are clamped to 1.
    pub async fn list_page(&self, page: u64, limit: u64) -> ReviewPage {
        let rows = self.inner.read().await;
        paginate(rows.iter().rev(), rows.len() as u64, page, limit)
    }

    /// Newest-first page filtered by team name.
    pub async fn list_page_by_team(&self, team: &str, page: u64, limit: u64) -> ReviewPage {
        let rows = self.inner.read().await;
        let matching: Vec<&ReviewRecord> = rows
            .iter()
            .rev()
            .filter(|r| r.team_name.as_deref() == Some(team))
            .collect();
        let total = matching.len() as u64;
        paginate(matching.into_iter(), total, page, limit)
    }

    /// Removes a record by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.inner.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id));
        }
        debug!(%id, "review deleted");
        Ok(())
    }

    /// Aggregates total/recent counts and per-language review counts.
    pub async fn aggregate_stats(&self) -> StoreStats {
        let rows = self.inner.read().await;
        let cutoff = Utc::now() - Duration::days(7);

        let mut language_statistics: BTreeMap<String, u64> = BTreeMap::new();
        let mut recent_reviews = 0;
        for record in rows.iter() {
            if record.created_at >= cutoff {
                recent_reviews += 1;
            }
            if let Some(language) = &record.repository_language {
                *language_statistics.entry(language.clone()).or_insert(0) += 1;
            }
        }

        StoreStats {
            total_reviews: rows.len() as u64,
            recent_reviews,
            language_statistics,
        }
    }
}

fn paginate<'a, I>(newest_first: I, total_count: u64, page: u64, limit: u64) -> ReviewPage
where
    I: Iterator<Item = &'a ReviewRecord>,
{
    let page = page.max(1);
    let limit = limit.max(1);
    let offset = (page - 1) * limit;

    let reviews: Vec<ReviewRecord> = newest_first
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect();

    ReviewPage {
        reviews,
        total_count,
        current_page: page,
        total_pages: total_count.div_ceil(limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AnalysisDepth;

    fn new_review(url: &str, team: Option<&str>, language: Option<&str>) -> NewReview {
        NewReview {
            source_url: url.into(),
            repository_owner: Some("acme".into()),
            repository_name: Some("widgets".into()),
            team_name: team.map(Into::into),
            repository_language: language.map(Into::into),
            repository_description: None,
            analysis_depth: AnalysisDepth::Detailed,
            include_tests: true,
            include_documentation: true,
            full_report: "report".into(),
            summary: "summary".into(),
            repository_stats: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids_and_get_by_id_round_trips() {
        let store = ReviewStore::new();
        let a = store.insert(new_review("https://x/a", None, None)).await;
        let b = store.insert(new_review("https://x/b", None, None)).await;

        assert_ne!(a.id, b.id);
        assert_eq!(store.get_by_id(a.id).await.unwrap().source_url, "https://x/a");
        assert!(store.get_by_id(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn find_latest_by_url_returns_the_most_recent_match() {
        let store = ReviewStore::new();
        let first = store.insert(new_review("https://x/a", None, None)).await;
        let second = store.insert(new_review("https://x/a", None, None)).await;
        store.insert(new_review("https://x/b", None, None)).await;

        let found = store.find_latest_by_url("https://x/a").await.unwrap();
        assert_eq!(found.id, second.id);
        assert_ne!(found.id, first.id);
        assert!(store.find_latest_by_url("https://x/missing").await.is_none());
    }

    #[tokio::test]
    async fn list_page_is_newest_first_with_counts() {
        let store = ReviewStore::new();
        for i in 0..5 {
            store
                .insert(new_review(&format!("https://x/{i}"), None, None))
                .await;
        }

        let page1 = store.list_page(1, 2).await;
        assert_eq!(page1.total_count, 5);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.reviews[0].source_url, "https://x/4");
        assert_eq!(page1.reviews[1].source_url, "https://x/3");

        let page3 = store.list_page(3, 2).await;
        assert_eq!(page3.reviews.len(), 1);
        assert_eq!(page3.reviews[0].source_url, "https://x/0");

        // Page 0 clamps to page 1.
        let clamped = store.list_page(0, 2).await;
        assert_eq!(clamped.current_page, 1);
    }

    #[tokio::test]
    async fn team_listing_filters_and_paginates() {
        let store = ReviewStore::new();
        store
            .insert(new_review("https://x/a", Some("alpha"), None))
            .await;
        store
            .insert(new_review("https://x/b", Some("beta"), None))
            .await;
        store
            .insert(new_review("https://x/c", Some("alpha"), None))
            .await;

        let page = store.list_page_by_team("alpha", 1, 10).await;
        assert_eq!(page.total_count, 2);
        assert_eq!(page.reviews[0].source_url, "https://x/c");
        assert_eq!(page.reviews[1].source_url, "https://x/a");

        assert_eq!(store.list_page_by_team("gamma", 1, 10).await.total_count, 0);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = ReviewStore::new();
        let a = store.insert(new_review("https://x/a", None, None)).await;
        store.insert(new_review("https://x/b", None, None)).await;

        store.delete(a.id).await.unwrap();
        assert!(store.get_by_id(a.id).await.is_none());
        assert_eq!(store.list_page(1, 10).await.total_count, 1);

        assert!(matches!(
            store.delete(a.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn stats_count_totals_recents_and_languages() {
        let store = ReviewStore::new();
        store
            .insert(new_review("https://x/a", None, Some("Rust")))
            .await;
        store
            .insert(new_review("https://x/b", None, Some("Rust")))
            .await;
        store
            .insert(new_review("https://x/c", None, Some("Go")))
            .await;
        store.insert(new_review("https://x/d", None, None)).await;

        let stats = store.aggregate_stats().await;
        assert_eq!(stats.total_reviews, 4);
        assert_eq!(stats.recent_reviews, 4);
        assert_eq!(stats.language_statistics.get("Rust"), Some(&2));
        assert_eq!(stats.language_statistics.get("Go"), Some(&1));
        assert_eq!(stats.language_statistics.len(), 2);
    }
}
