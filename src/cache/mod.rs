// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Guide result caching keyed by normalized query text
//!
//! Cache lookups are case-insensitive; inserts upsert on conflict
//! (last writer wins). The store is modeled as a trait so the search
//! orchestrator can treat any backend failure as a miss.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Instant;

use async_trait::async_trait;
use thiserror::Error;

use crate::guide::ProjectGuide;

/// Errors from a cache backend
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing store could not be reached or rejected the operation
    #[error("cache backend unavailable: {0}")]
    Backend(String),
}

/// Keyed lookup/insert of resolved search results
#[async_trait]
pub trait GuideCache: Send + Sync {
    /// Look up a previously resolved guide for a query (case-insensitive)
    async fn get(&self, query: &str) -> Result<Option<ProjectGuide>, CacheError>;

    /// Store a resolved guide under the query key, replacing any prior entry
    async fn put(&self, query: &str, guide: &ProjectGuide) -> Result<(), CacheError>;
}

/// Normalize a query into its cache key
pub fn cache_key(query: &str) -> String {
    query.trim().to_lowercase()
}

struct CachedEntry {
    guide: ProjectGuide,
    inserted_at: Instant,
}

/// In-memory guide cache with capacity-based eviction
pub struct MemoryGuideCache {
    entries: RwLock<HashMap<String, CachedEntry>>,
    max_entries: usize,
}

impl MemoryGuideCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entries,
        }
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evict the oldest entry once at capacity
    fn evict_oldest(entries: &mut HashMap<String, CachedEntry>) {
        if let Some(oldest_key) = entries
            .iter()
            .min_by_key(|(_, v)| v.inserted_at)
            .map(|(k, _)| k.clone())
        {
            entries.remove(&oldest_key);
        }
    }
}

#[async_trait]
impl GuideCache for MemoryGuideCache {
    async fn get(&self, query: &str) -> Result<Option<ProjectGuide>, CacheError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        Ok(entries.get(&cache_key(query)).map(|e| e.guide.clone()))
    }

    async fn put(&self, query: &str, guide: &ProjectGuide) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| CacheError::Backend(e.to_string()))?;

        let key = cache_key(query);
        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            Self::evict_oldest(&mut entries);
        }

        entries.insert(
            key,
            CachedEntry {
                guide: guide.clone(),
                inserted_at: Instant::now(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::{Category, Difficulty, Step};

    fn guide(id: &str) -> ProjectGuide {
        ProjectGuide {
            id: id.to_string(),
            name: "Test".to_string(),
            difficulty: Difficulty::Easy,
            category: Category::Other,
            steps: vec![Step {
                step_number: 1,
                instruction: "Fold".to_string(),
                image_url: None,
            }],
            source_url: None,
            thumbnail_url: None,
            is_favorite: None,
            is_completed: None,
        }
    }

    #[test]
    fn test_cache_key_normalization() {
        assert_eq!(cache_key("  Paper Crane  "), "paper crane");
        assert_eq!(cache_key("FROG"), "frog");
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = MemoryGuideCache::new(100);
        cache.put("frog", &guide("g-1")).await.unwrap();

        let found = cache.get("frog").await.unwrap().unwrap();
        assert_eq!(found.id, "g-1");
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let cache = MemoryGuideCache::new(100);
        cache.put("Paper Crane", &guide("g-1")).await.unwrap();

        assert!(cache.get("paper crane").await.unwrap().is_some());
        assert!(cache.get("PAPER CRANE").await.unwrap().is_some());
        assert!(cache.get("  paper crane  ").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_miss() {
        let cache = MemoryGuideCache::new(100);
        assert!(cache.get("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_entry() {
        let cache = MemoryGuideCache::new(100);
        cache.put("frog", &guide("g-old")).await.unwrap();
        cache.put("FROG", &guide("g-new")).await.unwrap();

        assert_eq!(cache.len(), 1);
        let found = cache.get("frog").await.unwrap().unwrap();
        assert_eq!(found.id, "g-new");
    }

    #[tokio::test]
    async fn test_eviction_at_capacity() {
        let cache = MemoryGuideCache::new(2);
        cache.put("one", &guide("g-1")).await.unwrap();
        cache.put("two", &guide("g-2")).await.unwrap();
        cache.put("three", &guide("g-3")).await.unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.get("three").await.unwrap().is_some());
    }
}
