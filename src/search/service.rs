// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search pipeline orchestration
//!
//! Sequences cache lookup, content retrieval, structured extraction and
//! the cache write-back, with layered fallback at every stage. At most
//! one cache read and one cache write per call; no retries.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::GuideCache;
use crate::extract::ExtractError;

use super::provider::{ContentSource, GuideExtractor};
use super::types::{SearchError, SearchOutcome};

/// Minimum usable content length from a fetch
const MIN_CONTENT_CHARS: usize = 50;

/// Orchestrates cache, fetcher and extractor into a single search call
pub struct SearchService {
    cache: Arc<dyn GuideCache>,
    source: Arc<dyn ContentSource>,
    extractor: Arc<dyn GuideExtractor>,
}

impl SearchService {
    /// Create a new search service from its collaborators
    pub fn new(
        cache: Arc<dyn GuideCache>,
        source: Arc<dyn ContentSource>,
        extractor: Arc<dyn GuideExtractor>,
    ) -> Self {
        Self {
            cache,
            source,
            extractor,
        }
    }

    /// Resolve a query into a guide
    ///
    /// # Arguments
    /// * `query` - Free-text search query
    /// * `credential` - Caller-supplied model access key, if any
    ///
    /// # Returns
    /// The resolved guide tagged cached/fresh, or a typed failure
    pub async fn search(
        &self,
        query: &str,
        credential: Option<&str>,
    ) -> Result<SearchOutcome, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery {
                reason: "Query is required".to_string(),
            });
        }

        // Cache first; a failing cache degrades to a miss, never to an error
        match self.cache.get(query).await {
            Ok(Some(guide)) => {
                debug!("Cache hit for query: {}", query);
                return Ok(SearchOutcome {
                    guide,
                    cached: true,
                });
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Cache read failed, treating as miss: {}", e);
            }
        }

        let Some(credential) = credential.filter(|c| !c.trim().is_empty()) else {
            return Err(SearchError::CredentialMissing);
        };

        let content = self.source.fetch(query).await;
        if content.len() < MIN_CONTENT_CHARS {
            debug!(
                "Fetched only {} chars for '{}', giving up",
                content.len(),
                query
            );
            return Err(SearchError::NotFound {
                query: query.to_string(),
            });
        }

        let guide = match self.extractor.extract(&content, query, credential).await {
            Ok(Some(guide)) => guide,
            Ok(None) => {
                return Err(SearchError::NotUnderstood {
                    query: query.to_string(),
                })
            }
            Err(ExtractError::CredentialRejected) => return Err(SearchError::CredentialInvalid),
            Err(e) => {
                return Err(SearchError::Upstream {
                    message: e.to_string(),
                })
            }
        };

        // Best-effort write-back; a failure here never affects the result
        if let Err(e) = self.cache.put(query, &guide).await {
            warn!("Cache write failed for '{}': {}", query, e);
        }

        info!("Search resolved '{}' -> {}", query, guide.id);
        Ok(SearchOutcome {
            guide,
            cached: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::cache::{CacheError, MemoryGuideCache};
    use crate::guide::{Category, Difficulty, ProjectGuide, Step};

    fn guide(id: &str) -> ProjectGuide {
        ProjectGuide {
            id: id.to_string(),
            name: "Frog".to_string(),
            difficulty: Difficulty::Easy,
            category: Category::Animals,
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

    struct CountingSource {
        content: String,
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new(content: &str) -> Self {
            Self {
                content: content.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ContentSource for CountingSource {
        async fn fetch(&self, _query: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.content.clone()
        }
    }

    struct StaticExtractor {
        result: Result<Option<ProjectGuide>, ExtractError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GuideExtractor for StaticExtractor {
        async fn extract(
            &self,
            _content: &str,
            _query: &str,
            _credential: &str,
        ) -> Result<Option<ProjectGuide>, ExtractError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Ok(g) => Ok(g.clone()),
                Err(ExtractError::CredentialRejected) => Err(ExtractError::CredentialRejected),
                Err(e) => Err(ExtractError::Http(e.to_string())),
            }
        }
    }

    struct FailingCache;

    #[async_trait]
    impl GuideCache for FailingCache {
        async fn get(&self, _query: &str) -> Result<Option<ProjectGuide>, CacheError> {
            Err(CacheError::Backend("down".to_string()))
        }

        async fn put(&self, _query: &str, _guide: &ProjectGuide) -> Result<(), CacheError> {
            Err(CacheError::Backend("down".to_string()))
        }
    }

    const LONG_CONTENT: &str = "Start with a square sheet of paper and fold it in half \
        diagonally, then unfold and repeat on the other diagonal to crease the center.";

    fn service_with(
        cache: Arc<dyn GuideCache>,
        source: Arc<CountingSource>,
        extractor: Arc<StaticExtractor>,
    ) -> SearchService {
        SearchService::new(cache, source, extractor)
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let service = service_with(
            Arc::new(MemoryGuideCache::new(10)),
            Arc::new(CountingSource::new(LONG_CONTENT)),
            Arc::new(StaticExtractor {
                result: Ok(Some(guide("g-1"))),
                calls: AtomicUsize::new(0),
            }),
        );

        let result = service.search("   ", Some("key")).await;
        assert!(matches!(result, Err(SearchError::InvalidQuery { .. })));
    }

    #[tokio::test]
    async fn test_cache_hit_short_circuits_pipeline() {
        let cache = Arc::new(MemoryGuideCache::new(10));
        cache.put("frog", &guide("g-cached")).await.unwrap();

        let source = Arc::new(CountingSource::new(LONG_CONTENT));
        let extractor = Arc::new(StaticExtractor {
            result: Ok(Some(guide("g-fresh"))),
            calls: AtomicUsize::new(0),
        });
        let service = service_with(cache, source.clone(), extractor.clone());

        // No credential needed on a cache hit either
        let outcome = service.search("FROG", None).await.unwrap();
        assert!(outcome.cached);
        assert_eq!(outcome.guide.id, "g-cached");
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_credential() {
        let service = service_with(
            Arc::new(MemoryGuideCache::new(10)),
            Arc::new(CountingSource::new(LONG_CONTENT)),
            Arc::new(StaticExtractor {
                result: Ok(Some(guide("g-1"))),
                calls: AtomicUsize::new(0),
            }),
        );

        let result = service.search("frog", None).await;
        assert!(matches!(result, Err(SearchError::CredentialMissing)));

        let result = service.search("frog", Some("  ")).await;
        assert!(matches!(result, Err(SearchError::CredentialMissing)));
    }

    #[tokio::test]
    async fn test_short_content_is_not_found() {
        let cache = Arc::new(MemoryGuideCache::new(10));
        let service = service_with(
            cache.clone(),
            Arc::new(CountingSource::new("too short")),
            Arc::new(StaticExtractor {
                result: Ok(Some(guide("g-1"))),
                calls: AtomicUsize::new(0),
            }),
        );

        let result = service.search("frog", Some("key")).await;
        assert!(matches!(result, Err(SearchError::NotFound { .. })));
        // No cache write on failure
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_extractor_none_is_not_understood() {
        let service = service_with(
            Arc::new(MemoryGuideCache::new(10)),
            Arc::new(CountingSource::new(LONG_CONTENT)),
            Arc::new(StaticExtractor {
                result: Ok(None),
                calls: AtomicUsize::new(0),
            }),
        );

        let result = service.search("frog", Some("key")).await;
        assert!(matches!(result, Err(SearchError::NotUnderstood { .. })));
    }

    #[tokio::test]
    async fn test_credential_rejection_is_distinguished() {
        let service = service_with(
            Arc::new(MemoryGuideCache::new(10)),
            Arc::new(CountingSource::new(LONG_CONTENT)),
            Arc::new(StaticExtractor {
                result: Err(ExtractError::CredentialRejected),
                calls: AtomicUsize::new(0),
            }),
        );

        let result = service.search("frog", Some("bad-key")).await;
        assert!(matches!(result, Err(SearchError::CredentialInvalid)));
    }

    #[tokio::test]
    async fn test_generic_extractor_failure_is_upstream() {
        let service = service_with(
            Arc::new(MemoryGuideCache::new(10)),
            Arc::new(CountingSource::new(LONG_CONTENT)),
            Arc::new(StaticExtractor {
                result: Err(ExtractError::Http("connection reset".to_string())),
                calls: AtomicUsize::new(0),
            }),
        );

        let result = service.search("frog", Some("key")).await;
        assert!(matches!(result, Err(SearchError::Upstream { .. })));
    }

    #[tokio::test]
    async fn test_success_writes_cache_and_second_call_hits() {
        let cache = Arc::new(MemoryGuideCache::new(10));
        let source = Arc::new(CountingSource::new(LONG_CONTENT));
        let extractor = Arc::new(StaticExtractor {
            result: Ok(Some(guide("g-fresh"))),
            calls: AtomicUsize::new(0),
        });
        let service = service_with(cache.clone(), source.clone(), extractor);

        let first = service.search("frog", Some("key")).await.unwrap();
        assert!(!first.cached);

        let second = service.search("frog", Some("key")).await.unwrap();
        assert!(second.cached);
        assert_eq!(second.guide.id, "g-fresh");
        // Fetcher only ran for the first call
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cache_failures_never_surface() {
        let source = Arc::new(CountingSource::new(LONG_CONTENT));
        let extractor = Arc::new(StaticExtractor {
            result: Ok(Some(guide("g-1"))),
            calls: AtomicUsize::new(0),
        });
        let service = service_with(Arc::new(FailingCache), source, extractor);

        // Read failure degrades to a miss, write failure is swallowed
        let outcome = service.search("frog", Some("key")).await.unwrap();
        assert!(!outcome.cached);
        assert_eq!(outcome.guide.id, "g-1");
    }
}
