// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Collaborator traits for the search orchestrator
//!
//! The orchestrator only sees these seams, so tests can swap in mock
//! sources and extractors without any network access.

use async_trait::async_trait;

use crate::extract::{ExtractError, InstructionExtractor};
use crate::guide::ProjectGuide;
use crate::scrape::SiteScraper;

/// Supplies raw instruction text for a query
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch content for a query
    ///
    /// Implementations never fail loudly: failures are folded into the
    /// returned text as a fallback string.
    async fn fetch(&self, query: &str) -> String;
}

/// Turns raw text into a structured guide
#[async_trait]
pub trait GuideExtractor: Send + Sync {
    /// Extract a guide, or `None` when the content holds no complete
    /// instructions
    async fn extract(
        &self,
        content: &str,
        query: &str,
        credential: &str,
    ) -> Result<Option<ProjectGuide>, ExtractError>;
}

#[async_trait]
impl ContentSource for SiteScraper {
    async fn fetch(&self, query: &str) -> String {
        self.fetch_instructions(query).await
    }
}

#[async_trait]
impl GuideExtractor for InstructionExtractor {
    async fn extract(
        &self,
        content: &str,
        query: &str,
        credential: &str,
    ) -> Result<Option<ProjectGuide>, ExtractError> {
        InstructionExtractor::extract(self, content, query, credential).await
    }
}
