// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web content retrieval for the search pipeline
//!
//! Fetches search-result pages from the configured instruction site,
//! strips non-content markup and collects image URLs. Failures degrade
//! to a fallback string rather than surfacing as errors.

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::ScrapeConfig;
pub use extractor::{collect_image_urls, extract_page_text};
pub use fetcher::SiteScraper;
