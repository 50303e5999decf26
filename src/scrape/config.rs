// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for instruction site scraping

use std::env;

/// Configuration for the content fetcher
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Base URL of the instruction site to search
    pub site_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

const DEFAULT_SITE_URL: &str = "https://origami-resource-center.com";

impl ScrapeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            site_url: env::var("SCRAPE_SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),
            timeout_secs: env::var("SCRAPE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.site_url.trim().is_empty() {
            return Err("Scrape site URL must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("Scrape timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            timeout_secs: 15,
        }
    }
}
