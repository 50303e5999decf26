// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration loaded from environment variables

use std::env;

use crate::scrape::ScrapeConfig;

/// Top-level configuration for the node
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP API listens on
    pub api_port: u16,
    /// Shared family code checked at device registration
    pub shared_code: String,
    /// OpenAI-compatible endpoint used for extraction
    pub model_endpoint: String,
    /// Model name requested for extraction
    pub model_name: String,
    /// Maximum entries held by the guide cache
    pub cache_max_entries: usize,
    /// Content fetcher configuration
    pub scrape: ScrapeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            shared_code: env::var("FAMILY_CODE").unwrap_or_else(|_| "origami2024".to_string()),
            model_endpoint: env::var("MODEL_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "gpt-4o".to_string()),
            cache_max_entries: env::var("GUIDE_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            scrape: ScrapeConfig::from_env(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.shared_code.trim().is_empty() {
            return Err("Shared family code must not be empty".to_string());
        }
        if self.model_endpoint.trim().is_empty() {
            return Err("Model endpoint must not be empty".to_string());
        }
        if self.cache_max_entries == 0 {
            return Err("Guide cache capacity must be greater than 0".to_string());
        }
        self.scrape.validate()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: 8080,
            shared_code: "origami2024".to_string(),
            model_endpoint: "https://api.openai.com".to_string(),
            model_name: "gpt-4o".to_string(),
            cache_max_entries: 1000,
            scrape: ScrapeConfig::default(),
        }
    }
}
