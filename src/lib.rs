// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod auth;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod devices;
pub mod extract;
pub mod guide;
pub mod scrape;
pub mod search;

// Re-export main types
pub use api::{create_app, start_server, ApiError, AppState, ErrorResponse};
pub use cache::{CacheError, GuideCache, MemoryGuideCache};
pub use config::AppConfig;
pub use devices::{Device, DeviceStore, DeviceStoreError, MemoryDeviceStore};
pub use extract::{ExtractError, InstructionExtractor};
pub use guide::{Category, Difficulty, ProjectGuide, Step};
pub use scrape::{ScrapeConfig, SiteScraper};
pub use search::{ContentSource, GuideExtractor, SearchError, SearchOutcome, SearchService};
