// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Guide search pipeline
//!
//! Sequences the cache store, content fetcher and instruction extractor
//! behind a single `SearchService::search` call:
//! - Cache hits return immediately; cache failures degrade to misses
//! - A missing credential is reported distinctly so clients can prompt
//! - One fetch, one extraction, one best-effort cache write per request

pub mod provider;
pub mod service;
pub mod types;

pub use provider::{ContentSource, GuideExtractor};
pub use service::SearchService;
pub use types::{SearchError, SearchOutcome};
