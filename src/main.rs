// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use origami_node::{
    api::{start_server, AppState},
    cache::{GuideCache, MemoryGuideCache},
    config::AppConfig,
    devices::{DeviceStore, MemoryDeviceStore},
    extract::InstructionExtractor,
    scrape::SiteScraper,
    search::{ContentSource, GuideExtractor, SearchService},
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Origami Guide Node...\n");

    let config = AppConfig::from_env();
    if let Err(e) = config.validate() {
        anyhow::bail!("Invalid configuration: {}", e);
    }

    tracing::info!(
        "Configured: site={}, model={}, cache capacity={}",
        config.scrape.site_url,
        config.model_name,
        config.cache_max_entries
    );

    let cache: Arc<dyn GuideCache> = Arc::new(MemoryGuideCache::new(config.cache_max_entries));
    let source: Arc<dyn ContentSource> = Arc::new(SiteScraper::new(config.scrape.clone()));
    let extractor: Arc<dyn GuideExtractor> = Arc::new(InstructionExtractor::new(
        &config.model_endpoint,
        &config.model_name,
    )?);

    let search = Arc::new(SearchService::new(cache, source, extractor));
    let devices: Arc<dyn DeviceStore> = Arc::new(MemoryDeviceStore::new());

    let port = config.api_port;
    let state = AppState::new(Arc::new(config), search, devices);

    println!("✅ Node initialized, serving on port {}\n", port);

    start_server(state, port)
        .await
        .map_err(|e| anyhow::anyhow!("API server failed: {}", e))?;

    Ok(())
}
