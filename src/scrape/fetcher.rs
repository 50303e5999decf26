//! HTTP retrieval against the instruction site's search endpoint
//!
//! The fetcher never fails loudly: any transport or non-success HTTP
//! outcome degrades to a fallback string describing the failure, so the
//! orchestrator only ever sees text.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::config::ScrapeConfig;
use super::extractor::{collect_image_urls, extract_page_text};

#[derive(Debug, Error)]
enum FetchError {
    #[error("invalid site URL: {0}")]
    BadUrl(String),
    #[error("request failed: {0}")]
    Http(String),
    #[error("HTTP status {0}")]
    Status(u16),
}

/// Scrapes the configured instruction site for a query
pub struct SiteScraper {
    client: Client,
    config: ScrapeConfig,
}

impl SiteScraper {
    /// Create a new scraper from configuration
    pub fn new(config: ScrapeConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Mozilla/5.0 (compatible; OrigamiNode/1.0)")
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch instruction text for a query
    ///
    /// Returns the extracted page text with an appended image-URL list.
    /// On any failure this returns a safe fallback string instead of an
    /// error, per the degrade-gracefully contract.
    pub async fn fetch_instructions(&self, query: &str) -> String {
        match self.try_fetch(query).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Scrape failed for '{}': {}", query, e);
                format!(
                    "Unable to retrieve instructions for \"{}\". \
                     Please try a different search term or check the original websites manually.",
                    query
                )
            }
        }
    }

    async fn try_fetch(&self, query: &str) -> Result<String, FetchError> {
        let mut url = Url::parse(&self.config.site_url)
            .map_err(|e| FetchError::BadUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair("s", query);

        debug!("Fetching instruction content from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let content = compose_content(&html);
        info!("Scraped {} chars for query '{}'", content.len(), query);
        Ok(content)
    }
}

/// Combine extracted text with the list of discovered image URLs
fn compose_content(html: &str) -> String {
    let mut content = extract_page_text(html);

    let images = collect_image_urls(html);
    if !images.is_empty() {
        content.push_str("\n\nImages found:\n");
        content.push_str(&images.join("\n"));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_content_appends_images() {
        let html = r#"
            <html><body>
                <main><p>Fold the paper in half.</p></main>
                <img src="https://example.com/1.jpg">
                <img src="https://example.com/2.jpg">
            </body></html>
        "#;

        let content = compose_content(html);
        assert!(content.starts_with("Fold the paper in half."));
        assert!(content.contains("Images found:"));
        assert!(content.ends_with("https://example.com/1.jpg\nhttps://example.com/2.jpg"));
    }

    #[test]
    fn test_compose_content_without_images() {
        let html = "<html><body><main><p>Just text.</p></main></body></html>";
        let content = compose_content(html);
        assert_eq!(content, "Just text.");
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_fallback_string() {
        // Unroutable port, so the request fails fast
        let config = ScrapeConfig {
            site_url: "http://127.0.0.1:59999".to_string(),
            timeout_secs: 1,
        };
        let scraper = SiteScraper::new(config);

        let content = scraper.fetch_instructions("frog").await;
        assert!(content.contains("Unable to retrieve instructions for \"frog\""));
    }

    #[tokio::test]
    async fn test_invalid_site_url_returns_fallback_string() {
        let config = ScrapeConfig {
            site_url: "not a url".to_string(),
            timeout_secs: 1,
        };
        let scraper = SiteScraper::new(config);

        let content = scraper.fetch_instructions("crane").await;
        assert!(content.contains("Unable to retrieve instructions"));
    }
}
