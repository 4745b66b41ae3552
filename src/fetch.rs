//! Pricing page retrieval

use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::error::ScrapeError;

// The page serves a bot-hostile empty shell without a browser-like UA.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Fetch the raw pricing page HTML.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    info!("Fetching {}", url);

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", ACCEPT)
        .header("Accept-Language", ACCEPT_LANGUAGE)
        .timeout(Duration::from_secs(30))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ScrapeError::HttpStatus(response.status()));
    }

    Ok(response.text().await?)
}
