//! End-to-end scrape orchestration

use chrono::Utc;
use reqwest::Client;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ScrapeError;
use crate::extract::extract_json_data;
use crate::fetch::fetch_page;
use crate::models::{PricingData, PricingMetadata};
use crate::parser::parse_pricing_data;

/// Public pricing page for EC2 Capacity Blocks
pub const SOURCE_URL: &str = "https://aws.amazon.com/ec2/capacityblocks/pricing/";

/// Dataset structure version written into metadata
pub const VERSION: &str = "1.0.0";

/// Default output location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "data/pricing.json";

/// Fetch the pricing page and assemble the full dataset.
pub async fn scrape_pricing(client: &Client, url: &str) -> Result<PricingData, ScrapeError> {
    let html = fetch_page(client, url).await?;
    let last_updated = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    build_pricing_data(&html, url, last_updated)
}

/// Pure pipeline from page HTML to the dataset.
///
/// Deterministic for a fixed `last_updated`, which is the run's only side
/// input; [`scrape_pricing`] passes the wall clock.
pub fn build_pricing_data(
    html: &str,
    source_url: &str,
    last_updated: String,
) -> Result<PricingData, ScrapeError> {
    let rows = extract_json_data(html);
    if rows.is_empty() {
        return Err(ScrapeError::NoData);
    }
    info!("Extracted {} raw pricing rows", rows.len());

    let instance_types = parse_pricing_data(&rows);
    if instance_types.is_empty() {
        return Err(ScrapeError::NoParsedData);
    }
    info!("Parsed pricing for {} instance types", instance_types.len());

    let metadata = PricingMetadata {
        last_updated,
        source_url: source_url.to_string(),
        version: VERSION.to_string(),
    };

    Ok(PricingData {
        metadata,
        instance_types,
    })
}

/// Write the dataset as pretty-printed JSON, creating parent directories.
pub fn save_pricing(data: &PricingData, output_path: &Path) -> Result<(), ScrapeError> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(data)?;
    fs::write(output_path, json)?;

    info!("Wrote pricing data to {}", output_path.display());
    Ok(())
}
