use clap::Parser;
use std::path::PathBuf;

use crate::scraper::{DEFAULT_OUTPUT_PATH, SOURCE_URL};

#[derive(Parser, Debug)]
#[command(
    name = "cb-pricing",
    version,
    about = "EC2 Capacity Blocks pricing scraper"
)]
pub struct Cli {
    /// Output file for the scraped dataset
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Pricing page URL (point at a saved snapshot server for testing)
    #[arg(long, default_value = SOURCE_URL)]
    pub url: String,
}
