use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use reqwest::Client;

use cb_pricing::cli::Cli;
use cb_pricing::init_tracing;
use cb_pricing::scraper::{save_pricing, scrape_pricing};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Cli::parse();
    let client = Client::new();

    println!("Fetching EC2 Capacity Blocks pricing data...");

    let data = scrape_pricing(&client, &args.url).await?;
    save_pricing(&data, &args.output)?;

    let instance_count = data.instance_types.len();
    let total_entries: usize = data
        .instance_types
        .values()
        .map(|it| it.pricing.len())
        .sum();

    println!("{}", "Successfully scraped pricing data:".green());
    println!("  - Instance types: {}", instance_count);
    println!("  - Total pricing entries: {}", total_entries);
    println!("  - Output file: {}", args.output.display());
    println!();

    println!("{}", "Instance types found:".bold());
    for (instance_type, pricing) in &data.instance_types {
        println!(
            "  - {} ({}): {} region(s)",
            instance_type.cyan(),
            pricing.instance_family,
            pricing.pricing.len()
        );
    }

    Ok(())
}
