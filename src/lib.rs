pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod html;
pub mod instances;
pub mod models;
pub mod parser;
pub mod price;
pub mod regions;
pub mod scraper;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Note: This function can only be called once per process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
