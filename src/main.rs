// src/main.rs

use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use pdga_scrape::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    cli::run()
}
