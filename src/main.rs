//! Phar-Harvest main entry point
//!
//! This is the command-line interface for the Phar-Harvest plugin scraper.

use anyhow::Context;
use clap::Parser;
use phar_harvest::config::{load_config_with_hash, Config};
use phar_harvest::output::{print_statistics, write_json, ScrapeStatistics};
use phar_harvest::scrape::{
    all_resource_ids, build_http_client, plugin_data, run_scrape, PageFetcher,
};
use phar_harvest::ResourceId;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Phar-Harvest: a PocketMine plugin directory scraper
///
/// Walks the paginated plugin listing on the PocketMine forums, fetches
/// each plugin's version-history page with a bounded number of concurrent
/// requests, and emits normalized plugin records as JSON.
#[derive(Parser, Debug)]
#[command(name = "phar-harvest")]
#[command(version)]
#[command(about = "Scrape the PocketMine plugin directory", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured number of concurrent workers
    #[arg(short, long, value_name = "N")]
    workers: Option<usize>,

    /// Only enumerate resource identifiers, without fetching plugin details
    #[arg(long, conflicts_with = "plugin")]
    list_only: bool,

    /// Fetch a single plugin record by resource identifier (e.g. "worldeditart.1351")
    #[arg(long, value_name = "RESOURCE_ID")]
    plugin: Option<String>,

    /// Write JSON output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the built-in defaults
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No config file given, using built-in defaults");
            Config::default()
        }
    };

    if let Some(workers) = cli.workers {
        anyhow::ensure!(workers > 0, "--workers must be at least 1");
        config.scraper.max_workers = workers;
    }

    // Handle different modes
    if let Some(token) = &cli.plugin {
        handle_single_plugin(&config, token, cli.output.as_deref()).await?;
    } else if cli.list_only {
        handle_list_only(&config, cli.output.as_deref()).await?;
    } else {
        handle_full_scrape(&config, cli.output.as_deref(), cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("phar_harvest=info,warn"),
            1 => EnvFilter::new("phar_harvest=debug,info"),
            2 => EnvFilter::new("phar_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --plugin: fetches and prints one plugin record
async fn handle_single_plugin(
    config: &Config,
    token: &str,
    output: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let resource_id: ResourceId = token.parse()?;

    let client = build_http_client(&config.user_agent)?;
    let fetcher = PageFetcher::new(client, config.scraper.base_url.clone());

    let record = plugin_data(&fetcher, &config.scraper.listing_path, &resource_id).await?;
    write_json(&record, output)?;

    Ok(())
}

/// Handles --list-only: enumerates resource identifiers without details
async fn handle_list_only(config: &Config, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let client = build_http_client(&config.user_agent)?;
    let fetcher = PageFetcher::new(client, config.scraper.base_url.clone());

    let resource_ids = all_resource_ids(
        &fetcher,
        &config.scraper.listing_path,
        config.scraper.max_workers,
    )
    .await?;

    let tokens: Vec<String> = resource_ids.iter().map(|id| id.to_string()).collect();
    write_json(&tokens, output)?;

    Ok(())
}

/// Handles the default mode: full scrape with a statistics summary
async fn handle_full_scrape(
    config: &Config,
    output: Option<&std::path::Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    match run_scrape(config).await {
        Ok(plugins) => {
            write_json(&plugins, output)?;

            // Keep stdout clean for piped JSON when no output file is set
            if !quiet && output.is_some() {
                let stats = ScrapeStatistics::from_records(&plugins);
                print_statistics(&stats);
            }

            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}
