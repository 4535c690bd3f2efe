//! Whatslink-Scraper main entry point
//!
//! Starts the HTTP API serving scraped WhatsApp invite links and categories.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use whatslink_scraper::config::{load_config_with_hash, validate, Config};
use whatslink_scraper::Server;

/// Whatslink-Scraper: WhatsApp group invite scraping service
///
/// Serves `GET /get_whatsapp_links` and `GET /get_categories`, scraping the
/// configured group listing site on every request.
#[derive(Parser, Debug)]
#[command(name = "whatslink-scraper")]
#[command(version)]
#[command(about = "WhatsApp group invite scraping service", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen address (e.g. 127.0.0.1:8000)
    #[arg(short, long, value_name = "ADDR")]
    listen: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the configuration, print it and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load(&cli)?;
    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen;
        validate(&config).context("Invalid --listen address")?;
    }

    if cli.check_config {
        print_config(&config);
        return Ok(());
    }

    let server = Server::start(&config)
        .await
        .context("Failed to start server")?;

    server
        .shutdown_on(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Loads the configuration file, or the defaults when none is given
fn load(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Ok(Config::default())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("whatslink_scraper=info,tower_http=info,warn"),
            1 => EnvFilter::new("whatslink_scraper=debug,tower_http=debug,info"),
            2 => EnvFilter::new("whatslink_scraper=trace,debug"),
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

/// Handles the --check-config mode
fn print_config(config: &Config) {
    println!("=== Whatslink-Scraper Configuration ===\n");

    println!("Server:");
    println!("  Listen address: {}", config.server.listen_addr);

    println!("\nScraper:");
    println!("  Default base URL: {}", config.scraper.default_base_url);
    println!("  Default links: {}", config.scraper.default_num_links);
    println!("  Max pages: {}", config.scraper.max_pages);
    println!(
        "  Timeouts: request {}s, connect {}s, deadline {}s",
        config.scraper.request_timeout_secs,
        config.scraper.connect_timeout_secs,
        config.scraper.deadline_secs
    );
    println!(
        "  Pagination: {:?} (marker '{}')",
        config.scraper.pagination, config.scraper.pagination_marker
    );
    println!("  Invite marker: {}", config.scraper.invite_marker);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);

    println!("\nSelectors:");
    println!("  Group card: {}", config.selectors.group_card);
    println!("  Card link: {}", config.selectors.card_link);
    println!("  Invite button: {}", config.selectors.invite_button);
    println!("  Category: {}", config.selectors.category);
    println!("  Category name: {}", config.selectors.category_name);

    println!("\n✓ Configuration is valid");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
