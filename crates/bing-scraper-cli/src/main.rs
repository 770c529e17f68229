//! Bing Scraper CLI - scrape organic Bing results from the command line.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use bing_scraper_core::country::{DEFAULT_COUNTRY, country_code, supported_countries};
use bing_scraper_core::{BingScraper, ClientConfig, ProxySetting, ScrapeRequest, SearchResult};

/// Bing Scraper - fetch ranked organic results from Bing
#[derive(Parser)]
#[command(name = "bing-scraper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape results for a search term
    Search(SearchArgs),

    /// List supported country codes
    Countries,
}

#[derive(Parser)]
struct SearchArgs {
    /// Search term
    query: String,

    /// Country code (see `countries`)
    #[arg(short, long, default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Number of result pages to fetch
    #[arg(short, long, default_value = "1")]
    pages: usize,

    /// Results requested per page
    #[arg(short = 'n', long, default_value = "30")]
    count: usize,

    /// Seconds to wait between page requests
    #[arg(short, long, default_value = "10")]
    backoff: u64,

    /// Proxy URL (e.g., http://127.0.0.1:8080 or socks5://127.0.0.1:1080)
    #[arg(short = 'x', long)]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    timeout: u64,

    /// Retries for connection errors and timeouts
    #[arg(long, default_value = "0")]
    retries: u32,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Search(args) => run_search(args).await,
        Commands::Countries => list_countries(),
    }
}

fn list_countries() -> Result<()> {
    println!("Supported countries:\n");
    for code in supported_countries() {
        match country_code(code) {
            Some(cc) if !cc.is_empty() => println!("  {:<4} cc={}", code, cc),
            _ => println!("  {:<4} (default, no cc parameter)", code),
        }
    }
    Ok(())
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let config = ClientConfig {
        timeout_secs: args.timeout,
        max_retries: args.retries,
        proxy: ProxySetting::from_option(args.proxy.clone()),
        ..Default::default()
    };
    let scraper = BingScraper::with_config(config).context("Failed to set up HTTP client")?;

    if let Some(proxy) = &args.proxy
        && matches!(args.format, OutputFormat::Text)
    {
        eprintln!("Using proxy: {}", proxy);
    }

    let request = ScrapeRequest::new(&args.query)
        .with_country(&args.country)
        .with_pages(args.pages)
        .with_per_page(args.count)
        .with_backoff(Duration::from_secs(args.backoff));

    let results = scraper
        .scrape(&request)
        .await
        .with_context(|| format!("Scrape for '{}' failed", args.query))?;

    match args.format {
        OutputFormat::Text => print_text(&args.query, &results),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Compact => print_compact(&results),
    }

    Ok(())
}

fn print_text(query: &str, results: &[SearchResult]) {
    println!("Results for '{}' ({} found)\n", query, results.len());
    for result in results {
        println!("{}. {}", result.rank, result.title);
        println!("   {}", result.url);
        if !result.description.is_empty() {
            println!("   {}", result.description);
        }
        println!();
    }
}

fn print_compact(results: &[SearchResult]) {
    for result in results {
        println!("{}\t{}\t{}", result.rank, result.url, result.title);
    }
}
