//! corpscan CLI
//!
//! Command-line front-end for the hierarchical subsidiary search: runs a
//! traversal against an HTTP lookup endpoint or a local JSON dataset, prints
//! the resulting hierarchy, and optionally exports it as TXT or JSON.

#![allow(clippy::print_stdout)] // Reports are the CLI's primary output

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use dialoguer::Input;
use tracing::info;

use corpscan_cli::report;
use corpscan_core::render::render_report;
use corpscan_core::tracing_init::init_tracing;
use corpscan_core::{FrontierSearch, LookupProvider, SearchConfig};
use corpscan_provider::{HttpLookupProvider, HttpProviderConfig, StaticLookupProvider};

#[derive(Parser, Debug)]
#[command(name = "corpscan")]
#[command(version, about = "Company subsidiary hierarchy research tool")]
struct Cli {
    /// Root company name (prompted interactively when omitted)
    company: Option<String>,

    /// Maximum traversal depth (1 = direct subsidiaries only)
    #[arg(long, default_value_t = 3, env = "CORPSCAN_MAX_DEPTH")]
    max_depth: u32,

    /// Pause each worker takes before its lookup, in seconds
    #[arg(long, default_value_t = 2.0, env = "CORPSCAN_DELAY_SECS")]
    delay_secs: f64,

    /// Maximum concurrent lookups
    #[arg(long, default_value_t = 2, env = "CORPSCAN_MAX_WORKERS")]
    max_workers: usize,

    /// Per-lookup timeout in seconds
    #[arg(long, default_value_t = 30, env = "CORPSCAN_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Subsidiary lookup endpoint base URL
    #[arg(long, env = "CORPSCAN_ENDPOINT", conflicts_with = "dataset")]
    endpoint: Option<String>,

    /// Bearer token for the lookup endpoint
    #[arg(long, env = "CORPSCAN_API_TOKEN")]
    api_token: Option<String>,

    /// JSON dataset file mapping company names to subsidiary lists (offline mode)
    #[arg(long, env = "CORPSCAN_DATASET")]
    dataset: Option<PathBuf>,

    /// Print the hierarchy as pretty JSON instead of the indented tree
    #[arg(long)]
    json: bool,

    /// Write the text report to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the text report to `<company>_subsidiary_hierarchy.txt`
    #[arg(long, conflicts_with = "output")]
    save: bool,

    /// Write the hierarchy as pretty JSON to this file
    #[arg(long)]
    json_output: Option<PathBuf>,

    /// Emit structured JSON log lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing("corpscan=info", cli.log_json);

    let company = match cli.company {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("Enter Company Name")
            .interact_text()
            .context("failed to read company name")?,
    };
    let company = company.trim().to_string();
    if company.is_empty() {
        anyhow::bail!("company name must not be empty");
    }
    if cli.delay_secs <= 0.0 {
        anyhow::bail!("--delay-secs must be positive");
    }

    let provider: Arc<dyn LookupProvider> = if let Some(path) = &cli.dataset {
        Arc::new(
            StaticLookupProvider::from_json_file(path)
                .with_context(|| format!("failed to load dataset {}", path.display()))?,
        )
    } else {
        let base_url = cli
            .endpoint
            .clone()
            .context("either --endpoint or --dataset is required")?;
        Arc::new(HttpLookupProvider::new(&HttpProviderConfig {
            base_url,
            api_token: cli.api_token.clone(),
        })?)
    };

    let config = SearchConfig {
        max_depth: cli.max_depth,
        delay_between_searches: Duration::from_secs_f64(cli.delay_secs),
        max_workers: cli.max_workers,
        lookup_timeout: Duration::from_secs(cli.timeout_secs),
    };
    let search = FrontierSearch::new(provider, config)?;

    let started = Instant::now();
    let hierarchy = search.search(&company).await;
    let elapsed = started.elapsed();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&hierarchy)?);
    } else {
        print!("{}", render_report(&hierarchy));
    }
    info!(
        company = %hierarchy.company,
        total = hierarchy.total_companies_found,
        elapsed_secs = format!("{:.1}", elapsed.as_secs_f64()),
        "search completed"
    );

    let output_path = cli
        .output
        .or_else(|| cli.save.then(|| report::default_report_path(&hierarchy.company)));
    if let Some(path) = output_path {
        report::save_report(&hierarchy, &path)?;
        println!("\nHierarchy saved to: {}", path.display());
    }
    if let Some(path) = cli.json_output {
        report::save_json(&hierarchy, &path)?;
        println!("JSON saved to: {}", path.display());
    }

    Ok(())
}
