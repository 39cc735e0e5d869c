//! # arkspec CLI
//!
//! Looks up processor specifications from the command line.
//!
//! ```text
//! arkspec i7-9700
//! arkspec --format json xeon gold 6248
//! RUST_LOG=arkspec=debug arkspec --concurrency 1 i5
//! ```
//!
//! Prints a canned reply for junk queries, a "no results" line when the
//! catalog matches nothing, and one card per record otherwise.

mod render;
mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use arkspec::catalog::{CatalogConfig, MarkupMap};
use arkspec::pipeline::{Pipeline, QueryOutcome};
use arkspec::router::RouterConfig;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Look up processor specifications in the product catalog",
    long_about = None
)]
struct Cli {
    /// Search query
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Identifier of whoever issued the query
    #[arg(short, long, default_value = "cli")]
    requester: String,

    /// Output format (text|json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Whole-query timeout in seconds
    #[arg(short, long, default_value = "15")]
    timeout: u64,

    /// Number of detail pages fetched at once
    #[arg(short, long, default_value = "4")]
    concurrency: usize,

    /// Catalog origin
    #[arg(long)]
    base_url: Option<String>,

    /// JSON file with an alternate markup map
    #[arg(long)]
    markup_map: Option<PathBuf>,

    /// Export traces and metrics over OTLP
    #[arg(long)]
    otlp: bool,
}

impl Cli {
    fn catalog_config(&self) -> anyhow::Result<CatalogConfig> {
        let mut builder = CatalogConfig::builder()
            .query_timeout(Duration::from_secs(self.timeout))
            .concurrency(self.concurrency);
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(path) = &self.markup_map {
            builder = builder.markup(MarkupMap::from_json_file(path)?);
        }
        Ok(builder.build())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _otel = telemetry::init_tracing_subscriber(cli.otlp)?;

    let config = cli.catalog_config()?;
    let pipeline = Pipeline::http(&config, &RouterConfig::default())?;
    let query = cli.query.join(" ");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message(format!("Searching for {}...", query));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = pipeline.run_query(&query, &cli.requester).await;
    spinner.finish_and_clear();

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Query failed: {}", e);
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&outcome)?),
        _ => match outcome {
            QueryOutcome::Canned(response) => println!("{}", response.text),
            QueryOutcome::NoResults { query } => {
                println!("{}", QueryOutcome::no_results_message(&query))
            }
            QueryOutcome::Results(results) => {
                let cards: Vec<String> = results.entries().iter().map(render::card).collect();
                println!("{}", cards.join("\n"));
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
