//! CLI entry point for the diet impacts summarizer.
//!
//! Provides subcommands for summarizing a survey dataset into per-bucket
//! means, listing the category labels it contains, and printing
//! chart-normalized values.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use diet_impacts::analyzers::normalize::{NormalizationWeights, diet_age_records, normalize};
use diet_impacts::analyzers::types::Summary;
use diet_impacts::fetch::BasicClient;
use diet_impacts::output::{print_json, write_summary};
use diet_impacts::pipeline;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "diet_impacts")]
#[command(about = "Summarize the environmental impacts of diet survey data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a survey dataset from a file or URL into a CSV of bucket means
    Summarize {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// CSV file to write the summary to
        #[arg(short, long, default_value = "summary.csv")]
        output: String,
    },
    /// List the diet-group, gender, and age-group labels present in a dataset
    Labels {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,
    },
    /// Print chart-normalized diet-by-age values as JSON
    Normalize {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/diet_impacts.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("diet_impacts.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { source, output } => {
            let summary = load(&source).await?;
            write_summary(&output, &summary.records)?;
            info!(
                records = summary.records.len(),
                output = %output,
                "Summary CSV written"
            );
        }
        Commands::Labels { source } => {
            let summary = load(&source).await?;

            info!(
                diet_groups = summary.diet_groups.len(),
                genders = summary.genders.len(),
                age_groups = summary.age_groups.len(),
                "Label summary"
            );

            for label in &summary.diet_groups {
                info!(label = %label, dimension = "diet_group", "Label");
            }
            for label in &summary.genders {
                info!(label = %label, dimension = "gender", "Label");
            }
            for label in &summary.age_groups {
                info!(label = %label, dimension = "age_group", "Label");
            }
        }
        Commands::Normalize { source } => {
            let summary = load(&source).await?;
            let subset = diet_age_records(&summary);
            let normalized = normalize(&subset, &NormalizationWeights::default());
            print_json(&normalized)?;
        }
    }

    Ok(())
}

/// Runs the pipeline and unwraps the outcome into a summary or a terminal error.
async fn load(source: &str) -> Result<Summary> {
    let client = BasicClient::new();
    let outcome = pipeline::run(&client, source).await;

    match outcome.summary {
        Some(summary) => Ok(summary),
        None => Err(anyhow!(
            outcome
                .error
                .unwrap_or_else(|| "dataset load failed".to_string())
        )),
    }
}
