//! Service analyzer executable
//!
//! Reads a scraped listings spreadsheet, asks Gemini to categorize each
//! listing's services and writes the enriched rows next to the original ones.

mod display;

use analyzer_core::{analyze_file, AnalyzerConfig, BatchOrchestrator, GeminiClient};
use anyhow::Context;
use clap::{Arg, Command};
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    if let Err(e) = run().await {
        eprintln!("Error in main execution: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let matches = Command::new("service-analyzer")
        .version("1.0.0")
        .about("Categorize car-service listings and extract their contacts")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Input spreadsheet (CSV) with an All_Content column")
                .required(true)
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Optional configuration file (TOML, JSON or YAML)")
        )
        .get_matches();

    // Pick up GOOGLE_API_KEY from a local .env like the rest of the environment
    if let Err(e) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {}", e);
    }

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let config = AnalyzerConfig::load(config_path.as_deref())
        .context("Failed to load configuration")?;

    log::info!("Using model {}", config.gemini.model);

    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .context("Input file is required")?;
    let output = config.output.path.clone();

    let client = GeminiClient::new(config.gemini.clone())
        .context("Failed to initialize Gemini client")?;
    let orchestrator = BatchOrchestrator::new(client);

    let report = analyze_file(&orchestrator, &input, &output)
        .await
        .with_context(|| format!("Error processing file {}", input.display()))?;

    print_completion(&output);
    println!("\nSample of processed data:");
    println!("{}", display::sample_table(&report.rows, 5));

    if report.summary.failed_rows > 0 {
        log::warn!(
            "{} of {} rows have empty service fields because the model call failed",
            report.summary.failed_rows,
            report.summary.total_rows
        );
    }

    Ok(())
}

fn print_completion(output: &Path) {
    println!("Analysis completed. Results saved to {}", output.display());
}
