//! Swarmscope CLI
//!
//! Analyzes simulator scalar results for a swarm-routing study:
//! selects `.sca` files, ingests them into the result store, prints a
//! statistics summary and writes CSV/JSON artifacts.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use swarmscope::config::{generate_default_config, Config};
use swarmscope::report::{render_summary, ReportGenerator};
use swarmscope::select::select_sca_files;
use swarmscope::store::{ResultStore, StoreError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swarmscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze swarm-routing simulation scalar results")]
struct Cli {
    /// Simulation configuration name (e.g. DroneSwarm5km); omit for all
    #[arg(long)]
    config: Option<String>,

    /// Analyze all configurations
    #[arg(long)]
    all: bool,

    /// Results directory (overrides config file)
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// Output directory for artifacts (overrides config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Print the default config template and exit
    #[arg(long)]
    gen_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.gen_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let config = match &cli.config_file {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config file {:?}", path))?,
        None => Config::load_default(),
    };

    init_logging(&config);
    tracing::info!("Swarmscope v{}", env!("CARGO_PKG_VERSION"));

    let results_dir = cli.results_dir.unwrap_or_else(|| config.results.dir.clone());
    let config_name = if cli.all { None } else { cli.config.as_deref() };

    let files = select_sca_files(&results_dir, config_name)
        .with_context(|| format!("selecting result files in {:?}", results_dir))?;
    tracing::info!("Selected {} result file(s) in {:?}", files.len(), results_dir);

    let mut store = ResultStore::new();
    let batch = match store.ingest_all(&files) {
        Ok(batch) => batch,
        Err(StoreError::NoInputFiles) => {
            anyhow::bail!(
                "no .sca files found in {:?} (run simulations first)",
                results_dir
            );
        }
        Err(e) => return Err(e).context("ingesting result files"),
    };
    tracing::info!("{}", batch);

    let mut report_config = config.report.to_report_config();
    if let Some(output) = cli.output {
        report_config.output_dir = output;
    }
    // Keep artifacts of different configurations apart, unless the caller
    // already pointed the output at a configuration-specific directory
    if let Some(name) = config_name {
        if !report_config.output_dir.to_string_lossy().contains(name) {
            report_config.output_dir = report_config.output_dir.join(name);
        }
    }

    print!("{}", render_summary(&store, &report_config.metrics));

    let generator = ReportGenerator::new(report_config);
    let written = generator.generate(&store).context("writing report artifacts")?;
    for path in &written {
        tracing::info!("Saved {:?}", path);
    }
    tracing::info!("Analysis complete: {} artifact(s)", written.len());

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("swarmscope={}", config.logging.level)),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
