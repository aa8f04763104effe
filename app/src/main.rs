#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use nexa_config::Config;
use nexa_core::record::PersonRepo;
use nexa_ingest::{IngestPipeline, StorageEngine};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "nexa")]
#[command(about = "Nexa webhook ingestion backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest one webhook payload from a JSON file
    Ingest {
        /// Path to the payload JSON
        file: PathBuf,
    },
    /// Suggest a stored contact for a networking goal
    Match {
        /// Free-text goal description
        goal: String,
    },
    /// List stored person records as JSON
    List,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

async fn pipeline() -> anyhow::Result<(Arc<StorageEngine>, IngestPipeline)> {
    let config = Config::load()?;
    info!("Loaded config from ~/nexa/config.json");

    let engine = Arc::new(StorageEngine::new(&config.database.url).await?);
    let pipeline = IngestPipeline::new(engine.clone());
    Ok((engine, pipeline))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest { file } => {
            let body = std::fs::read_to_string(&file)?;
            let value: serde_json::Value = serde_json::from_str(&body)?;

            let (_engine, pipeline) = pipeline().await?;
            let report = pipeline.ingest_value(value).await?;
            println!("{} record for nexa_id {}", report.outcome, report.nexa_id);
        }
        Commands::Match { goal } => {
            let (_engine, pipeline) = pipeline().await?;
            let message = pipeline.suggest_match(&goal).await?;
            println!("{message}");
        }
        Commands::List => {
            let (engine, _pipeline) = pipeline().await?;
            let records = engine.list_all().await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::Init => {
            Config::create_config()?;
        }
        Commands::Version => {
            println!("nexa {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
