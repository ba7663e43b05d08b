//! Seascope: marine data search from the command line.
//! Entry point for the `seascope` binary.

mod commands;
mod config;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use seascope_client::HttpBackend;

#[derive(Debug, Parser)]
#[command(name = "seascope", version, about = "Search marine data, species and datasets")]
struct Cli {
    /// Path to seascope.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the config file
    #[arg(long, global = true, env = "SEASCOPE_BACKEND_URL")]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ask a free-text question about marine species, places or data
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Run one of the suggested quick-search topics (lists them when omitted)
    Topic { name: Option<String> },
    /// Analyze a marine image, or a description of one
    Analyze {
        /// Image file to classify
        #[arg(long)]
        image: Option<PathBuf>,
        /// What the image shows
        #[arg(long)]
        describe: Option<String>,
        /// Send the description instead of uploading the image
        #[arg(long)]
        use_description: bool,
    },
    /// List datasets of a domain, optionally filtered
    Datasets {
        #[arg(long)]
        domain: Option<String>,
        /// Case-insensitive match on name, provider or coverage
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show the first rows of a dataset
    Preview {
        domain: String,
        #[arg(short = 'n', long)]
        rows: Option<u32>,
    },
    /// List the columns of a dataset
    Columns { domain: String },
    /// Page through a dataset
    Data {
        domain: String,
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// Check the backend and its image model
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Config is read before logging starts; a load problem is reported once
    // the subscriber is up.
    let (config, load_error) = match config::Config::load(cli.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => (config::Config::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    if let Some(e) = load_error {
        warn!("Could not load configuration: {e}; using defaults");
    }

    let base_url = cli.backend_url.as_deref().unwrap_or(&config.backend.base_url);
    let backend = Arc::new(HttpBackend::with_timeout(
        base_url,
        Duration::from_secs(config.backend.timeout_secs),
    )?);
    debug!(base_url = %backend.base_url(), "backend configured");

    let ok = match cli.command {
        Command::Search { query } => commands::search(backend, &query.join(" ")).await,
        Command::Topic { name } => commands::topic(backend, name.as_deref()).await,
        Command::Analyze { image, describe, use_description } => {
            commands::analyze(backend, image.as_deref(), describe, use_description).await?
        }
        Command::Datasets { domain, filter } => {
            let domain = domain.unwrap_or_else(|| config.catalog.default_domain.clone());
            commands::datasets(backend.as_ref(), domain, filter).await
        }
        Command::Preview { domain, rows } => {
            let rows = rows.unwrap_or(config.catalog.preview_rows);
            commands::preview(backend.as_ref(), &domain, rows).await
        }
        Command::Columns { domain } => commands::columns(backend.as_ref(), &domain).await,
        Command::Data { domain, limit, offset } => {
            commands::data(backend.as_ref(), &domain, limit, offset).await
        }
        Command::Status => commands::status(backend.as_ref()).await,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
