//! Organization data web server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http::server (router, middleware)          │
//!                           │        │                                     │
//!                           │        ▼                                     │
//!                           │   http::handlers ──▶ data::dispatch          │
//!                           │        │                   │                 │
//!                           │        │                   ▼                 │
//!                           │        │            data::loader ──▶ data/*.json
//!                           │        ▼                                     │
//!     Client Response       │   render::templates (HTML) or JSON body      │
//!     ◀─────────────────────┼────────┘                                     │
//!                           │                                              │
//!                           │  config · observability · lifecycle          │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use sysfas::config::{load_config, validate_config, ConfigError, ServerConfig};
use sysfas::lifecycle::{signals, startup, Shutdown};
use sysfas::observability::logging;

#[derive(Parser)]
#[command(name = "sysfas")]
#[command(about = "Serve organization data as HTML pages and JSON", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override data.dir.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("sysfas v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        data_dir = %config.data.dir.display(),
        templates_dir = %config.web.templates_dir.display(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_shutdown_signal().await;
        trigger.trigger();
    });

    startup::run(config, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
