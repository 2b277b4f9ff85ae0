//! SmartAgroX Satellite API Server
//!
//! Serves synthetic NDVI statistics and placeholder imagery URLs.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use satellite_api::config::ServiceConfig;
use satellite_api::{create_router, AppState};

/// SmartAgroX Satellite API Server
#[derive(Parser, Debug)]
#[command(name = "satellite-api")]
#[command(about = "Synthetic NDVI and satellite imagery placeholder server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8000", env = "SATELLITE_API_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "SATELLITE_API_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// Path to the YAML config file
    #[arg(
        short,
        long,
        default_value = "config/satellite-api.yaml",
        env = "SATELLITE_API_CONFIG"
    )]
    config: PathBuf,

    /// Seed for reproducible synthetic data
    #[arg(long, env = "SATELLITE_API_SEED")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting SmartAgroX satellite API");

    let config = ServiceConfig::load_from_file(&args.config)?;

    let mut state = AppState::new(config, args.seed);
    if args.seed.is_some() {
        info!(seed = args.seed, "Using seeded random source");
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => warn!("Prometheus recorder not installed: {}", e),
    }

    let app = create_router(Arc::new(state));

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;

    info!("Satellite API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
