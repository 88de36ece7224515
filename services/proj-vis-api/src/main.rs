//! Projection preview server.
//!
//! Samples rectangular coordinate grids through a CRS transform and returns
//! them as paginated JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use proj_vis_api::config::{ServerConfig, DEFAULT_LISTEN_ADDR};
use proj_vis_api::state::AppState;

/// Projection preview server
#[derive(Parser, Debug)]
#[command(name = "proj-vis-api")]
#[command(about = "Samples coordinate grids through map projections")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR, env = "PROJ_VIS_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "PROJ_VIS_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// CRS used when a request omits projFrom or projTo
    #[arg(long, default_value = proj_common::DEFAULT_CRS, env = "PROJ_VIS_DEFAULT_CRS")]
    default_crs: String,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = match runtime_builder.build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    runtime.block_on(async move {
        init_tracing(&args.log_level);

        if let Err(e) = run_server(args).await {
            tracing::error!("Server failed: {:#}", e);
            std::process::exit(1);
        }
    });
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();
}

async fn run_server(args: Args) -> Result<()> {
    info!("Starting projection preview server");

    let config = ServerConfig::new(&args.listen, &args.default_crs)?;
    let addr = config.listen_addr;
    let state = Arc::new(AppState::new(config));

    let app = proj_vis_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
