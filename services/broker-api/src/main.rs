//! Imagery Broker API Server
//!
//! Resolves satellite scene IDs to per-band storage URLs and ranks
//! candidate scenes, keeping the Landsat scene catalog fresh in the
//! background.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use landsat_catalog::spawn_periodic_refresh;
use tokio::sync::broadcast;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use broker_api::build_router;
use broker_api::config::{Args, BrokerConfig};
use broker_api::state::AppState;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
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

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let config = BrokerConfig::from_args(&args)?;

    // Initialize Prometheus metrics exporter
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!(
        listen = %config.listen_addr,
        source = ?config.catalog_source,
        refresh_secs = config.refresh_interval.as_secs(),
        "Starting imagery broker API server"
    );

    let state = Arc::new(AppState::from_config(&config)?.with_metrics(prometheus_handle));

    // Warm up the catalog; serve regardless once the timeout passes
    let warmup = state.catalog.spawn_refresh();
    match tokio::time::timeout(config.warmup_timeout, warmup).await {
        Ok(Ok(Ok(summary))) => info!(entries = summary.entries, "Scene catalog warmed up"),
        Ok(Ok(Err(e))) => warn!(error = %e, "Initial scene catalog refresh failed"),
        Ok(Err(e)) => warn!(error = %e, "Initial scene catalog refresh task failed"),
        Err(_) => warn!(
            timeout_secs = config.warmup_timeout.as_secs(),
            "Scene catalog not ready after warm-up timeout, serving anyway"
        ),
    }

    // Shutdown signal
    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    let refresh_task = spawn_periodic_refresh(
        Arc::clone(&state.catalog),
        config.refresh_interval,
        shutdown_tx.subscribe(),
    );

    // Handle Ctrl+C
    let shutdown_tx_clone = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        shutdown_tx_clone.send(()).ok();
    });

    let app = build_router(state);

    info!("Imagery broker API listening on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    let mut server_shutdown = shutdown_tx.subscribe();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            server_shutdown.recv().await.ok();
        })
        .await
        .context("Server failed")?;

    refresh_task.await.ok();
    info!("Imagery broker API stopped");
    Ok(())
}
