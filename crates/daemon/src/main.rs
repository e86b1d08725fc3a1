//! SimplQ Daemon - Main Entry Point
//!
//! Composition root: loads configuration, opens the store, wires the
//! token sequencer and queue service, and serves JSON-RPC until Ctrl+C.

mod config;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{DaemonConfig, LogFormat};
use simplq_api_rpc::{RpcServer, RpcServerConfig};
use simplq_core::application::{QueueService, TokenSequencer};
use simplq_core::port::id_provider::UuidProvider;
use simplq_core::port::time_provider::SystemTimeProvider;
use simplq_core::port::TokenRepository;
use simplq_infra_sqlite::{
    create_pool, run_migrations, SqliteQueueRepository, SqliteTokenRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("simplq=info"))
        .context("Failed to create env filter")?;

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .try_init(),
    }
    .context("Failed to install tracing subscriber")
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::load().context("Failed to load configuration")?;

    // 2. Initialize logging
    init_logging(config.log_format)?;

    info!("SimplQ daemon v{} starting...", VERSION);
    info!(
        database_url = %config.database_url,
        lock_scope = %config.lock_scope,
        max_connections = config.max_connections,
        "Configuration loaded"
    );

    // 3. Initialize database
    if let Some(parent) = config.database_file().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }

    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 4. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let id_provider = Arc::new(UuidProvider);

    let queue_repo = Arc::new(SqliteQueueRepository::new(
        pool.clone(),
        id_provider.clone(),
    ));
    let token_repo: Arc<dyn TokenRepository> =
        Arc::new(SqliteTokenRepository::new(pool.clone(), id_provider));

    // The one lock object for all enrollments, owned by the sequencer
    let sequencer = Arc::new(TokenSequencer::new(token_repo.clone(), config.lock_scope));

    let service = Arc::new(QueueService::new(
        queue_repo,
        token_repo,
        sequencer,
        time_provider,
    ));

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, service)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}
