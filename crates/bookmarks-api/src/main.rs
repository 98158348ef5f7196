//! bookmarks-api - HTTP API server for bookmarks

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use bookmarks_api::{
    build_router, logging::init_tracing, AppState, ServerConfig, StorageBackend,
};
use bookmarks_core::BookmarkRepository;
use bookmarks_db::{log_pool_metrics, Database, InMemoryBookmarkRepository, PoolConfig};

/// How often pool health is logged.
const POOL_METRICS_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    let _log_guard = init_tracing(&config.log);

    let bookmarks: Arc<dyn BookmarkRepository> = match config.storage {
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let db = Database::connect_with_config(
                &config.database_url,
                PoolConfig::new().max_connections(config.db_max_connections),
            )
            .await?;
            info!("Database connected");

            if config.run_migrations {
                info!("Running database migrations...");
                db.migrate().await?;
                info!("Database migrations complete");
            }

            let pool = db.pool().clone();
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(POOL_METRICS_INTERVAL);
                loop {
                    ticker.tick().await;
                    log_pool_metrics(&pool);
                }
            });

            Arc::new(db.bookmarks)
        }
        StorageBackend::Memory => {
            info!("Using in-memory bookmark storage; data is lost on shutdown");
            Arc::new(InMemoryBookmarkRepository::new())
        }
    };

    let state = AppState::new(bookmarks, &config.api_token);
    let app = build_router(state, &config.http);

    let addr = config.socket_addr()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
