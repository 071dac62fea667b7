use std::net::SocketAddr;
use std::sync::Arc;

use dvdshelf_db::store::{MemoryStore, PgStore};
use dvdshelf_omdb::{MovieLookup, OmdbHttp, OmdbLookup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dvdshelf_api::config::ServerConfig;
use dvdshelf_api::router::build_app_router;
use dvdshelf_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dvdshelf_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Metadata lookup ---
    let transport = OmdbHttp::new(&config.omdb).expect("Failed to build OMDB HTTP client");
    let lookup: Arc<dyn MovieLookup> = Arc::new(OmdbLookup::new(transport));

    // --- Store ---
    let state = match config.database_url.clone() {
        Some(database_url) => {
            let pool = dvdshelf_db::create_pool(&database_url, config.database_max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            dvdshelf_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            dvdshelf_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let store = Arc::new(PgStore::new(pool.clone()));
            AppState::new(store, lookup, config.clone(), Some(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; using the in-memory store (data is lost on exit)");
            AppState::new(Arc::new(MemoryStore::new()), lookup, config.clone(), None)
        }
    };
    let pool = state.pool.clone();

    // --- Router ---
    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped accepting connections, cleaning up");
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }
    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
