//! # procgated — procgate daemon
//!
//! Composition root that wires storage, dispatch and HTTP together and
//! starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Register the procedure catalog and the resource routing table
//! - Construct the dispatcher over the procedure store
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use procgate_adapter_http_axum::auth::BearerAuth;
use procgate_adapter_http_axum::state::AppState;
use procgate_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, ProcedureCatalog, SqliteProcedureStore, customers,
};
use procgate_app::dispatcher::Dispatcher;
use procgate_app::registry::ResourceRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_owned(),
    }
    .build()
    .await?;

    // Procedure catalog + store
    let resource = customers::resource()?;
    let mut catalog = ProcedureCatalog::new();
    customers::register(&mut catalog, &resource)?;
    let store = SqliteProcedureStore::new(db.pool().clone(), catalog);

    // Dispatcher + routing table
    let dispatcher = Dispatcher::new(store);
    let mut registry = ResourceRegistry::new();
    registry.register(resource)?;

    // Bearer auth
    let auth = if config.auth.tokens.is_empty() {
        tracing::warn!("no bearer tokens configured, serving the API open");
        BearerAuth::open()
    } else {
        BearerAuth::tokens(config.auth.tokens.iter().cloned())
    };

    // HTTP
    let state = AppState::new(dispatcher, registry, auth);
    let app = procgate_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(address = %bind_addr, "procgated listening");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process is asked to stop.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
