//! Folio API Server
//!
//! Serves the portfolio demo endpoints - guestbook messages, the visitor
//! like counter, and the daily recommendation line.
//!
//! Uses an embedded SQLite database when DATABASE_PATH is set; otherwise an
//! in-process store that lives for the process lifetime.

mod error;
mod extractors;
mod handlers;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{delete, get},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use storage::{Database, MemoryStore, Store};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Folio API Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config();
    info!(
        "Config loaded: bind={}, database={}",
        config.bind_address,
        config.database_path.as_deref().unwrap_or("(in-process)")
    );

    let store = select_store(&config).await?;
    info!("Store backend: {}", store.backend());

    let state = AppState { store };

    let app = api_routes()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/messages",
            get(handlers::guestbook::list).post(handlers::guestbook::create),
        )
        .route("/messages/:id", delete(handlers::guestbook::delete))
        .route(
            "/like",
            get(handlers::like::get).post(handlers::like::toggle),
        )
        .route("/recommend", get(handlers::recommend::recommend))
}

/// The one place that branches on configuration: every handler downstream
/// holds the same `Arc<dyn Store>` regardless of backend.
async fn select_store(config: &Config) -> Result<Arc<dyn Store>> {
    match &config.database_path {
        Some(path) => {
            info!("Initializing SQLite database...");
            let db = Database::new(path)
                .await
                .context("Failed to initialize database")?;
            info!("SQLite database initialized at: {}", path);
            Ok(Arc::new(db))
        }
        None => {
            info!("DATABASE_PATH not set, using in-process store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: String,
    database_path: Option<String>,
}

fn load_config() -> Config {
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:16080".to_string());

    let database_path = std::env::var("DATABASE_PATH")
        .ok()
        .filter(|p| !p.is_empty());

    Config {
        bind_address,
        database_path,
    }
}
