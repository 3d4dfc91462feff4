//! Event Design Backend
//!
//! Serves the project store (projects, team rosters, assets and comments) to
//! the design studio front end, persisting it to a SQLite state slot.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod search;
mod store;

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::StateSlot;
use search::SearchIndex;
use store::PersistentStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PersistentStore>,
    pub search: Arc<SearchIndex>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Event Design Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Storage key: {}", config.storage_key);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.persist_all {
        tracing::info!("Persisting assets and comments alongside projects");
    }

    // Open the durable slot and rehydrate the store
    let pool = db::init_database(&config.db_path).await?;
    let store = PersistentStore::open(
        StateSlot::new(pool),
        config.storage_key.clone(),
        config.store_options(),
    )
    .await?;
    let store = Arc::new(store);

    // Build search index from the store
    let search = Arc::new(SearchIndex::open_in_ram()?);
    let projects = store.snapshot().await.projects;
    search.rebuild(&projects).await?;

    let state = AppState {
        store: store.clone(),
        search,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Every mutation already persisted; this catches a failed last write
    store.flush().await?;
    tracing::info!("Store flushed, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Whole store
        .route("/state", get(api::get_state).delete(api::reset_state))
        .route("/stats", get(api::get_stats))
        .route("/settings", get(api::get_settings))
        // Projects
        .route(
            "/projects",
            get(api::list_projects).post(api::create_project),
        )
        .route(
            "/projects/{id}",
            get(api::get_project)
                .put(api::update_project)
                .delete(api::delete_project),
        )
        .route(
            "/current-project",
            get(api::get_current_project).put(api::set_current_project),
        )
        // Team
        .route(
            "/projects/{id}/team",
            get(api::list_team).post(api::add_team_member),
        )
        .route(
            "/projects/{id}/team/{member_id}",
            put(api::update_team_member).delete(api::remove_team_member),
        )
        // Assets & comments
        .route("/assets", get(api::list_assets))
        .route(
            "/comments",
            get(api::list_comments).post(api::create_comment),
        )
        // Search
        .route("/search", get(api::search_projects));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
