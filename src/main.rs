// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::species_directory::SpeciesDirectory;
use crate::application::track_my_fish_service::{Store, TrackMyFishService};
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::fishbase_client::FishbaseClient;
use crate::infrastructure::postgres_repository::PostgresRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{api_router, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    tracing::info!(
        server_port = app_config.server.port,
        static_dir = ?app_config.server.static_dir,
        database_name = %app_config.database.name,
        database_host = %app_config.database.host,
        database_port = app_config.database.port,
        database_username = %app_config.database.username,
        fishbase_enabled = app_config.fishbase.enabled,
        "Config initialised"
    );

    // Create repository (infrastructure layer)
    let repository = Arc::new(PostgresRepository::connect(&app_config.database).await?);

    let species_directory: Option<Arc<dyn SpeciesDirectory>> = if app_config.fishbase.enabled {
        Some(Arc::new(FishbaseClient::new(
            reqwest::Client::new(),
            app_config.fishbase.base_url.clone(),
        )))
    } else {
        None
    };

    // Create service (application layer)
    let service = TrackMyFishService::new(
        Store::from_repository(repository.clone()),
        Store::from_repository(repository.clone()),
        Store::from_repository(repository),
        species_directory,
    );

    let state = Arc::new(AppState { service });

    // Build router (presentation layer)
    let mut router = Router::new()
        .route("/healthz", get(health_check))
        .nest("/api/v1alpha1", api_router())
        .with_state(state);

    if let Some(static_dir) = &app_config.server.static_dir {
        // Unknown paths fall back to index.html so client-side routes resolve.
        let index = format!("{}/index.html", static_dir.trim_end_matches('/'));
        router = router.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)));
    }

    let router = router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], app_config.server.port));
    tracing::info!(%addr, "Starting trackmyfish service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
