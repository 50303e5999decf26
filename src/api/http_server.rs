use axum::{
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::devices::DeviceStore;
use crate::search::SearchService;

use super::guides::guides_handler;
use super::register::register_handler;
use super::search::search_handler;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub search: Arc<SearchService>,
    pub devices: Arc<dyn DeviceStore>,
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        search: Arc<SearchService>,
        devices: Arc<dyn DeviceStore>,
    ) -> Self {
        Self {
            config,
            search,
            devices,
        }
    }
}

/// Build the application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Bundled catalog
        .route("/guides", get(guides_handler))
        // Search pipeline
        .route("/search", post(search_handler))
        // Device registration
        .route("/register", post(register_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve the HTTP API
pub async fn start_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    axum::response::Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
