//! Web layer module
//!
//! HTTP interface of the add-on. Handlers are thin and delegate to the
//! [`CatalogService`]; state is immutable and built once at start-up.
//!
//! Routes:
//! - `GET /manifest.json`
//! - `GET /catalog/{type}/{id}.json` and `GET /catalog/{type}/{id}/{extra}.json`
//! - `GET /meta/{type}/{id}.json` and `GET /meta/{type}/{id}/{extra}.json`
//! - `GET /stream/{type}/{id}.json`
//! - `GET /health`

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

use crate::{config::Config, services::CatalogService};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;

pub use responses::ErrorResponse;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    /// Application start time for uptime calculation
    pub start_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(catalog_service: CatalogService) -> Self {
        Self {
            catalog_service,
            start_time: chrono::Utc::now(),
        }
    }
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: &Config, catalog_service: CatalogService) -> Result<Self> {
        let addr: SocketAddr = config
            .bind_address()
            .parse()
            .with_context(|| format!("Invalid listen address {}", config.bind_address()))?;
        let app = create_router(AppState::new(catalog_service));

        Ok(Self { app, addr })
    }

    /// Serve until SIGINT/SIGTERM
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr)
            .await
            .with_context(|| format!("Failed to bind to {}", self.addr))?;

        tracing::info!("Add-on manifest available at http://{}/manifest.json", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/manifest.json", get(handlers::manifest::get_manifest))
        .route(
            "/catalog/{content_type}/{id}",
            get(handlers::catalog::get_catalog),
        )
        .route(
            "/catalog/{content_type}/{id}/{extra}",
            get(handlers::catalog::get_catalog),
        )
        .route("/meta/{content_type}/{id}", get(handlers::meta::get_meta))
        .route(
            "/meta/{content_type}/{id}/{extra}",
            get(handlers::meta::get_meta),
        )
        .route(
            "/stream/{content_type}/{id}",
            get(handlers::stream::get_streams),
        )
        .fallback(handlers::health::fallback)
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .with_state(state)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {
                        tracing::info!("Received SIGTERM, shutting down gracefully");
                    }
                    _ = sigint.recv() => {
                        tracing::info!("Received SIGINT (Ctrl+C), shutting down gracefully");
                    }
                }
            }
            _ => {
                tracing::warn!("Failed to install signal handlers; graceful shutdown disabled");
                std::future::pending::<()>().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down gracefully");
    }
}
