//! Application startup and lifecycle management.

use crate::config::Config;
use crate::handlers;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/orders", get(handlers::list_orders))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
}

/// Application container for managing server lifecycle.
///
/// The listener is bound in `build` and held for the process's entire life;
/// a bind failure is fatal.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let address = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("{} listening on port {}", config.service_name, port);

        Ok(Self {
            port,
            listener,
            router: build_router(),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
