//! Cross-service workflow integration tests library.
//!
//! Spawns both services in-process on ephemeral ports so end-to-end tests
//! can exercise the full HTTP surface without external orchestration. The
//! services stay fully independent: this crate links their libraries only
//! to start them, never to make them talk to each other.

use anyhow::Result;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Handle to one spawned service.
pub struct ServiceHandle {
    pub base_url: String,
    pub port: u16,
}

/// Context for workflow tests with both services running.
pub struct WorkflowTestContext {
    pub users: ServiceHandle,
    pub orders: ServiceHandle,
    pub client: reqwest::Client,
}

impl WorkflowTestContext {
    /// Spawn both services and return a context connected to them.
    pub async fn new() -> Result<Self> {
        init_tracing();

        let users = spawn_user_service().await?;
        let orders = spawn_order_service().await?;

        tracing::debug!(
            "user-service at {}, order-service at {}",
            users.base_url,
            orders.base_url
        );

        Ok(Self {
            users,
            orders,
            client: reqwest::Client::new(),
        })
    }
}

async fn spawn_user_service() -> Result<ServiceHandle> {
    let config = user_service::config::Config {
        server: user_service::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        service_name: "user-service".to_string(),
    };

    let app = user_service::startup::Application::build(config).await?;
    let port = app.port();

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    Ok(ServiceHandle {
        base_url: format!("http://127.0.0.1:{}", port),
        port,
    })
}

async fn spawn_order_service() -> Result<ServiceHandle> {
    let config = order_service::config::Config {
        server: order_service::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        service_name: "order-service".to_string(),
    };

    let app = order_service::startup::Application::build(config).await?;
    let port = app.port();

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    Ok(ServiceHandle {
        base_url: format!("http://127.0.0.1:{}", port),
        port,
    })
}
