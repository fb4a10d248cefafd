use user_service::config::{Config, ServerConfig};
use user_service::startup::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the service on an ephemeral port and run it in the background.
    pub async fn spawn() -> Self {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            service_name: "user-service".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
        }
    }
}
