use dotenvy::dotenv;
use user_service::config::Config;
use user_service::observability::init_tracing;
use user_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing("info");

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Failed to read configuration: {}", e);
        e
    })?;

    let app = Application::build(config).await?;
    app.run_until_stopped().await
}
