use anyhow::Result;
use event_planner_web::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("event_planner_web=info".parse()?),
        )
        .init();

    info!("Starting event planner web front-end");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Serving locales {:?} (default '{}') against {}",
        config
            .locales
            .supported()
            .iter()
            .map(|language| language.code())
            .collect::<Vec<_>>(),
        config.locales.default_language(),
        config.api_base_url
    );

    server::run(config).await
}
