//! store-server — pizza order hub
//!
//! Accepts orders, forwards them to the kitchen, ingests kitchen/delivery
//! status events and pushes every change to connected dashboards.

use store_server::{Config, Server, init_logger_with};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger_with(Some(&config.log_level), config.log_json);

    tracing::info!(
        port = config.http_port,
        environment = %config.environment,
        "Starting store-server"
    );

    Server::new(config).run().await?;
    Ok(())
}
