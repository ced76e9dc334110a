use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use project_updates::config::{DbConfig, HttpConfig};
use project_updates::server::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting project-updates backend");

    // The status API never touches the database; log the configured target
    // so operators can see where query traffic would go.
    let db_config = DbConfig::from_env();
    info!(
        host = %db_config.host,
        port = db_config.port,
        database = %db_config.database,
        "database target configured"
    );

    let http_config = HttpConfig::from_env();
    let listener = TcpListener::bind(http_config.bind_addr()).await?;
    info!(addr = %http_config.bind_addr(), "status API listening");

    axum::serve(listener, create_router()).await?;

    Ok(())
}
