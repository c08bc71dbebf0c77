//! Debitflow server entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use debitflow_core::DebitCalculator;
use debitflow_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,debitflow_core=debug,debitflow_server=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Debitflow Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/debitflow.toml".to_string());

    let server_config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    // The calculator reads the system UTC date; everything else about it
    // is pure, so one instance serves all requests.
    let calculator = Arc::new(DebitCalculator::new());

    let server = Server::new(server_config, calculator);
    server.start().await?;

    Ok(())
}
