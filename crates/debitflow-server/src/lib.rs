//! # Debitflow Server
//!
//! REST server for the Debitflow loan debit scheduler.
//!
//! ## Features
//!
//! - `POST /get_next_debit` computing a loan's next debit date and amount
//! - Health endpoint
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use debitflow_server::{Server, ServerConfig};
//!
//! let server = Server::new(config, calculator);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use debitflow_core::DebitCalculator;

pub use config::ServerConfig;

/// The Debitflow server.
pub struct Server {
    config: ServerConfig,
    calculator: Arc<DebitCalculator>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, calculator: Arc<DebitCalculator>) -> Self {
        Self { config, calculator }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.calculator.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Debitflow server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
