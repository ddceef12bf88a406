//! Campus Activities HTTP API Server
//!
//! This crate provides an HTTP API for listing extracurricular activities
//! and managing their participants.

pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};

/// Start the activities HTTP server with the default configuration
pub async fn start() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Start the server with default configuration
    start_server(ServerConfig::default()).await
}

/// Start the activities HTTP server with a custom configuration
pub async fn start_with_config(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Start the server with the provided configuration
    start_server(config).await
}
