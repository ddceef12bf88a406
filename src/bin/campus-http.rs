use campus_http::{self, server::ServerConfig};
use clap::Parser;

/// Campus Activities HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Note: We don't initialize tracing here because it's already initialized in the library
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
    };

    println!(
        "Starting campus activities server on {}:{}",
        config.host, config.port
    );
    campus_http::start_with_config(config).await?;

    Ok(())
}
