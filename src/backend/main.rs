/**
 * ChatNest Server Entry Point
 *
 * Loads `.env`, reads the configuration from the environment, and serves
 * the API until the process is stopped.
 */

use chatnest::backend::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing, INFO unless RUST_LOG says otherwise
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = ServerConfig::from_env().inspect_err(|e| {
        tracing::error!("[STARTUP] Invalid configuration: {}", e);
    })?;

    // Create the Axum app
    let app = create_app(&config).await.inspect_err(|e| {
        tracing::error!("[STARTUP] {}", e);
    })?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
