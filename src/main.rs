use resource_actor::tracing::setup_tracing;
use tokio::net::TcpListener;
use tracing::{error, info};
use user_directory::config::ServerConfig;
use user_directory::env::Env;
use user_directory::http;
use user_directory::lifecycle::{shutdown_signal, UserDirectory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ServerConfig::from_env(&Env::real()).map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e
    })?;

    let directory = UserDirectory::new();
    let seeded = directory.seed_defaults().await?;
    info!(count = seeded.len(), "Sample users ready");

    let addr = config.addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            directory.shutdown().await?;
            return Err(e.into());
        }
    };

    let served = http::serve(listener, directory.client(), shutdown_signal()).await;

    // Stop the store even if the server failed
    directory.shutdown().await?;
    served?;

    info!("Server stopped");
    Ok(())
}
