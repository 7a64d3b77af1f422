mod client;
mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logger();

    let config = Config::from_env()?;

    let backend = startup::setup_backend_client(&config)?;
    let session_layer = startup::setup_session_layer(&config);

    tracing::info!(
        addr = %config.bind_addr,
        backend = %backend.base_url(),
        "Starting server"
    );

    let app = router::app(AppState::new(backend), session_layer);
    let listener = TcpListener::bind(config.bind_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }

    tracing::info!("Shutting down");
}
