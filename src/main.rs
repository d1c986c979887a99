use anyhow::{Context, Result};
use cypress_mock_api::{ResponseGenerator, router};
use cypress_mock_common::Config;
use cypress_mock_store::load_document;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Also picks up `log` records from the store crate.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env()?;
    info!("Starting Cypress dashboard mock");

    let document = load_document(&config.document_path)
        .with_context(|| format!("cannot start without {:?}", config.document_path))?;

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(ResponseGenerator::new(document)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Cypress dashboard mock stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
