use std::sync::Arc;
use std::time::Duration;

use books_api::BooksApiClient;
use books_frontend::AppState;
use books_frontend::config::get_configuration;
use books_frontend::services::pdf::PdfRenderer;
use books_frontend::startup::build_router;
use dotenvy::dotenv;
use frontend_core::observability::logging::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("books-frontend", "info");

    let api = Arc::new(
        BooksApiClient::new(
            &configuration.backend.base_url,
            Duration::from_secs(configuration.backend.timeout_secs),
        )
        .map_err(|e| anyhow::anyhow!("Failed to build API client: {}", e))?,
    );
    let pdf = Arc::new(PdfRenderer::new(
        configuration.pdf.wkhtmltopdf_path.clone(),
        Duration::from_secs(configuration.pdf.timeout_secs),
    ));
    let state = AppState::new(api, pdf, Arc::new(configuration.auth.clone()));

    let app = build_router(state);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting books-frontend on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
