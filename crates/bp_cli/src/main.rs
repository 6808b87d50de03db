use anyhow::Context;
use bp_core::{HeadlineSource, TextModel};
use bp_inference::PostGenerator;
use bp_news::NewsApiClient;
use bp_web::{create_app, AppState};
use std::sync::Arc;
use tracing::info;

mod config;

use config::AppConfig;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("👋 Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bp_core::logging::init_logging();

    // Credentials are checked before anything is bound.
    let config = AppConfig::from_env().context("failed to load configuration")?;

    let news: Arc<dyn HeadlineSource> = Arc::new(
        NewsApiClient::new(config.news.clone()).context("failed to build news client")?,
    );
    info!("📰 News source initialized (using {})", news.name());

    let model = bp_inference::create_model(config.inference.clone())
        .context("failed to build generation client")?;
    info!("🧠 Inference model initialized (using {})", model.name());

    let app = create_app(AppState::new(PostGenerator::new(news, model)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("🚀 Listening on http://{}", config.bind_addr);
    info!("  GET  /               status");
    info!("  POST /, /generate-post  generate a post");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
