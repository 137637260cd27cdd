use std::{sync::Arc, time::Duration};

use videosnow::api::{create_router, AppState};
use videosnow::config::Config;
use videosnow::services::providers::ytdlp::YtDlpExtractor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    // Wire up the extractor and application state
    let timeout = config.extractor_timeout_secs.map(Duration::from_secs);
    let extractor = YtDlpExtractor::new(config.ytdlp_bin.clone(), timeout);
    let state = AppState::new(Arc::new(extractor));

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, ytdlp_bin = %config.ytdlp_bin, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
