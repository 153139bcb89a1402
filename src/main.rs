use std::sync::Arc;

use care_platform_api::config;
use care_platform_api::gateway::HttpGateway;
use care_platform_api::handlers::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up GATEWAY_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Care Platform API in {:?} mode", config.environment);

    let gateway = HttpGateway::new(&config.gateway)?;
    let state = AppState {
        gateway: Arc::new(gateway),
    };

    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(config.api.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
