use anyhow::{Context, Result};
use foodform::config::{Config, CONFIG_FILE};
use foodform_server::{app, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var("FOODFORM_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });
    let config = config.with_overrides(|key| std::env::var(key).ok())?;

    let addr = config.bind_addr();
    if config.dev.live_reload {
        info!("Live reload: enabled");
    }

    let app = app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
