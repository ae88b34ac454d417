mod handlers;
mod models;
mod views;

use anyhow::Result;
use axum::{Router, routing::get};
use models::{AppConfig, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn app(state: AppState) -> Router {
    use handlers::oauth::callback_handler;
    use handlers::{health_handler, home_handler};

    // Unmatched paths intentionally fall through to the home page.
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/callback", get(callback_handler))
        .route("/", get(home_handler))
        .fallback(home_handler)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let addr = format!("0.0.0.0:{}", config.port);

    let state = AppState {
        config,
        http: reqwest::Client::new(),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app(state).into_make_service()).await?;

    Ok(())
}
