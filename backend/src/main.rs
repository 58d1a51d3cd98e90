//! Axum backend for the portfolio/blog site: HTTP API, MongoDB post
//! store, admin auth, and AI article generation.

mod ai;
mod auth;
mod config;
mod contact;
mod handlers;
mod routes;
mod state;
mod store;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("folio_backend=info,tower_http=info")),
        )
        .init();

    let config = config::AppConfig::from_env();

    tracing::info!("Starting folio backend server");
    match &config.store {
        Some(store) => tracing::info!("Article store: mongodb database '{}'", store.database),
        None => tracing::warn!("MONGODB_URI is not set, articles are read-only samples"),
    }
    match &config.generation {
        Some(generation) => tracing::info!("Article generation: model '{}'", generation.model),
        None => tracing::warn!("GEMINI_API_KEY is not set, article generation is disabled"),
    }
    if config.contact_webhook_url.is_none() {
        tracing::warn!("CONTACT_WEBHOOK_URL is not set, contact form is disabled");
    }

    let app_state = state::AppState::new(&config).await?;
    let app = routes::create_router(app_state);

    // Development: 0.0.0.0 for direct access
    // Production behind a reverse proxy: either 0.0.0.0 or 127.0.0.1 works
    let addr = format!("{}:{}", config.bind_addr, config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
