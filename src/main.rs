mod app;
mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use crate::{
    config::Config,
    services::UserStore,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("axum_secrets=debug,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = Config::load().context("load configuration")?;

    let store = UserStore::connect(&config.database)
        .await
        .context("connect to database")?;
    if config.database.create_schema {
        store.init_schema().await.context("create users table")?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = app::build_router(AppState::new(store, config)).context("build router")?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
