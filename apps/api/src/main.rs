mod auth;
mod career;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod progress;
mod routes;
mod state;
mod store;
mod students;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::firebase::{FirebaseCredentials, FirebaseVerifier};
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting {} API v{} ({})",
        config.project_name,
        env!("CARGO_PKG_VERSION"),
        config.env
    );

    // Initialize PostgreSQL document store
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(PgStore::new(pool));

    // Initialize identity verifier
    let project_id = match &config.firebase_project_id {
        Some(id) => id.clone(),
        None => FirebaseCredentials::load(&config.firebase_key_path)?.project_id,
    };
    let verifier = Arc::new(FirebaseVerifier::new(project_id.clone()));
    info!("Identity verifier initialized (project: {project_id})");

    // Initialize completion client
    let llm = Arc::new(OpenAiClient::new(config.openai_api_key.clone())?);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        store,
        llm,
        verifier,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
