//! HTTP facade for the QA system.
//!
//! Exposes three endpoints backed by the OpenAI Responses API:
//! web-search answers, a currency assistant with a local conversion tool,
//! and structured product extraction.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use agent_tools::{default_registry, RegistryToolExecutor};
use openai_brain::{QaBrain, ResponsesClient};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Missing credentials stop the process here
    let config = Config::from_env()?;
    info!(addr = %config.addr, model = %config.brain.model, "Starting QA API server");

    let backend = ResponsesClient::new(config.brain.clone())?;
    let tools = RegistryToolExecutor::new(default_registry());
    let brain = QaBrain::new(Arc::new(backend), Arc::new(tools));

    let state = AppState::new(brain);

    let app = routes::router()
        .layer(CorsLayer::very_permissive())
        .with_state(state);

    info!(addr = %config.addr, "QA API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
