mod chat;
mod config;
mod errors;
mod knowledge;
mod llm_client;
mod models;
mod relay;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::knowledge::KnowledgeBase;
use crate::llm_client::{HfClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    let knowledge = Arc::new(KnowledgeBase::builtin()?);
    info!(
        "Knowledge base loaded: {} domains, job dedup {:?}",
        knowledge.len(),
        config.job_dedup
    );

    let generator: Option<Arc<dyn TextGenerator>> = match &config.hf_api_token {
        Some(token) => {
            let client = HfClient::new(
                config.hf_api_url.clone(),
                token.clone(),
                config.hf_max_new_tokens,
            )?;
            info!("LLM client initialized (endpoint: {})", client.api_url());
            Some(Arc::new(client))
        }
        None => {
            warn!("HF_API_TOKEN not set, answering with rule-based suggestions only");
            None
        }
    };

    let state = AppState {
        knowledge,
        generator,
        job_dedup: config.job_dedup,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
