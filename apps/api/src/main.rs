mod config;
mod errors;
mod export;
mod generation;
mod layout;
mod llm_client;
mod models;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::AnswerExporter;
use crate::generation::AnswerGenerator;
use crate::layout::{default_page_config, FontFamily};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing API key aborts startup here.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting interview coach v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client behind the completion-service trait
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let generator = AnswerGenerator::new(Arc::new(llm));

    // Exports land in the working directory: A4, Helvetica 12pt
    let page_config = default_page_config(FontFamily::Helvetica);
    info!(
        "Export page config: {:?} {}pt, {} lines/page",
        page_config.font,
        page_config.font_size_pt,
        page_config.lines_per_page()
    );
    let exporter = AnswerExporter::new(std::env::current_dir()?, page_config);
    info!("Exporting to {}", exporter.output_dir().display());

    let state = AppState {
        generator,
        exporter,
    };

    // The form page may be served from another origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
