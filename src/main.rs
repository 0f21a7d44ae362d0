//! StudyFlow server
//!
//! Serves the tutor chat and Pomodoro timer over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;
use studyflow::api::{create_router, AppState};
use studyflow::llm::{GeminiConfig, GeminiService, LoggingGenerator, ResponseGenerator};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyflow=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("STUDYFLOW_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let gemini_config = GeminiConfig::from_env();
    let gemini = GeminiService::new(gemini_config);

    if gemini.is_offline() {
        tracing::warn!("No Gemini API key configured. Set GEMINI_API_KEY; using offline tutor replies.");
    } else {
        tracing::info!(model = %gemini.model_id(), "Gemini generator initialized");
    }

    let generator: Arc<dyn ResponseGenerator> = Arc::new(LoggingGenerator::new(Arc::new(gemini)));

    // Create application state
    let state = AppState::new(generator);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("StudyFlow server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
