//! Quizline webhook server entry point.

use std::error::Error;

use quizline_api::config::ServerConfig;
use quizline_api::routes;
use quizline_api::state::AppState;
use quizline_quiz::domain::question_bank::QuestionBank;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Quizline webhook server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;

    // Build application state.
    let question_bank = QuestionBank::food_safety();
    tracing::info!(questions = question_bank.len(), "Loaded question bank");
    let app_state = AppState::new(question_bank);

    // Build router.
    let app = routes::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
