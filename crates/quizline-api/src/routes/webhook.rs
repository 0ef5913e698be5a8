//! Fulfillment webhook endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use quizline_core::error::DomainError;
use quizline_core::intent::Intent;
use quizline_quiz::application::command_handlers;
use serde_json::Value;
use tracing::field::Empty;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

use crate::dialogflow::{WebhookRequest, WebhookResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /
#[instrument(skip(state, body), fields(session = Empty, intent = Empty))]
async fn fulfill(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<WebhookResponse>, ApiError> {
    debug!(body = %body, "webhook request body");

    let request: WebhookRequest = serde_json::from_value(body)
        .map_err(|e| DomainError::Validation(format!("invalid webhook request: {e}")))?;

    let span = Span::current();
    span.record("session", request.session.as_str());
    span.record("intent", request.query_result.intent.display_name.as_str());

    let intent: Intent = request.query_result.intent.display_name.parse()?;
    let correlation_id = Uuid::new_v4();

    info!(
        correlation_id = %correlation_id,
        response_id = %request.response_id,
        "handling {intent} turn"
    );

    let turn = command_handlers::handle_intent(
        intent,
        correlation_id,
        &request.query_result.query_text,
        request.quiz_context(),
        &state.question_bank,
    )?;

    Ok(Json(WebhookResponse::from_turn(&request.session, turn)))
}

/// Returns the router for the fulfillment webhook.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(fulfill))
}
