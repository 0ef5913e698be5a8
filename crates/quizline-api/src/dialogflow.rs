//! Dialogflow ES (v2) webhook request and fulfillment response bodies.

use quizline_quiz::application::command_handlers::Turn;
use quizline_quiz::domain::context::{
    ContextUpdate, QUIZ_CONTEXT_LIFESPAN, QUIZ_CONTEXT_NAME, QuizContext,
};
use quizline_quiz::domain::quiz_state::QuizState;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::line::LineMessage;

/// Platform tag attached to every fulfillment message.
pub const LINE_PLATFORM: &str = "LINE";

/// Body of a webhook call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Unique ID of this request.
    #[serde(default)]
    pub response_id: String,
    /// Session path, `projects/<project>/agent/sessions/<session>`.
    pub session: String,
    /// Result of intent matching.
    pub query_result: QueryResult,
}

/// Intent matching result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// What the user said or typed.
    #[serde(default)]
    pub query_text: String,
    /// The matched intent.
    pub intent: MatchedIntent,
    /// Contexts active after matching.
    #[serde(default)]
    pub output_contexts: Vec<Context>,
}

/// The matched intent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedIntent {
    /// Intent resource path.
    #[serde(default)]
    pub name: String,
    /// Human-readable name, used for dispatch.
    pub display_name: String,
}

/// A conversation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Full path, `<session>/contexts/<name>`.
    pub name: String,
    /// Remaining turns; 0 deletes the context.
    #[serde(default)]
    pub lifespan_count: u32,
    /// Context parameters.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub parameters: Map<String, Value>,
}

impl Context {
    /// The short name after `/contexts/`.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

impl WebhookRequest {
    /// Decodes the `in-quiz` context, if the platform sent one.
    #[must_use]
    pub fn quiz_context(&self) -> Option<QuizContext> {
        self.query_result
            .output_contexts
            .iter()
            .find(|context| context.short_name() == QUIZ_CONTEXT_NAME)
            .map(|context| QuizContext::from_parameters(&context.parameters))
    }
}

/// Body of a fulfillment response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Messages to deliver, one per reply.
    pub fulfillment_messages: Vec<FulfillmentMessage>,
    /// Contexts to set or delete. Omitted when nothing changes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output_contexts: Vec<Context>,
}

/// A platform-specific custom payload message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FulfillmentMessage {
    /// Target platform.
    pub platform: &'static str,
    /// The LINE message object, sent raw without a platform key.
    pub payload: LineMessage,
}

impl WebhookResponse {
    /// Encodes a handler turn for the given session.
    #[must_use]
    pub fn from_turn(session: &str, turn: Turn) -> Self {
        let output_contexts = match turn.context {
            ContextUpdate::Keep => Vec::new(),
            ContextUpdate::Set(state) => vec![quiz_context(session, QUIZ_CONTEXT_LIFESPAN, state)],
            ContextUpdate::Clear => vec![Context {
                name: context_name(session),
                lifespan_count: 0,
                parameters: Map::new(),
            }],
        };

        Self {
            fulfillment_messages: vec![FulfillmentMessage {
                platform: LINE_PLATFORM,
                payload: turn.payload.into(),
            }],
            output_contexts,
        }
    }
}

fn context_name(session: &str) -> String {
    format!("{session}/contexts/{QUIZ_CONTEXT_NAME}")
}

fn quiz_context(session: &str, lifespan_count: u32, state: QuizState) -> Context {
    let mut parameters = Map::new();
    parameters.insert("index".to_owned(), Value::from(state.index));
    parameters.insert("score".to_owned(), Value::from(state.score));

    Context {
        name: context_name(session),
        lifespan_count,
        parameters,
    }
}
