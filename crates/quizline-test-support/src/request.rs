//! Test requests: builders for platform webhook request bodies.

use serde_json::{Value, json};

/// Session path used by every built request.
pub const TEST_SESSION: &str = "projects/quizline-test/agent/sessions/session-1";

/// Builds a webhook request body the way the NLU platform sends it.
#[derive(Debug, Clone)]
pub struct WebhookRequestBuilder {
    intent: String,
    query_text: String,
    contexts: Vec<Value>,
}

impl WebhookRequestBuilder {
    /// A request for the intent with the given display name.
    #[must_use]
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            query_text: String::new(),
            contexts: Vec::new(),
        }
    }

    /// Sets what the user typed.
    #[must_use]
    pub fn query_text(mut self, query_text: impl Into<String>) -> Self {
        self.query_text = query_text.into();
        self
    }

    /// Adds a live `in-quiz` context with the given parameters.
    #[must_use]
    pub fn quiz_context(self, parameters: Value) -> Self {
        self.context("in-quiz", 4, parameters)
    }

    /// Adds an arbitrary context under the test session.
    #[must_use]
    pub fn context(mut self, short_name: &str, lifespan_count: u32, parameters: Value) -> Self {
        self.contexts.push(json!({
            "name": format!("{TEST_SESSION}/contexts/{short_name}"),
            "lifespanCount": lifespan_count,
            "parameters": parameters,
        }));
        self
    }

    /// The JSON body.
    #[must_use]
    pub fn build(self) -> Value {
        json!({
            "responseId": "response-1",
            "session": TEST_SESSION,
            "queryResult": {
                "queryText": self.query_text,
                "languageCode": "th",
                "intent": {
                    "name": "projects/quizline-test/agent/intents/1",
                    "displayName": self.intent,
                },
                "outputContexts": self.contexts,
            },
            "originalDetectIntentRequest": {
                "source": "line",
                "payload": {},
            },
        })
    }
}
