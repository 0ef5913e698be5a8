//! The `in-quiz` conversation context.
//!
//! The NLU platform stores quiz progress between turns in a named context
//! whose parameters are loosely typed JSON. `QuizContext` is the decoded
//! view; `ContextUpdate` is what a handler wants done with it afterwards.

use quizline_core::error::DomainError;
use serde_json::{Map, Value};
use tracing::warn;

use super::quiz_state::QuizState;

/// Name of the context holding quiz progress.
pub const QUIZ_CONTEXT_NAME: &str = "in-quiz";

/// Turns the context survives without being renewed.
pub const QUIZ_CONTEXT_LIFESPAN: u32 = 5;

/// Quiz progress as read back from the platform.
///
/// Either field may be missing; see [`QuizContext::state`] for how gaps are
/// filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizContext {
    /// Stored question index, if present and well formed.
    pub index: Option<u32>,
    /// Stored score, if present and well formed.
    pub score: Option<u32>,
}

impl QuizContext {
    /// Decodes context parameters leniently.
    ///
    /// A parameter of the wrong shape is logged and treated as absent.
    #[must_use]
    pub fn from_parameters(parameters: &Map<String, Value>) -> Self {
        Self {
            index: lenient_count(parameters, "index"),
            score: lenient_count(parameters, "score"),
        }
    }

    /// Resolves the stored progress.
    ///
    /// Missing fields default to 0, and a score larger than the index is
    /// clamped to the index.
    #[must_use]
    pub fn state(&self) -> QuizState {
        let index = self.index.unwrap_or(0);
        let score = self.score.unwrap_or(0).min(index);
        QuizState { index, score }
    }
}

impl From<QuizState> for QuizContext {
    fn from(state: QuizState) -> Self {
        Self {
            index: Some(state.index),
            score: Some(state.score),
        }
    }
}

/// What to do with the `in-quiz` context after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextUpdate {
    /// Leave the context untouched.
    Keep,
    /// Store new progress and renew the lifespan.
    Set(QuizState),
    /// Delete the context, ending the quiz.
    Clear,
}

fn lenient_count(parameters: &Map<String, Value>, key: &str) -> Option<u32> {
    parse_count(parameters, key).unwrap_or_else(|e| {
        warn!(parameter = key, error = %e, "ignoring malformed quiz context parameter");
        None
    })
}

/// Reads a non-negative integer parameter.
///
/// Accepts JSON integers, integral floats (the platform sometimes echoes
/// `1.0`), and decimal strings. `null` and a missing key are `None`.
///
/// # Errors
///
/// Returns `DomainError::MalformedContext` for any other value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_count(parameters: &Map<String, Value>, key: &str) -> Result<Option<u32>, DomainError> {
    let malformed = |value: &Value| {
        DomainError::MalformedContext(format!("parameter {key:?} is not a count: {value}"))
    };

    match parameters.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Number(number)) => {
            if let Some(n) = number.as_u64() {
                return u32::try_from(n).map(Some).map_err(|_| malformed(value));
            }
            match number.as_f64() {
                Some(f) if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) => {
                    Ok(Some(f as u32))
                }
                _ => Err(malformed(value)),
            }
        }
        Some(value @ Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| malformed(value)),
        Some(value) => Err(malformed(value)),
    }
}
