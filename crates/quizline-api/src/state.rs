//! Shared application state.

use std::sync::Arc;

use quizline_quiz::domain::question_bank::QuestionBank;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The read-only question bank.
    pub question_bank: Arc<QuestionBank>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(question_bank: QuestionBank) -> Self {
        Self {
            question_bank: Arc::new(question_bank),
        }
    }
}
