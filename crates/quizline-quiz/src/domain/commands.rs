//! Commands for the quiz.

use quizline_core::command::Command;
use uuid::Uuid;

use super::context::QuizContext;

/// Command to start (or restart) the quiz.
#[derive(Debug, Clone)]
pub struct StartQuiz {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for StartQuiz {
    fn command_type(&self) -> &'static str {
        "quiz.start"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to answer the current question.
#[derive(Debug, Clone)]
pub struct AnswerQuiz {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// What the user sent, untrimmed.
    pub query_text: String,
    /// Progress stored by the platform, if the context is still alive.
    pub context: Option<QuizContext>,
}

impl Command for AnswerQuiz {
    fn command_type(&self) -> &'static str {
        "quiz.answer"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to repeat the current question after unrecognised input.
#[derive(Debug, Clone)]
pub struct RepeatQuestion {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Progress stored by the platform, if the context is still alive.
    pub context: Option<QuizContext>,
}

impl Command for RepeatQuestion {
    fn command_type(&self) -> &'static str {
        "quiz.repeat_question"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
