//! Command handlers for the quiz.
//!
//! Each handler reads the progress carried by its command, runs the quiz
//! state machine against the question bank, and returns a `Turn`: the reply
//! to send and what should happen to the `in-quiz` context. Handlers never
//! touch the platform; the caller applies the context update.

use quizline_core::command::Command;
use quizline_core::error::DomainError;
use quizline_core::intent::Intent;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::commands::{AnswerQuiz, RepeatQuestion, StartQuiz};
use crate::domain::context::{ContextUpdate, QuizContext};
use crate::domain::payload::{ReplyPayload, build_final_score_payload, build_question_payload};
use crate::domain::question_bank::QuestionBank;
use crate::domain::quiz_state::{Progress, QuizState};

/// Feedback for a correct answer.
pub const CORRECT_FEEDBACK: &str = "ตอบถูกต้องค่ะ 🎉";

/// Feedback for a wrong answer.
pub const INCORRECT_FEEDBACK: &str = "ตอบยังไม่ถูกนะคะ";

/// Shown above the current question when the input was not understood.
pub const RESTART_HINT: &str = "หากต้องการเริ่มใหม่ให้พิมพ์ \"start quiz\" ค่ะ 😊";

/// Outcome of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Reply to send to the user.
    pub payload: ReplyPayload,
    /// What to do with the `in-quiz` context.
    pub context: ContextUpdate,
}

/// Handles the `StartQuiz` command: resets progress and presents the first
/// question.
///
/// # Errors
///
/// Returns `DomainError::IndexOutOfRange` if the bank is empty.
pub fn handle_start_quiz(command: &StartQuiz, bank: &QuestionBank) -> Result<Turn, DomainError> {
    let state = QuizState::start();
    let payload = build_question_payload(bank, state.question_index())?;

    debug!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        "quiz started"
    );

    Ok(Turn {
        payload,
        context: ContextUpdate::Set(state),
    })
}

/// Handles the `AnswerQuiz` command: scores the answer and either presents the
/// next question or the final score.
///
/// A missing context is treated as the first question with no score.
///
/// # Errors
///
/// Returns `DomainError::IndexOutOfRange` if the stored index is past the end
/// of the bank.
pub fn handle_answer_quiz(command: &AnswerQuiz, bank: &QuestionBank) -> Result<Turn, DomainError> {
    let state = command.context.unwrap_or_default().state();
    let question = bank.get(state.question_index())?;

    let correct = command.query_text.trim() == question.correct_answer();
    let feedback = if correct {
        CORRECT_FEEDBACK
    } else {
        INCORRECT_FEEDBACK
    };

    debug!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        index = state.index,
        correct,
        "answer scored"
    );

    match state.answer(correct, bank.len()) {
        Progress::Next(next) => {
            let payload = build_question_payload(bank, next.question_index())?;
            Ok(Turn {
                payload: payload.with_prefix(feedback),
                context: ContextUpdate::Set(next),
            })
        }
        Progress::Finished { score } => {
            debug!(correlation_id = %command.correlation_id(), score, "quiz finished");
            Ok(Turn {
                payload: build_final_score_payload(bank, score).with_prefix(feedback),
                context: ContextUpdate::Clear,
            })
        }
    }
}

/// Handles the `RepeatQuestion` command: shows the current question again with
/// a restart hint. Progress is never changed.
///
/// A stored index past the end of the bank falls back to the first question.
///
/// # Errors
///
/// Returns `DomainError::IndexOutOfRange` only if the bank is empty.
pub fn handle_repeat_question(
    command: &RepeatQuestion,
    bank: &QuestionBank,
) -> Result<Turn, DomainError> {
    let stored = command.context.unwrap_or_default().state().question_index();
    let index = if stored < bank.len() {
        stored
    } else {
        warn!(
            correlation_id = %command.correlation_id(),
            index = stored,
            len = bank.len(),
            "stored question index out of range, showing first question"
        );
        0
    };

    let payload = build_question_payload(bank, index)?;

    Ok(Turn {
        payload: payload.with_prefix(RESTART_HINT),
        context: ContextUpdate::Keep,
    })
}

/// Routes an intent to its handler.
///
/// # Errors
///
/// Propagates the handler's `DomainError`.
pub fn handle_intent(
    intent: Intent,
    correlation_id: Uuid,
    query_text: &str,
    context: Option<QuizContext>,
    bank: &QuestionBank,
) -> Result<Turn, DomainError> {
    match intent {
        Intent::StartQuiz => handle_start_quiz(&StartQuiz { correlation_id }, bank),
        Intent::AnswerQuiz => handle_answer_quiz(
            &AnswerQuiz {
                correlation_id,
                query_text: query_text.to_owned(),
                context,
            },
            bank,
        ),
        Intent::Fallback => handle_repeat_question(
            &RepeatQuestion {
                correlation_id,
                context,
            },
            bank,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuestionBank {
        QuestionBank::food_safety()
    }

    fn at(index: u32, score: u32) -> Option<QuizContext> {
        Some(QuizState { index, score }.into())
    }

    fn answer(query_text: &str, context: Option<QuizContext>) -> Result<Turn, DomainError> {
        handle_answer_quiz(
            &AnswerQuiz {
                correlation_id: Uuid::new_v4(),
                query_text: query_text.to_owned(),
                context,
            },
            &bank(),
        )
    }

    fn repeat(context: Option<QuizContext>) -> Turn {
        handle_repeat_question(
            &RepeatQuestion {
                correlation_id: Uuid::new_v4(),
                context,
            },
            &bank(),
        )
        .unwrap()
    }

    #[test]
    fn test_start_quiz_presents_first_question() {
        let turn = handle_start_quiz(
            &StartQuiz {
                correlation_id: Uuid::new_v4(),
            },
            &bank(),
        )
        .unwrap();

        assert_eq!(turn.context, ContextUpdate::Set(QuizState { index: 0, score: 0 }));
        assert_eq!(turn.payload.text, bank().get(0).unwrap().text());
        let values: Vec<&str> = turn
            .payload
            .quick_replies
            .iter()
            .map(|r| r.value.as_str())
            .collect();
        assert_eq!(values, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_correct_answer_advances_with_score() {
        let turn = answer("2", at(0, 0)).unwrap();

        assert_eq!(turn.context, ContextUpdate::Set(QuizState { index: 1, score: 1 }));
        assert!(turn.payload.text.starts_with(&format!("{CORRECT_FEEDBACK}\n\n")));
        assert!(turn.payload.text.ends_with(bank().get(1).unwrap().text()));
        assert_eq!(turn.payload.quick_replies.len(), 3);
    }

    #[test]
    fn test_wrong_answer_advances_without_score() {
        let turn = answer("1", at(0, 0)).unwrap();

        assert_eq!(turn.context, ContextUpdate::Set(QuizState { index: 1, score: 0 }));
        assert!(turn.payload.text.starts_with(INCORRECT_FEEDBACK));
    }

    #[test]
    fn test_answer_is_trimmed_but_otherwise_exact() {
        let turn = answer("  2\n", at(0, 0)).unwrap();
        assert_eq!(turn.context, ContextUpdate::Set(QuizState { index: 1, score: 1 }));

        // Option label is not the positional value.
        let turn = answer("ข้อที่ 2)", at(0, 0)).unwrap();
        assert_eq!(turn.context, ContextUpdate::Set(QuizState { index: 1, score: 0 }));
    }

    #[test]
    fn test_missing_context_answers_first_question() {
        let turn = answer("2", None).unwrap();
        assert_eq!(turn.context, ContextUpdate::Set(QuizState { index: 1, score: 1 }));
    }

    #[test]
    fn test_last_answer_clears_context_with_final_score() {
        let turn = answer("3", at(2, 1)).unwrap();

        assert_eq!(turn.context, ContextUpdate::Clear);
        assert_eq!(
            turn.payload.text,
            format!("{CORRECT_FEEDBACK}\n\nทำแบบทดสอบเสร็จแล้ว!\nคุณได้คะแนน 2 จาก 3 คะแนน")
        );
        assert!(turn.payload.quick_replies.is_empty());
    }

    #[test]
    fn test_last_wrong_answer_still_finishes() {
        let turn = answer("1", at(2, 2)).unwrap();

        assert_eq!(turn.context, ContextUpdate::Clear);
        assert!(turn.payload.text.starts_with(INCORRECT_FEEDBACK));
        assert!(turn.payload.text.contains("คุณได้คะแนน 2 จาก 3"));
    }

    #[test]
    fn test_answer_out_of_range_fails() {
        assert_eq!(
            answer("1", at(3, 0)),
            Err(DomainError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_repeat_question_keeps_context() {
        let first = repeat(at(1, 1));
        let second = repeat(at(1, 1));

        assert_eq!(first, second);
        assert_eq!(first.context, ContextUpdate::Keep);
        assert!(first.payload.text.starts_with(&format!("{RESTART_HINT}\n\n")));
        assert!(first.payload.text.ends_with(bank().get(1).unwrap().text()));
        assert_eq!(first.payload.quick_replies.len(), 3);
    }

    #[test]
    fn test_repeat_question_without_context_shows_first() {
        let turn = repeat(None);
        assert!(turn.payload.text.ends_with(bank().get(0).unwrap().text()));

        let turn = repeat(Some(QuizContext { index: None, score: Some(1) }));
        assert!(turn.payload.text.ends_with(bank().get(0).unwrap().text()));
    }

    #[test]
    fn test_repeat_question_out_of_range_shows_first() {
        let turn = repeat(at(9, 0));
        assert_eq!(turn.context, ContextUpdate::Keep);
        assert!(turn.payload.text.ends_with(bank().get(0).unwrap().text()));
    }

    #[test]
    fn test_full_quiz_all_correct() {
        let bank = bank();
        let mut turn = handle_intent(Intent::StartQuiz, Uuid::new_v4(), "start quiz", None, &bank)
            .unwrap();

        for reply in ["2", "3", "3"] {
            let context = match turn.context {
                ContextUpdate::Set(state) => Some(state.into()),
                other => panic!("expected quiz in progress, got {other:?}"),
            };
            turn = handle_intent(Intent::AnswerQuiz, Uuid::new_v4(), reply, context, &bank)
                .unwrap();
        }

        assert_eq!(turn.context, ContextUpdate::Clear);
        assert!(turn.payload.text.contains("คุณได้คะแนน 3 จาก 3"));
    }

    #[test]
    fn test_handle_intent_routes_fallback() {
        let turn =
            handle_intent(Intent::Fallback, Uuid::new_v4(), "???", at(2, 1), &bank()).unwrap();
        assert_eq!(turn.context, ContextUpdate::Keep);
        assert!(turn.payload.text.starts_with(RESTART_HINT));
    }
}
