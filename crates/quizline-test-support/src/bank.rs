//! Test bank: a small question bank with known answers.

use quizline_quiz::domain::question_bank::{QuestionBank, QuizQuestion};

/// A two-question bank. The correct answers are `"1"` then `"2"`.
///
/// # Panics
///
/// Never in practice; the fixture is valid by construction.
#[must_use]
pub fn sample_bank() -> QuestionBank {
    QuestionBank::new(vec![
        QuizQuestion::new("Which is red?\n1) apple\n2) sky", ["apple", "sky"], "1"),
        QuizQuestion::new("Which is blue?\n1) apple\n2) sky", ["apple", "sky"], "2"),
    ])
    .expect("sample bank is valid")
}
