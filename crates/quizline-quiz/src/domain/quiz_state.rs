//! Per-conversation quiz progress.

/// Where a conversation is in the quiz.
///
/// `index` is the question currently awaiting an answer and `score` the number
/// of correct answers so far, so `score <= index` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizState {
    /// Question awaiting an answer.
    pub index: u32,
    /// Correct answers so far.
    pub score: u32,
}

/// Result of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Another question follows.
    Next(QuizState),
    /// That was the last question.
    Finished {
        /// Final number of correct answers.
        score: u32,
    },
}

impl QuizState {
    /// State at the beginning of a quiz.
    #[must_use]
    pub const fn start() -> Self {
        Self { index: 0, score: 0 }
    }

    /// Records an answer to the current question and moves on.
    #[must_use]
    pub fn answer(self, correct: bool, question_count: usize) -> Progress {
        let score = if correct {
            self.score.saturating_add(1)
        } else {
            self.score
        };
        let next_index = self.index.saturating_add(1);

        if (next_index as usize) < question_count {
            Progress::Next(QuizState {
                index: next_index,
                score,
            })
        } else {
            Progress::Finished { score }
        }
    }

    /// The current question as a bank index.
    #[must_use]
    pub fn question_index(self) -> usize {
        self.index as usize
    }
}
