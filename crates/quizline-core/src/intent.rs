//! The closed set of intents the webhook fulfils.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// An intent classified by the NLU platform.
///
/// The platform identifies intents by display name; only the three names
/// below are routed to this webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// `StartQuiz`: begin (or restart) the quiz.
    StartQuiz,
    /// `AnswerQuiz`: the user answered the current question.
    AnswerQuiz,
    /// `Default Fallback Intent`: anything the platform could not classify.
    Fallback,
}

impl Intent {
    /// Every intent, in dispatch-table order.
    pub const ALL: [Intent; 3] = [Intent::StartQuiz, Intent::AnswerQuiz, Intent::Fallback];

    /// The display name the platform uses for this intent.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Intent::StartQuiz => "StartQuiz",
            Intent::AnswerQuiz => "AnswerQuiz",
            Intent::Fallback => "Default Fallback Intent",
        }
    }
}

impl FromStr for Intent {
    type Err = DomainError;

    /// Exact, case-sensitive match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.display_name() == s)
            .ok_or_else(|| DomainError::UnknownIntent(s.to_owned()))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
