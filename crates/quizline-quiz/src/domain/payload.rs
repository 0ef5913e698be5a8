//! Channel-neutral reply payloads.
//!
//! The builders here are pure: the same bank and input always produce the
//! same payload. Encoding into a chat channel's wire format happens at the
//! API edge.

use quizline_core::error::DomainError;

use super::question_bank::QuestionBank;

/// A tappable reply choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickReply {
    /// Text shown on the button.
    pub label: String,
    /// Text sent back as the user's message when tapped.
    pub value: String,
}

/// A reply to send back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPayload {
    /// Message text.
    pub text: String,
    /// Quick replies, in display order. Empty for plain text replies.
    pub quick_replies: Vec<QuickReply>,
}

impl ReplyPayload {
    /// A reply with no quick replies.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quick_replies: Vec::new(),
        }
    }

    /// Puts `prefix` and a blank line in front of the text. Quick replies are
    /// kept.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.text = format!("{prefix}\n\n{}", self.text);
        self
    }
}

/// Builds the payload presenting question `index`.
///
/// Each option becomes a quick reply whose value is the option's 1-based
/// position, not its label. Answers are checked against that position.
///
/// # Errors
///
/// Returns `DomainError::IndexOutOfRange` if `index` is past the end of the
/// bank.
pub fn build_question_payload(
    bank: &QuestionBank,
    index: usize,
) -> Result<ReplyPayload, DomainError> {
    let question = bank.get(index)?;
    let quick_replies = question
        .options()
        .iter()
        .enumerate()
        .map(|(position, label)| QuickReply {
            label: label.clone(),
            value: (position + 1).to_string(),
        })
        .collect();

    Ok(ReplyPayload {
        text: question.text().to_owned(),
        quick_replies,
    })
}

/// Builds the end-of-quiz summary for `score` correct answers.
#[must_use]
pub fn build_final_score_payload(bank: &QuestionBank, score: u32) -> ReplyPayload {
    ReplyPayload::plain(format!(
        "ทำแบบทดสอบเสร็จแล้ว!\nคุณได้คะแนน {score} จาก {} คะแนน",
        bank.len()
    ))
}
