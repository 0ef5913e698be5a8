//! Domain model for the quiz.

pub mod commands;
pub mod context;
pub mod payload;
pub mod question_bank;
pub mod quiz_state;
