//! Quizline: quiz progression.
//!
//! Responsible for the question bank, the channel-neutral reply payloads,
//! and the per-conversation quiz state machine driven by platform intents.

pub mod application;
pub mod domain;
