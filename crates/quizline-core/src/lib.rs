//! Quizline Core: shared abstractions.
//!
//! This crate defines the error type, the closed set of intents the webhook
//! understands, and the command trait every quiz command implements. It
//! contains no HTTP or platform code.

pub mod command;
pub mod error;
pub mod intent;
