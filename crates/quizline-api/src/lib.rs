//! Quizline API: webhook fulfillment for the quiz.
//!
//! Decodes NLU platform webhook calls, runs the quiz command handlers, and
//! answers with LINE messages plus the updated `in-quiz` context.

pub mod config;
pub mod dialogflow;
pub mod error;
pub mod line;
pub mod routes;
pub mod state;
