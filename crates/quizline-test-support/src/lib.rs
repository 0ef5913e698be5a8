//! Shared test fixtures for the Quizline webhook.

mod bank;
mod request;

pub use bank::sample_bank;
pub use request::{TEST_SESSION, WebhookRequestBuilder};
