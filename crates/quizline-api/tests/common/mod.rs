//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use quizline_quiz::domain::question_bank::QuestionBank;
use serde_json::Value;
use tower::ServiceExt;

use quizline_api::routes;
use quizline_api::state::AppState;

/// Build the full app router with the production question bank. Uses the
/// same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with_bank(QuestionBank::food_safety())
}

/// Build the full app router around a custom question bank.
pub fn build_test_app_with_bank(question_bank: QuestionBank) -> Router {
    routes::app(AppState::new(question_bank))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// The raw LINE message carried by the first fulfillment message.
pub fn line_message(json: &Value) -> &Value {
    &json["fulfillmentMessages"][0]["payload"]
}

/// The `in-quiz` parameters the platform would echo back next turn, or
/// `None` if the response deleted or did not touch the context.
pub fn next_quiz_parameters(json: &Value) -> Option<Value> {
    let context = json["outputContexts"].as_array()?.first()?;
    if context["lifespanCount"] == 0 {
        return None;
    }
    Some(context["parameters"].clone())
}
