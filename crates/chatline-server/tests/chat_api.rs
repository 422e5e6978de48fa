use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chatline_models::ChatResponse;
use chatline_server::responder::{FAREWELL, GREETING, IDENTITY, Responder};
use chatline_server::{AppState, router};
use serde_json::json;

fn server() -> TestServer {
    TestServer::new(router(Arc::new(AppState::default()))).unwrap()
}

#[tokio::test]
async fn greeting_reply() {
    let response = server()
        .post("/chat")
        .json(&json!({ "message": "Hello" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<ChatResponse>().response, GREETING);
}

#[tokio::test]
async fn api_path_uses_same_handler() {
    let response = server()
        .post("/api/chat")
        .json(&json!({ "message": "who are you" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<ChatResponse>().response, IDENTITY);
}

#[tokio::test]
async fn farewell_reply() {
    let response = server()
        .post("/chat")
        .json(&json!({ "message": "bye for now" }))
        .await;

    assert_eq!(response.json::<ChatResponse>().response, FAREWELL);
}

#[tokio::test]
async fn unknown_text_is_echoed_lowercased() {
    let response = server()
        .post("/chat")
        .json(&json!({ "message": "Ping" }))
        .await;

    assert_eq!(
        response.json::<ChatResponse>().response,
        "You said: ping. I'm still learning! (ระบบยังเรียนรู้อยู่ครับ)"
    );
}

#[tokio::test]
async fn extra_fields_are_ignored() {
    let response = server()
        .post("/chat")
        .json(&json!({ "message": "hi", "session": 42 }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn missing_message_is_rejected() {
    let response = server().post("/chat").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ChatResponse>().response,
        "Error: invalid request"
    );
}

#[tokio::test]
async fn non_string_message_is_rejected() {
    let response = server()
        .post("/chat")
        .json(&json!({ "message": 42 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_json_body_is_rejected() {
    let response = server().post("/chat").text("message=hello").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ChatResponse>().response,
        "Error: invalid request"
    );
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let response = server()
        .post("/chat")
        .bytes("{\"message\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_is_not_allowed() {
    let response = server().get("/chat").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

struct Shouting;

impl Responder for Shouting {
    fn reply(&self, message: &str) -> String {
        message.to_uppercase()
    }
}

#[tokio::test]
async fn custom_responder_is_used() {
    let server = TestServer::new(router(Arc::new(AppState::new(Shouting)))).unwrap();

    let response = server
        .post("/chat")
        .json(&json!({ "message": "quiet please" }))
        .await;

    assert_eq!(response.json::<ChatResponse>().response, "QUIET PLEASE");
}
