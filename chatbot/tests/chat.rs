//! Integration tests for the chat invoker against a mock completion endpoint.

#![allow(clippy::unwrap_used, clippy::panic)]
#![allow(unsafe_code)] // std::env mutation in tests (edition 2024)

use chatbot::chat::{SYSTEM_PROMPT, generate_reply, get_response, try_reply};
use chatbot::client::OpenAIClient;
use chatbot::completion::{CompletionModel, GPT_4_1_NANO};
use chatbot::error::Error;
use chatbot::message::ChatMessage;
use mockito::{Matcher, ServerGuard};

/// Build a completion model pointed at the mock server.
fn test_model(server: &ServerGuard) -> CompletionModel {
    OpenAIClient::builder()
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .completion_model(GPT_4_1_NANO)
}

fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

#[tokio::test]
async fn reply_is_trimmed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("  Hello there!  "))
        .create_async()
        .await;

    let reply = generate_reply(&test_model(&server), "Say hello").await;

    assert_eq!(reply, "Hello there!");
    mock.assert_async().await;
}

#[tokio::test]
async fn request_carries_fixed_system_instruction() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": GPT_4_1_NANO,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": "ping" },
            ],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("pong"))
        .create_async()
        .await;

    let reply = generate_reply(&test_model(&server), "ping").await;

    assert_eq!(reply, "pong");
    mock.assert_async().await;
}

#[tokio::test]
async fn zero_choices_yields_empty_reply() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let reply = generate_reply(&test_model(&server), "anything").await;

    assert_eq!(reply, "");
}

#[tokio::test]
async fn empty_content_is_an_empty_response_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(""))
        .create_async()
        .await;

    let model = test_model(&server);
    let err = try_reply(&model, "anything")
        .await
        .expect_err("empty content should not be a valid reply");
    assert!(matches!(err, Error::EmptyResponse));

    assert_eq!(generate_reply(&model, "anything").await, "");
}

#[tokio::test]
async fn whitespace_only_content_is_a_successful_empty_reply() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("   "))
        .create_async()
        .await;

    // Whitespace-only content passes the non-empty check and trims away;
    // this is a success, not a "no valid response" failure.
    let reply = try_reply(&test_model(&server), "anything")
        .await
        .expect("whitespace-only content is still a reply");
    assert_eq!(reply, "");
}

#[tokio::test]
async fn zero_choices_surface_as_empty_response_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let err = try_reply(&test_model(&server), "anything")
        .await
        .expect_err("zero choices should not be a valid reply");
    assert!(matches!(err, Error::EmptyResponse));
}

#[tokio::test]
async fn provider_error_yields_empty_reply() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body(r#"{"error":{"message":"server blew up"}}"#)
        .create_async()
        .await;

    let reply = generate_reply(&test_model(&server), "anything").await;

    assert_eq!(reply, "");
}

#[tokio::test]
async fn generate_surfaces_api_status_to_library_callers() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
        .create_async()
        .await;

    let messages = [ChatMessage::user("hi")];
    let err = test_model(&server)
        .generate(&messages)
        .await
        .expect_err("401 should be an error");

    match err {
        Error::Api { status, body } => {
            assert_eq!(status.as_u16(), 401);
            // The structured error body is unwrapped to the provider's message.
            assert_eq!(body, "Incorrect API key provided");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn unstructured_error_body_is_kept_verbatim() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let messages = [ChatMessage::user("hi")];
    let err = test_model(&server)
        .generate(&messages)
        .await
        .expect_err("502 should be an error");

    match err {
        Error::Api { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_credential_skips_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    // This is the only test in this binary that touches process env.
    unsafe {
        std::env::remove_var("OPENAI_API_KEY");
        std::env::set_var("OPENAI_BASE_URL", server.url());
    }

    let reply = get_response("anything").await;

    assert_eq!(reply, "");
    mock.assert_async().await;
}
