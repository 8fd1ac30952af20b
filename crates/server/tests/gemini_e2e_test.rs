//! # Gemini End-to-End Tests
//!
//! Runs the server with the real `GeminiProvider`, pointed at an `httpmock`
//! server that imitates the Gemini `generateContent` endpoint.

mod common;

use anyhow::Result;
use common::{TestApp, GEMINI_PATH, TEST_API_KEY};
use httpmock::{Method::POST, MockServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

const SAMPLE: &str = "## Key Features\n- Fast builds\n- Dark mode";

#[tokio::test]
async fn test_emojify_through_gemini_mock() -> Result<()> {
    let mock_server = MockServer::start_async().await;
    let gemini_mock = mock_server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GEMINI_PATH)
                .header("x-goog-api-key", TEST_API_KEY)
                .body_contains("\"temperature\":0.4")
                .body_contains("ENHANCED LIST format");
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "```markdown\n## ✨ Key Features\n- **Fast builds** 🚀 – Quick.\n- **Dark mode** 🌙 – Calm.\n```" }]
                    }
                }]
            }));
        })
        .await;

    let app = TestApp::spawn_with_gemini(&mock_server).await?;
    let response = app
        .post_emojify(&json!({ "content": SAMPLE, "format": "list" }), false)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(
        body["result"]["text"],
        "## ✨ Key Features\n- **Fast builds** 🚀 – Quick.\n- **Dark mode** 🌙 – Calm."
    );
    gemini_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_gemini_error_is_reported_once() -> Result<()> {
    let mock_server = MockServer::start_async().await;
    let gemini_mock = mock_server
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(400).json_body(json!({
                "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
            }));
        })
        .await;

    let app = TestApp::spawn_with_gemini(&mock_server).await?;
    let response = app
        .post_emojify(&json!({ "content": SAMPLE, "format": "table" }), false)
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body: Value = response.json().await?;
    assert_eq!(
        body["error"],
        "Failed to generate content. Gemini API Error: API key not valid."
    );
    // No retry: exactly one upstream call.
    assert_eq!(gemini_mock.hits_async().await, 1);
    Ok(())
}
