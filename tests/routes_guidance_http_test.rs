// ABOUTME: HTTP integration tests for the AI guidance route
// ABOUTME: Exercises validation order and the chat completion relay against a fake OpenAI server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::Method;
use helpers::axum_test::AxumTestRequest;
use helpers::{gateway, test_config, OPENAI_KEY};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GUIDANCE_URI: &str = "/api/ai/guidance";

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo-0125",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160}
    })
}

fn guidance_body() -> Value {
    json!({
        "nutrition": {"name": "Greek Yogurt", "calories": 100, "protein": 17, "carbohydrates": 6, "fat": 0.7},
        "userGoals": {"age": 30, "goal": "Build muscle", "activityLevel": "High", "dailyCalories": 2600, "dailyProtein": 150}
    })
}

/// Fake server that fails the test if it receives any request
async fn untouchable_llm() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&server)
        .await;
    server
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_unknown_type_is_400_without_upstream_call() {
    let server = untouchable_llm().await;
    let mut body = guidance_body();
    body["type"] = json!("bogus");

    let app = gateway(test_config(None, Some(&server.uri())));
    let response = AxumTestRequest::post(GUIDANCE_URI).json(&body).send(app).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid prompt type: bogus");
}

#[tokio::test]
async fn test_missing_user_goals_is_400() {
    let server = untouchable_llm().await;

    let app = gateway(test_config(None, Some(&server.uri())));
    let response = AxumTestRequest::post(GUIDANCE_URI)
        .json(&json!({"nutrition": {"name": "Apple"}}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_null_nutrition_is_400() {
    let app = gateway(test_config(None, None));
    let response = AxumTestRequest::post(GUIDANCE_URI)
        .json(&json!({"nutrition": null, "userGoals": {}}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_validation_precedes_configuration_check() {
    let app = gateway(test_config(None, None));
    let response = AxumTestRequest::post(GUIDANCE_URI)
        .json(&json!({"nutrition": {}, "userGoals": {}, "type": "bogus"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_missing_api_key_is_500() {
    let app = gateway(test_config(None, None));
    let response = AxumTestRequest::post(GUIDANCE_URI)
        .json(&guidance_body())
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "OpenAI API is not configured");
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let app = gateway(test_config(None, None));
    let response = AxumTestRequest::new(Method::PUT, GUIDANCE_URI)
        .json(&guidance_body())
        .send(app)
        .await;

    assert_eq!(response.status(), 405);
}

// ============================================================================
// Completion relay
// ============================================================================

#[tokio::test]
async fn test_default_type_sends_fixed_request_and_trims_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", format!("Bearer {OPENAI_KEY}").as_str()))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "temperature": 0.7,
            "max_tokens": 500
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            "\n  Greek yogurt is an excellent protein source for your goal.  \n",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let app = gateway(test_config(None, Some(&server.uri())));
    let response = AxumTestRequest::post(GUIDANCE_URI)
        .json(&guidance_body())
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "message": "Greek yogurt is an excellent protein source for your goal.",
            "type": "guidance"
        })
    );

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = sent["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    let prompt = messages[0]["content"].as_str().unwrap();
    assert!(prompt.contains("Greek Yogurt"));
    assert!(prompt.contains("Build muscle"));
}

#[tokio::test]
async fn test_json_templates_are_passed_through_verbatim() {
    let reply = r#"{"name": "Eggs and toast", "calories": 350, "protein": 18}"#;
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(reply)))
        .mount(&server)
        .await;

    let app = gateway(test_config(None, Some(&server.uri())));
    let response = AxumTestRequest::post(GUIDANCE_URI)
        .json(&json!({
            "nutrition": {"description": "two eggs and a slice of toast"},
            "userGoals": {},
            "type": "meal_estimate"
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["type"], "meal_estimate");
    assert_eq!(body["message"], reply);
}

#[tokio::test]
async fn test_upstream_error_status_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let app = gateway(test_config(None, Some(&server.uri())));
    let response = AxumTestRequest::post(GUIDANCE_URI)
        .json(&guidance_body())
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Incorrect API key provided"));
}

#[tokio::test]
async fn test_empty_choices_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let app = gateway(test_config(None, Some(&server.uri())));
    let response = AxumTestRequest::post(GUIDANCE_URI)
        .json(&guidance_body())
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn test_null_content_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "length"}]
        })))
        .mount(&server)
        .await;

    let app = gateway(test_config(None, Some(&server.uri())));
    let response = AxumTestRequest::post(GUIDANCE_URI)
        .json(&guidance_body())
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
}
