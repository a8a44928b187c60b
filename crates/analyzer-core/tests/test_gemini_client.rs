use analyzer_core::config::GeminiConfig;
use analyzer_core::{AnalyzerError, BatchOrchestrator, ContentModel, GeminiClient};
use analyzer_types::{InputRecord, RowStatus};
use httpmock::prelude::*;
use serde_json::json;

const GENERATE_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig {
        api_key: "test-key".to_string(),
        model: "gemini-pro".to_string(),
        base_url: server.base_url(),
        request_timeout_secs: Some(10),
    })
    .expect("Failed to build Gemini client")
}

#[tokio::test]
async fn test_generate_content_sends_prompt() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .header("x-goog-api-key", "test-key")
                .json_body(json!({
                    "contents": [{ "parts": [{ "text": "describe the garage" }] }]
                }));
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "Primary Services: [Brakes]" }]
                    },
                    "finishReason": "STOP"
                }]
            }));
        })
        .await;

    let client = client_for(&server);
    let text = client.generate_content("describe the garage").await.unwrap();

    mock.assert_async().await;
    assert_eq!(text, "Primary Services: [Brakes]");
}

#[tokio::test]
async fn test_error_status_is_service_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(429).body("Resource has been exhausted");
        })
        .await;

    let client = client_for(&server);
    let err = client.generate_content("anything").await.unwrap_err();

    assert!(matches!(err, AnalyzerError::ServiceUnavailable(_)));
    assert!(err.to_string().contains("429"));
    assert!(err.to_string().contains("Resource has been exhausted"));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_blocked_prompt_is_processing_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).json_body(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            }));
        })
        .await;

    let client = client_for(&server);
    let err = client.generate_content("anything").await.unwrap_err();

    assert!(matches!(err, AnalyzerError::Processing(_)));
    assert!(err.to_string().contains("SAFETY"));
}

#[tokio::test]
async fn test_orchestrator_over_http() {
    let server = MockServer::start_async().await;
    let ok = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH).body_contains("Tyre World");
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": {
                        "parts": [{
                            "text": "Primary Services: [Tyre fitting]\nSecondary Services: [Balancing]\nAdditional Services: [Storage]"
                        }]
                    }
                }]
            }));
        })
        .await;
    let failing = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH).body_contains("Broken Listing");
            then.status(500).body("internal");
        })
        .await;

    let orchestrator = BatchOrchestrator::new(client_for(&server));
    let rows = vec![
        InputRecord {
            name: "Tyre World".to_string(),
            all_content: "Tyre World fits tyres. tyres@tyreworld.example".to_string(),
            ..Default::default()
        },
        InputRecord {
            name: "Broken".to_string(),
            all_content: "Broken Listing 555-321-7654".to_string(),
            ..Default::default()
        },
    ];

    let report = orchestrator.run(&rows).await;

    ok.assert_async().await;
    failing.assert_async().await;

    assert_eq!(report.statuses[0], RowStatus::Analyzed);
    assert_eq!(report.rows[0].primary_services, "Tyre fitting");
    assert_eq!(report.rows[0].secondary_services, "Balancing");
    assert_eq!(report.rows[0].additional_services, "Storage");
    assert_eq!(report.rows[0].extracted_emails, "tyres@tyreworld.example");

    assert!(report.statuses[1].is_failure());
    assert_eq!(report.rows[1].primary_services, "");
    assert_eq!(report.rows[1].extracted_phones, "555-321-7654");
}
