use super::*;
use designforge_protocols::ErrorKind;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

fn chat_reply(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

fn provider_for(server: &MockServer) -> OpenAIProvider {
    OpenAIProvider::new().with_url(format!("{}/v1/chat/completions", server.uri()))
}

#[test]
fn test_provider_identity() {
    let provider = OpenAIProvider::new();
    assert_eq!(provider.id(), ProviderId::OpenAi);
    assert!(provider.models().iter().any(|m| m.id == "gpt-4o"));
}

#[test]
fn test_analyze_request_uses_data_url() {
    let provider = OpenAIProvider::new();
    let image = ImageData::with_media_type(b"hi".to_vec(), "image/png");
    let json = serde_json::to_value(provider.analyze_request(&image, "gpt-4o")).unwrap();

    let content = &json["messages"][0]["content"];
    assert_eq!(content[0]["text"], ANALYZE_INSTRUCTION);
    assert_eq!(content[1]["type"], "image_url");
    assert_eq!(content[1]["image_url"]["url"], "data:image/png;base64,aGk=");
}

#[tokio::test]
async fn test_analyze_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/v1/chat/completions"))
        .and(matchers::header("Authorization", "Bearer sk-test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(chat_reply("A hero section\nA footer with social links")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let image = ImageData::from_bytes(vec![0xff, 0xd8]);
    let analysis = provider.analyze(&image, "gpt-4o", "sk-test").await.unwrap();

    assert_eq!(analysis.provider, ProviderId::OpenAi);
    assert_eq!(analysis.elements.len(), 2);
}

#[tokio::test]
async fn test_generate_sends_prompt() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::body_partial_json(serde_json::json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "user", "content": generation_prompt("Grid layout", "Rounder corners")}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(chat_reply(
            r#"{"html": "<div class=\"card\"></div>", "css": ".card { border-radius: 12px; }", "description": "Rounded"}"#,
        )))
        .expect(2)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let analysis = AnalysisResult::new(ProviderId::OpenAi, "Grid layout", vec![]);
    let designs = provider
        .generate(&analysis, "Rounder corners", 2, "gpt-4o-mini", "sk-test")
        .await
        .unwrap();

    assert_eq!(designs.len(), 2);
    assert_eq!(designs[0].css_content, ".card { border-radius: 12px; }");
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string(
            r#"{"error": {"message": "Rate limit reached", "type": "requests"}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let analysis = AnalysisResult::new(ProviderId::OpenAi, "x", vec![]);
    let err = provider
        .generate(&analysis, "p", 3, "gpt-4o", "sk-test")
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::RateLimited(ref m) if m == "Rate limit reached"));
    assert_eq!(err.kind(), ErrorKind::Vendor);
}

#[tokio::test]
async fn test_non_json_error_body_uses_status() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let image = ImageData::from_bytes(vec![1]);
    let err = provider.analyze(&image, "gpt-4o", "sk-test").await.unwrap_err();
    assert!(err.to_string().contains("HTTP error! status: 502"));
}

#[tokio::test]
async fn test_null_content_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
        ))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let image = ImageData::from_bytes(vec![1]);
    let err = provider.analyze(&image, "gpt-4o", "sk-test").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}
