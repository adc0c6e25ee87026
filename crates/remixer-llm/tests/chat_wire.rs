use std::str::FromStr;
use std::time::Duration;

use remixer_core::credential::ApiKey;
use remixer_llm::chat::{
    ChatMessage, ChatRequest, HttpChatTransport, completions_endpoint, decode_completion,
};
use remixer_llm::error::LlmError;
use remixer_llm::provider::Provider;

const OK_BODY: &str = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"TWEET: hi"}}]}"#;

#[test]
fn success_returns_first_choice_content() {
    assert_eq!(decode_completion(200, OK_BODY).unwrap(), "TWEET: hi");
}

#[test]
fn auth_failures_classify_as_unauthorized() {
    assert!(matches!(
        decode_completion(401, "{}"),
        Err(LlmError::Unauthorized)
    ));
    assert!(matches!(
        decode_completion(403, "forbidden"),
        Err(LlmError::Unauthorized)
    ));
}

#[test]
fn throttling_classifies_as_rate_limited() {
    assert!(matches!(
        decode_completion(429, "slow down"),
        Err(LlmError::RateLimited)
    ));
}

#[test]
fn other_statuses_are_upstream_errors() {
    assert!(matches!(
        decode_completion(503, ""),
        Err(LlmError::Upstream { status: 503 })
    ));
}

#[test]
fn bodies_missing_structure_are_malformed_and_keep_the_payload() {
    for body in [
        "not json",
        r#"{"choices":[]}"#,
        r#"{"choices":[{"message":{}}]}"#,
        r#"{"result":"TWEET: hi"}"#,
    ] {
        match decode_completion(200, body) {
            Err(LlmError::MalformedResponse { raw, .. }) => assert_eq!(raw, body),
            other => panic!("expected malformed response for {body}, got {other:?}"),
        }
    }
}

#[test]
fn request_serializes_openai_shape() {
    let request = ChatRequest {
        model: "sonar".to_string(),
        messages: vec![ChatMessage::system("be brief"), ChatMessage::user("hi")],
        temperature: None,
    };
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["model"], "sonar");
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][1]["role"], "user");
    assert_eq!(json["messages"][1]["content"], "hi");
    assert!(json.get("temperature").is_none());
}

#[test]
fn endpoint_ignores_trailing_slash() {
    assert_eq!(
        completions_endpoint("https://api.openai.com/v1/"),
        "https://api.openai.com/v1/chat/completions"
    );

    let key = ApiKey::parse("pplx-0123456789").unwrap();
    let transport =
        HttpChatTransport::new(Provider::Perplexity.base_url(), key, Duration::from_secs(5))
            .unwrap();
    assert_eq!(
        transport.endpoint(),
        "https://api.perplexity.ai/chat/completions"
    );
}

#[test]
fn providers_parse_case_insensitively() {
    assert_eq!(Provider::from_str("OpenAI").unwrap(), Provider::OpenAi);
    assert_eq!(
        Provider::from_str(" openrouter ").unwrap(),
        Provider::OpenRouter
    );
    assert!(Provider::from_str("bard").is_err());
    assert_eq!(Provider::default(), Provider::Perplexity);
}
