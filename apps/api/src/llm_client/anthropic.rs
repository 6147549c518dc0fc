//! Anthropic Messages API codec.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{LlmError, ProviderSettings};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Sends one message and returns the first text-typed content block.
pub async fn complete(
    http: &Client,
    settings: &ProviderSettings,
    system: &str,
    user: &str,
) -> Result<String, LlmError> {
    let request_body = AnthropicRequest {
        model: &settings.model,
        max_tokens: MAX_TOKENS,
        system,
        messages: vec![AnthropicMessage {
            role: "user",
            content: user,
        }],
    };

    let response = http
        .post(format!("{}/v1/messages", settings.base_url))
        .header("x-api-key", &settings.api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .header("content-type", "application/json")
        .json(&request_body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        // Surface the structured error message when the body parses as one
        let message = serde_json::from_str::<AnthropicError>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        return Err(LlmError::Api {
            provider: "Anthropic",
            status: status.as_u16(),
            message,
        });
    }

    let parsed: AnthropicResponse = response.json().await?;

    parsed
        .content
        .into_iter()
        .find(|b| b.block_type == "text")
        .and_then(|b| b.text)
        .ok_or(LlmError::Empty("Anthropic"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_system_separately_from_messages() {
        let request = AnthropicRequest {
            model: "claude-sonnet-4-5-20250514",
            max_tokens: MAX_TOKENS,
            system: "You are a reviewer.",
            messages: vec![AnthropicMessage {
                role: "user",
                content: "Analyze the following PRD:\n\nBuild a button.",
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["system"], "You are a reviewer.");
        assert_eq!(json["max_tokens"], 4096);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_first_text_block_wins() {
        let body = r#"{
            "content": [
                {"type": "thinking", "text": null},
                {"type": "text", "text": "{\"a\":1}"},
                {"type": "text", "text": "ignored"}
            ]
        }"#;

        let parsed: AnthropicResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .content
            .into_iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text)
            .unwrap();
        assert_eq!(text, "{\"a\":1}");
    }
}
