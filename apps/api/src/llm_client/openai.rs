//! OpenAI-compatible chat-completions codec.
//!
//! Groq exposes the same wire format behind a different base URL, so both
//! providers share this module; `provider` only changes the error labels.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{LlmError, ProviderSettings};

const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Sends one chat completion and returns the first choice's message content.
pub async fn complete(
    http: &Client,
    settings: &ProviderSettings,
    provider: &'static str,
    system: &str,
    user: &str,
) -> Result<String, LlmError> {
    let request_body = ChatRequest {
        model: &settings.model,
        temperature: TEMPERATURE,
        messages: vec![
            ChatMessage {
                role: "system",
                content: system,
            },
            ChatMessage {
                role: "user",
                content: user,
            },
        ],
    };

    let response = http
        .post(format!("{}/v1/chat/completions", settings.base_url))
        .header("Authorization", format!("Bearer {}", settings.api_key))
        .header("content-type", "application/json")
        .json(&request_body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            provider,
            status: status.as_u16(),
            message,
        });
    }

    let parsed: ChatResponse = response.json().await?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|t| !t.is_empty())
        .ok_or(LlmError::Empty(provider))
}
