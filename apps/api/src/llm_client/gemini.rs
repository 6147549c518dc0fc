//! Gemini generateContent codec.
//!
//! This call shape has no separate system field: the system prompt is
//! concatenated ahead of the user text in a single user turn.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{LlmError, ProviderSettings};

const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: &'static str,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

/// Sends one generateContent call and returns the first candidate's first
/// text part.
pub async fn complete(
    http: &Client,
    settings: &ProviderSettings,
    system: &str,
    user: &str,
) -> Result<String, LlmError> {
    let request_body = GeminiRequest {
        contents: vec![GeminiContent {
            role: "user",
            parts: vec![GeminiPart {
                text: format!("{system}\n\n{user}"),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
        },
    };

    // The key rides in the query string, not a header
    let url = format!(
        "{}/models/{}:generateContent?key={}",
        settings.base_url, settings.model, settings.api_key
    );

    let response = http
        .post(url)
        .header("content-type", "application/json")
        .json(&request_body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            provider: "Gemini",
            status: status.as_u16(),
            message,
        });
    }

    let parsed: GeminiResponse = response.json().await?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
        .filter(|t| !t.is_empty())
        .ok_or(LlmError::Empty("Gemini"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_generation_config_camel_case() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart {
                    text: "prompt".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("generationConfig").is_some());
        assert!(json.get("generation_config").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[test]
    fn test_response_first_text_part_is_extracted() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"a\":1}"}]}}
            ]
        }"#;

        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .unwrap();
        assert_eq!(text, "{\"a\":1}");
    }

    #[test]
    fn test_empty_candidates_deserialize() {
        let parsed: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
