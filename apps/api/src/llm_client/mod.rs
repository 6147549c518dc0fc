/// LLM Client — the single point of entry for all provider API calls.
///
/// ARCHITECTURAL RULE: No other module may call a provider API directly.
/// All LLM interactions MUST go through this module.
///
/// Each dispatch is a single attempt: no retry, no streaming, and no
/// cancellation once the outbound call is issued.
use std::str::FromStr;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::analysis::models::AnalysisResult;
use crate::personas::PersonaId;

mod anthropic;
mod gemini;
mod openai;

/// Fixed instruction prefix wrapped around the PRD text for every provider.
const USER_PREFIX: &str = "Analyze the following PRD:\n\n";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0} is not set in .env")]
    MissingApiKey(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error (status {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("No response from {0}")]
    Empty(&'static str),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The closed set of supported providers.
///
/// Groq speaks the OpenAI chat-completions wire format behind a different
/// base URL, so it shares that codec rather than getting its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Anthropic,
    OpenAi,
    Gemini,
    Groq,
}

impl FromStr for Provider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "anthropic" => Ok(Provider::Anthropic),
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            "groq" => Ok(Provider::Groq),
            _ => Err(()),
        }
    }
}

/// Per-provider settings resolved from the environment at call time.
/// Only the API key is required, and only for the provider actually selected.
struct ProviderSettings {
    api_key: String,
    model: String,
    base_url: String,
}

fn resolve_settings(
    key_var: &'static str,
    model_var: &str,
    default_model: &str,
    url_var: &str,
    default_url: &str,
) -> Result<ProviderSettings, LlmError> {
    let api_key = std::env::var(key_var).map_err(|_| LlmError::MissingApiKey(key_var))?;

    Ok(ProviderSettings {
        api_key,
        model: std::env::var(model_var).unwrap_or_else(|_| default_model.to_string()),
        base_url: std::env::var(url_var).unwrap_or_else(|_| default_url.to_string()),
    })
}

/// Dispatches a PRD review to the selected provider and parses the model's
/// reply into an `AnalysisResult`.
pub async fn analyze_prd(
    http: &Client,
    provider: Provider,
    persona: PersonaId,
    prd_text: &str,
) -> Result<AnalysisResult, LlmError> {
    let system = persona.system_prompt();
    let user = format!("{USER_PREFIX}{prd_text}");

    let raw = match provider {
        Provider::Anthropic => {
            let settings = resolve_settings(
                "ANTHROPIC_API_KEY",
                "ANTHROPIC_MODEL",
                "claude-sonnet-4-5-20250514",
                "ANTHROPIC_BASE_URL",
                "https://api.anthropic.com",
            )?;
            anthropic::complete(http, &settings, system, &user).await?
        }
        Provider::OpenAi => {
            let settings = resolve_settings(
                "OPENAI_API_KEY",
                "OPENAI_MODEL",
                "gpt-4o",
                "OPENAI_BASE_URL",
                "https://api.openai.com",
            )?;
            openai::complete(http, &settings, "OpenAI", system, &user).await?
        }
        Provider::Gemini => {
            let settings = resolve_settings(
                "GEMINI_API_KEY",
                "GEMINI_MODEL",
                "gemini-1.5-pro",
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com/v1beta",
            )?;
            gemini::complete(http, &settings, system, &user).await?
        }
        Provider::Groq => {
            let settings = resolve_settings(
                "GROQ_API_KEY",
                "GROQ_MODEL",
                "llama-3.3-70b-versatile",
                "GROQ_BASE_URL",
                "https://api.groq.com/openai",
            )?;
            openai::complete(http, &settings, "Groq", system, &user).await?
        }
    };

    debug!("{provider:?} returned {} bytes of text", raw.len());

    parse_analysis(&raw)
}

/// Strips ```json / ``` code-fence markers anywhere in the text and trims.
/// Models are told not to fence their output; some do anyway.
fn strip_json_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parses raw model output as an `AnalysisResult` after fence stripping.
fn parse_analysis(raw: &str) -> Result<AnalysisResult, LlmError> {
    let cleaned = strip_json_fences(raw);
    serde_json::from_str(&cleaned).map_err(LlmError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_with_leading_prose() {
        // Fence markers are removed wherever they appear, not just at the edges
        let input = "Here is the review:\n```json\n{\"key\": \"value\"}\n```\nDone.";
        assert_eq!(
            strip_json_fences(input),
            "Here is the review:\n\n{\"key\": \"value\"}\n\nDone."
        );
    }

    const REVIEW_JSON: &str = r#"{
        "overall_score": 42,
        "overall_verdict": "Too vague to build.",
        "dimensions": [
            {
                "name": "Scope Clarity",
                "score": 4,
                "status": "warning",
                "issues": ["No out-of-scope section"],
                "suggestions": ["Add explicit non-goals"]
            }
        ]
    }"#;

    #[test]
    fn test_parse_analysis_fenced_equals_unfenced() {
        let fenced = format!("```json\n{REVIEW_JSON}\n```");
        let from_fenced = parse_analysis(&fenced).unwrap();
        let from_plain = parse_analysis(REVIEW_JSON).unwrap();
        assert_eq!(from_fenced, from_plain);
        assert_eq!(from_plain.overall_score, 42.0);
        assert_eq!(from_plain.dimensions.len(), 1);
    }

    #[test]
    fn test_parse_analysis_rejects_prose() {
        let err = parse_analysis("I could not review this PRD.").unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("anthropic".parse::<Provider>(), Ok(Provider::Anthropic));
        assert_eq!("openai".parse::<Provider>(), Ok(Provider::OpenAi));
        assert_eq!("gemini".parse::<Provider>(), Ok(Provider::Gemini));
        assert_eq!("groq".parse::<Provider>(), Ok(Provider::Groq));
        assert!("mistral".parse::<Provider>().is_err());
        assert!("Anthropic".parse::<Provider>().is_err());
    }

    #[test]
    fn test_missing_api_key_error_names_the_variable() {
        let err = LlmError::MissingApiKey("GEMINI_API_KEY");
        assert_eq!(err.to_string(), "GEMINI_API_KEY is not set in .env");
    }
}
