//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::llm_client::{self, Provider};
use crate::personas::PersonaId;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub provider: String,
    #[serde(default)]
    pub persona: Option<String>,
}

/// POST /analyze
///
/// Validates the request, resolves the persona, and dispatches the PRD to the
/// selected provider. Exactly one outbound call per request; the provider's
/// credential is resolved at dispatch time, not at startup.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("PRD text is required".to_string()));
    }

    let provider: Provider = request.provider.parse().map_err(|_| {
        AppError::Validation(
            "Invalid provider. Must be one of: anthropic, openai, gemini, groq".to_string(),
        )
    })?;

    let persona = PersonaId::resolve(request.persona.as_deref());

    let result =
        llm_client::analyze_prd(&state.http, provider, persona, request.text.trim()).await?;

    Ok(Json(result))
}
