//! Axum route handler for PDF upload parsing.

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::pdf::extract_text;

#[derive(Debug, Serialize)]
pub struct ParsePdfResponse {
    pub text: String,
}

/// POST /parse-pdf
///
/// Accepts a multipart form with a `file` field and returns the extracted
/// plain text. If the form has several `file` fields the last one wins.
pub async fn handle_parse_pdf(
    mut multipart: Multipart,
) -> Result<Json<ParsePdfResponse>, AppError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read file field: {e}")))?;
            file = Some(bytes.to_vec());
        }
    }

    let bytes = file.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let text = extract_text(bytes).await?;

    Ok(Json(ParsePdfResponse { text }))
}
