// PDF ingestion: multipart upload -> plain text via pdf-extract.
// Extraction is CPU-bound, so it runs on the blocking thread pool.

pub mod handlers;

use crate::errors::AppError;

const PARSE_FAILED: &str = "Failed to parse PDF. Make sure the file is a valid PDF.";

/// Extracts text from in-memory PDF bytes.
/// The extraction library's own error is logged, not returned to the client.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| {
            tracing::warn!("pdf-extract failed: {e}");
            AppError::Pdf(PARSE_FAILED.to_string())
        })
}
