use reqwest::Client;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Deliberately thin: one pooled HTTP client. Provider credentials and model
/// names are resolved per request inside `llm_client`, so no request shares
/// mutable state with any other.
#[derive(Clone)]
pub struct AppState {
    pub http: Client,
}
