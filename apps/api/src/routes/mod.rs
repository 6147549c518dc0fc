pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::pdf::handlers::handle_parse_pdf;
use crate::personas::{PersonaMeta, PERSONA_LIST};
use crate::state::AppState;

/// GET /personas
/// Display metadata for the persona selector.
async fn list_personas() -> Json<[PersonaMeta; 4]> {
    Json(PERSONA_LIST)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/personas", get(list_personas))
        .route("/analyze", post(handle_analyze))
        .route("/parse-pdf", post(handle_parse_pdf))
        .with_state(state)
}
