// PRD analysis: request validation, persona resolution, provider dispatch.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod handlers;
pub mod models;
