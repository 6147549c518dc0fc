pub mod analysis;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod pdf;
pub mod personas;
pub mod routes;
pub mod state;
