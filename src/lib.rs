//! Text Rephraser
//!
//! A small web service that rewrites text more clearly and professionally
//! with an OpenAI-compatible chat completion API:
//! - `POST /api/rephrase` and a streaming variant
//! - A static single-page form served at `/`
//! - A completion wrapper usable on its own

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::llm::{HttpClient, OpenAiClient};

/// Build the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let client = OpenAiClient::with_base_url(
        HttpClient::new(),
        &config.openai.api_key,
        config.openai.base_url.as_str(),
    )
    .with_model(config.openai.model.as_str());

    AppState::new(Arc::new(client), config.openai.has_api_key())
}
