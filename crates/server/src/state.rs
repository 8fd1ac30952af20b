//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup.

use crate::config::AppConfig;
use emojifier::{EmojifyClient, EmojifyClientBuilder};
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The generation client. Stateless, so one instance serves every request.
    pub client: Arc<EmojifyClient>,
}

impl AppState {
    pub fn new(client: EmojifyClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// Fails when the API key is missing, so the server never starts without one.
pub fn build_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = config.require_api_key()?;

    let mut builder = EmojifyClientBuilder::new().gemini_api_key(api_key.to_string());
    if let Some(api_url) = &config.gemini_api_url {
        builder = builder.gemini_api_url(api_url.clone());
    }
    let client = builder.build()?;
    tracing::info!(provider = ?client.ai_provider(), "Initialized generation client.");

    Ok(AppState::new(client))
}
