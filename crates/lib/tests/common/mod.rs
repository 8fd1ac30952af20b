#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the `emojifier` integration tests: one-time tracing
//! setup and a scripted AI provider that records every prompt it receives.

use async_trait::async_trait;
use dotenvy::dotenv;
use emojifier::{providers::ai::AiProvider, EmojifyError};
use std::collections::VecDeque;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();
    });
}

/// A scripted reply for [`MockAiProvider`].
#[derive(Clone, Debug)]
pub enum MockReply {
    Text(String),
    ApiError(Option<String>),
    Empty,
}

// --- Mock AI Provider for Logic Testing ---
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<String>>>,
    pub replies: Arc<RwLock<VecDeque<MockReply>>>,
}

impl MockAiProvider {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            replies: Arc::new(RwLock::new(replies.into())),
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self::new(vec![MockReply::Text(text.to_string())])
    }

    pub fn calls(&self) -> Vec<String> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, EmojifyError> {
        self.call_history.write().unwrap().push(prompt.to_string());

        match self.replies.write().unwrap().pop_front() {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::ApiError(message)) => Err(EmojifyError::AiApi {
                status: 500,
                message,
            }),
            Some(MockReply::Empty) => Err(EmojifyError::EmptyResponse),
            None => Ok("Default mock response".to_string()),
        }
    }
}
