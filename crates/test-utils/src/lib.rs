use async_trait::async_trait;
use emojifier::errors::EmojifyError;
use emojifier::providers::ai::AiProvider;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// How a [`MockAiProvider`] answers a matching prompt.
#[derive(Clone, Debug)]
enum MockAnswer {
    Text(String),
    ApiError { status: u16, message: Option<String> },
}

#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    responses: Arc<Mutex<HashMap<String, MockAnswer>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-programs a response for a specific prompt.
    /// The key should be a unique substring of the prompt.
    pub fn add_response(&self, key: &str, response: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), MockAnswer::Text(response.to_string()));
    }

    /// Pre-programs a provider error for prompts containing `key`.
    pub fn add_error(&self, key: &str, status: u16, message: Option<&str>) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(
            key.to_string(),
            MockAnswer::ApiError {
                status,
                message: message.map(String::from),
            },
        );
    }

    /// Retrieves the recorded prompts for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, EmojifyError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let responses = self.responses.lock().unwrap();
        let answer = responses
            .iter()
            .find(|(key, _)| prompt.contains(key.as_str()))
            .map(|(_, answer)| answer.clone());

        match answer {
            Some(MockAnswer::Text(text)) => Ok(text),
            Some(MockAnswer::ApiError { status, message }) => {
                Err(EmojifyError::AiApi { status, message })
            }
            None => Err(EmojifyError::EmptyResponse),
        }
    }
}
