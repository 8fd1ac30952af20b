use crate::{errors::EmojifyError, providers::ai::AiProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// The model every request is sent to.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Sampling temperature for every request. Kept low so the formatting rules
/// are followed literally from one call to the next.
pub const GEMINI_TEMPERATURE: f32 = 0.4;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Returns the `generateContent` endpoint for `model`.
pub fn gemini_api_url(model: &str) -> String {
    format!("{GEMINI_API_BASE}/{model}:generateContent")
}

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Deserialize, Debug)]
struct GeminiErrorBody {
    #[serde(default)]
    message: String,
}

impl GeminiResponse {
    /// Concatenates the text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        let text: String = parts.into_iter().filter_map(|p| p.text).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Pulls the provider's message out of an error body.
///
/// Falls back to the raw body when it is not the documented JSON envelope.
/// Returns `None` when there is nothing to report.
fn extract_error_message(body: &str) -> Option<String> {
    let message = match serde_json::from_str::<GeminiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.to_string(),
    };
    let message = message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

// --- Gemini Provider implementation ---

/// A provider for interacting with the Google Gemini API.
#[derive(Clone)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider` against an explicit endpoint.
    ///
    /// Fails with [`EmojifyError::MissingApiKey`] when `api_key` is blank.
    pub fn new(api_url: String, api_key: String) -> Result<Self, EmojifyError> {
        if api_key.trim().is_empty() {
            return Err(EmojifyError::MissingApiKey);
        }
        let client = ReqwestClient::builder()
            .build()
            .map_err(EmojifyError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Creates a provider for the default endpoint of [`GEMINI_MODEL`].
    pub fn from_api_key(api_key: String) -> Result<Self, EmojifyError> {
        Self::new(gemini_api_url(GEMINI_MODEL), api_key)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, EmojifyError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: GEMINI_TEMPERATURE,
            },
        };

        debug!(api_url = %self.api_url, prompt_len = prompt.len(), "Sending request to Gemini");

        let response = self
            .client
            .post(&self.api_url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EmojifyError::AiRequest(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(EmojifyError::AiApi {
                status: status.as_u16(),
                message: extract_error_message(&error_text),
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| EmojifyError::AiDeserialization(e.without_url()))?;

        gemini_response
            .into_text()
            .ok_or(EmojifyError::EmptyResponse)
    }
}
