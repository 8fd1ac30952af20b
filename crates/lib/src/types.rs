use crate::{
    errors::EmojifyError,
    providers::ai::{
        gemini::{gemini_api_url, GeminiProvider, GEMINI_MODEL},
        AiProvider,
    },
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The output shape requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One bullet per feature: `- **Name** <emoji> – <description>`.
    List,
    /// A `Feature` / emoji / `Description` Markdown table.
    Table,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::List => "list",
            OutputFormat::Table => "table",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a format name is neither `list` nor `table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format '{}', expected 'list' or 'table'", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(OutputFormat::List),
            "table" => Ok(OutputFormat::Table),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// The full outcome of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojifyResult {
    /// The sanitized Markdown handed back to the caller.
    pub text: String,
    /// The prompt that was sent to the provider.
    pub prompt: String,
    /// The provider's text before sanitization.
    pub raw_response: String,
}

/// A client that turns plain README feature lists into emoji-annotated Markdown.
///
/// The client holds no mutable state; one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct EmojifyClient {
    pub(crate) ai_provider: Box<dyn AiProvider>,
}

impl EmojifyClient {
    pub fn new(ai_provider: Box<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    pub fn ai_provider(&self) -> &dyn AiProvider {
        self.ai_provider.as_ref()
    }
}

/// A builder for creating `EmojifyClient` instances.
///
/// Either an explicit provider or a Gemini API key must be supplied.
///
/// # Examples
///
/// ```
/// use emojifier::EmojifyClientBuilder;
///
/// let client = EmojifyClientBuilder::new()
///     .gemini_api_key("my-api-key".to_string())
///     .build();
/// assert!(client.is_ok());
/// ```
#[derive(Default)]
pub struct EmojifyClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    gemini_api_key: Option<String>,
    gemini_api_url: Option<String>,
}

impl EmojifyClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already constructed provider. Takes precedence over the Gemini settings.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Sets the credential for the Gemini provider.
    pub fn gemini_api_key(mut self, api_key: String) -> Self {
        self.gemini_api_key = Some(api_key);
        self
    }

    /// Overrides the Gemini endpoint. Defaults to the fixed model's URL.
    pub fn gemini_api_url(mut self, api_url: String) -> Self {
        self.gemini_api_url = Some(api_url);
        self
    }

    /// Builds the `EmojifyClient`.
    ///
    /// Fails with `MissingApiKey` when the Gemini key is blank, and with
    /// `MissingAiProvider` when neither a provider nor a key was given.
    pub fn build(self) -> Result<EmojifyClient, EmojifyError> {
        if let Some(ai_provider) = self.ai_provider {
            return Ok(EmojifyClient { ai_provider });
        }

        let api_key = match self.gemini_api_key {
            Some(key) => key,
            None if self.gemini_api_url.is_some() => return Err(EmojifyError::MissingApiKey),
            None => return Err(EmojifyError::MissingAiProvider),
        };
        let api_url = self
            .gemini_api_url
            .unwrap_or_else(|| gemini_api_url(GEMINI_MODEL));

        Ok(EmojifyClient {
            ai_provider: Box::new(GeminiProvider::new(api_url, api_key)?),
        })
    }
}
