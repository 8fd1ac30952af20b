use thiserror::Error;

/// Errors raised while constructing a client or talking to the AI provider.
#[derive(Error, Debug)]
pub enum EmojifyError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("AI provider is missing")]
    MissingAiProvider,
    #[error("Failed to send request to Gemini API: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize Gemini API response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("Gemini API returned status {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    AiApi {
        status: u16,
        message: Option<String>,
    },
    #[error("Gemini API response contained no text")]
    EmptyResponse,
}

impl EmojifyError {
    /// The human-readable message this error carries, if it has one.
    ///
    /// A provider error with an empty body and an empty candidate list are
    /// the two unstructured cases; both return `None`.
    pub fn message(&self) -> Option<String> {
        match self {
            EmojifyError::AiApi { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from),
            EmojifyError::EmptyResponse => None,
            other => Some(other.to_string()),
        }
    }
}

/// The failure surfaced to callers of [`crate::EmojifyClient::generate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The remote call failed with an error that carried a message.
    #[error("Gemini API Error: {0}")]
    Remote(String),
    /// The remote call failed without any usable detail.
    #[error("An unknown error occurred while communicating with the Gemini API.")]
    Unknown,
}

impl GenerationFailure {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<EmojifyError> for GenerationFailure {
    fn from(err: EmojifyError) -> Self {
        match err.message() {
            Some(message) => GenerationFailure::Remote(message),
            None => GenerationFailure::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_with_message_is_remote() {
        let err = EmojifyError::AiApi {
            status: 429,
            message: Some("quota exceeded".to_string()),
        };
        let failure = GenerationFailure::from(err);
        assert_eq!(failure, GenerationFailure::Remote("quota exceeded".into()));
        assert_eq!(failure.message(), "Gemini API Error: quota exceeded");
    }

    #[test]
    fn api_error_without_message_is_unknown() {
        for message in [None, Some(String::new()), Some("   ".to_string())] {
            let err = EmojifyError::AiApi {
                status: 500,
                message,
            };
            assert_eq!(GenerationFailure::from(err), GenerationFailure::Unknown);
        }
    }

    #[test]
    fn empty_response_is_unknown() {
        let failure = GenerationFailure::from(EmojifyError::EmptyResponse);
        assert_eq!(
            failure.message(),
            "An unknown error occurred while communicating with the Gemini API."
        );
    }

    #[test]
    fn configuration_errors_keep_their_text() {
        let failure = GenerationFailure::from(EmojifyError::MissingAiProvider);
        assert_eq!(failure.message(), "Gemini API Error: AI provider is missing");
    }
}
