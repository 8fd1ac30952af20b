use emojifier::OutputFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}

/// The request body for `POST /emojify`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmojifyRequest {
    /// The README fragment to enhance.
    pub content: String,
    /// `"list"` or `"table"`.
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmojifyResponse {
    pub text: String,
}
