//! # README Emojifier
//!
//! This crate rewrites plain Markdown feature lists (the kind found in project
//! README files) into emoji-annotated Markdown by asking a hosted language
//! model to do the rewriting.
//!
//! The pipeline is a straight line: [`prompts::build_prompt`] turns the
//! caller's text and an [`OutputFormat`] into an instruction prompt, an
//! [`providers::ai::AiProvider`] sends it in a single request, and
//! [`sanitize::sanitize_output`] removes the stray code fence the model
//! sometimes wraps its answer in.

pub mod errors;
pub mod prompts;
pub mod providers;
pub mod sanitize;
pub mod types;

pub use errors::{EmojifyError, GenerationFailure};
pub use types::{EmojifyClient, EmojifyClientBuilder, EmojifyResult, OutputFormat};

use tracing::{debug, error, info};

impl EmojifyClient {
    /// Rewrites `content` in the requested shape and returns the cleaned Markdown.
    ///
    /// Exactly one remote call is made. Empty input is not rejected here; the
    /// calling layer is expected to validate it first.
    pub async fn generate(
        &self,
        content: &str,
        format: OutputFormat,
    ) -> Result<String, GenerationFailure> {
        self.generate_with_details(content, format)
            .await
            .map(|result| result.text)
    }

    /// Same as [`EmojifyClient::generate`], but also returns the prompt that
    /// was sent and the provider's unsanitized answer.
    pub async fn generate_with_details(
        &self,
        content: &str,
        format: OutputFormat,
    ) -> Result<EmojifyResult, GenerationFailure> {
        info!(%format, content_len = content.len(), "[generate] Building prompt.");
        let prompt = prompts::build_prompt(content, format);
        debug!(prompt_len = prompt.len(), "[generate] Dispatching request.");

        let raw_response = match self.ai_provider.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Error calling Gemini API: {e}");
                return Err(GenerationFailure::from(e));
            }
        };

        let text = sanitize::sanitize_output(&raw_response);
        debug!(
            raw_len = raw_response.len(),
            text_len = text.len(),
            "[generate] Sanitized response."
        );

        Ok(EmojifyResult {
            text,
            prompt,
            raw_response,
        })
    }
}
