pub mod gemini;

use crate::errors::EmojifyError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a hosted text-generation provider.
///
/// Implementations make exactly one remote call per invocation and return the
/// raw text of the response. Cleanup of that text is the caller's concern.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends `prompt` to the provider and returns its raw text response.
    async fn generate(&self, prompt: &str) -> Result<String, EmojifyError>;
}

dyn_clone::clone_trait_object!(AiProvider);
