//! Completion provider seam — trait, result type, error taxonomy.

use async_trait::async_trait;
use thiserror::Error;

/// Failures from the outbound completion call. The pipeline treats
/// every variant uniformly and falls back; the distinction exists for
/// logging and for provider implementations.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("no text content in response")]
    Format,
}

/// A single completion from the model.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
}

/// The injected LLM capability. One call per request, no retries;
/// the pipeline owns the timeout.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Whether a credential is configured. The pipeline routes straight
    /// to the fallback when this is false, without attempting a call.
    fn is_configured(&self) -> bool;

    async fn complete(&self, system: &str, user: &str) -> Result<Completion, CompletionError>;
}

/// Check if a provider has an API key configured in the environment.
pub fn is_provider_configured(env_key: &str) -> bool {
    std::env::var(env_key)
        .map(|k| !k.is_empty())
        .unwrap_or(false)
}
