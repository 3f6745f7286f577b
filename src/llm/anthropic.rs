//! Anthropic Messages client — the production completion provider.
//!
//! Non-streaming: the rewrite is short and the caller waits for the
//! whole thing anyway.

use async_trait::async_trait;

use super::provider::{Completion, CompletionClient, CompletionError};

pub const MODEL: &str = "claude-haiku-4-5-20251001";
pub const MAX_TOKENS: u32 = 1024;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const ENV_KEY: &str = "ANTHROPIC_API_KEY";

pub struct AnthropicClient {
    api_key: Option<String>,
    http: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            http: reqwest::Client::new(),
        }
    }

    /// Build from `ANTHROPIC_API_KEY`. An unset or empty key produces an
    /// unconfigured client; the pipeline then never attempts the call.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(ENV_KEY).ok().filter(|k| !k.is_empty()),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    fn is_configured(&self) -> bool {
        // Must agree with complete(), which sends only self.api_key.
        self.api_key.is_some()
    }

    async fn complete(&self, system: &str, user: &str) -> Result<Completion, CompletionError> {
        let api_key = self.api_key.clone().unwrap_or_default();

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "model": MODEL,
                "max_tokens": MAX_TOKENS,
                "system": system,
                "messages": [{"role": "user", "content": user}]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("[LLM] API returned {}: {}", status, preview(&body));
            return Err(CompletionError::Api { status, body });
        }

        let body: serde_json::Value = response.json().await?;
        let text = extract_text(&body).ok_or(CompletionError::Format)?;
        Ok(Completion { text })
    }
}

/// First 200 characters of an error body for logging. Truncates on a
/// char boundary so multibyte upstream messages cannot panic.
fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}

/// Extract the first text block from an Anthropic Messages API response.
fn extract_text(body: &serde_json::Value) -> Option<String> {
    let content = body.get("content")?.as_array()?;
    for block in content {
        if block.get("type")?.as_str()? == "text" {
            return block.get("text")?.as_str().map(|s| s.to_string());
        }
    }
    None
}
