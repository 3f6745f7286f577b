//! LLM domain — the outbound completion capability.
//!
//! The pipeline talks to `CompletionClient`, never to a concrete
//! provider. `AnthropicClient` is the production implementation;
//! tests substitute their own.

mod anthropic;
pub mod prompts;
pub mod provider;

pub use anthropic::AnthropicClient;
pub use provider::{Completion, CompletionClient, CompletionError};

/// Strip markdown code fences a model sometimes wraps its answer in.
/// Returns the inner text trimmed; non-fenced input is only trimmed.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    // Drop an optional language tag on the fence line.
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::strip_code_fences;

    #[test]
    fn strips_fences_with_language_tag() {
        let fenced = "```text\nHello there.\n```";
        assert_eq!(strip_code_fences(fenced), "Hello there.");
    }

    #[test]
    fn plain_text_is_only_trimmed() {
        assert_eq!(strip_code_fences("  Hello there.\n"), "Hello there.");
    }
}
