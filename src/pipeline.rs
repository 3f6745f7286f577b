//! Tone transformation orchestrator.
//!
//! Single attempt at the LLM, then validate and repair its output; any
//! failure or degenerate completion degrades to the deterministic
//! fallback. The caller always gets an improved message back; the only
//! hard error is empty input.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::emoji;
use crate::fallback;
use crate::llm::{self, prompts, CompletionClient};
use crate::tone::ToneConfig;

/// Bound on the single outbound LLM call. Past this the request is
/// treated like any other upstream failure.
pub const LLM_TIMEOUT: Duration = Duration::from_secs(60);

/// One incoming transformation request. Constructed per call, consumed
/// once, never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneRequest {
    pub text: String,
    pub message_category: String,
    pub length_class: String,
    pub tone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneResponse {
    pub improved_text: String,
}

/// The only failure surfaced to the caller. Everything else (missing
/// credential, network error, timeout, degenerate completion) is
/// absorbed into the fallback path.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("message text is empty")]
    EmptyInput,
}

/// Run one request through the full decision flow.
pub async fn transform<C: CompletionClient + ?Sized>(
    client: &C,
    config: &ToneConfig,
    req: &ToneRequest,
) -> Result<ToneResponse, TransformError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(TransformError::EmptyInput);
    }

    if !client.is_configured() {
        log::warn!("[TRANSFORM] No credential configured, using fallback");
        return Ok(fallback_response(text, req, config));
    }

    let system = prompts::build_system_prompt(&req.message_category, &req.tone, config);
    let user = prompts::build_user_prompt(text, &req.message_category, &req.length_class, &req.tone, config);

    log::info!(
        "[TRANSFORM] tone={}, category={}, length={}, {} chars",
        req.tone,
        req.message_category,
        req.length_class,
        text.len()
    );

    let start = std::time::Instant::now();
    let outcome = tokio::time::timeout(LLM_TIMEOUT, client.complete(&system, &user)).await;

    let completion = match outcome {
        Ok(Ok(completion)) => {
            log::info!("[LLM] Completion in {}ms", start.elapsed().as_millis());
            llm::strip_code_fences(&completion.text)
        }
        Ok(Err(e)) => {
            log::warn!("[TRANSFORM] LLM call failed: {}, using fallback", e);
            return Ok(fallback_response(text, req, config));
        }
        Err(_) => {
            log::warn!(
                "[TRANSFORM] LLM call timed out after {}s, using fallback",
                LLM_TIMEOUT.as_secs()
            );
            return Ok(fallback_response(text, req, config));
        }
    };

    let completion = completion.trim();
    if completion.is_empty() || completion == text {
        log::warn!("[TRANSFORM] Degenerate completion, using fallback");
        return Ok(fallback_response(text, req, config));
    }

    // Repair: add the tone's glyph when the model forgot it, strip any
    // glyphs when the tone forbids them.
    let repaired = if config.should_include_emoji(&req.tone) {
        if emoji::contains_emoji(completion) {
            completion.to_string()
        } else {
            emoji::insert_emoji(completion, config.emoji_for(&req.tone), &req.tone, config)
        }
    } else {
        emoji::strip_emoji(completion)
    };

    Ok(ToneResponse {
        improved_text: emoji::strip_vehicle_emoji(&repaired),
    })
}

/// Deterministic path: fallback rewrite plus the unconditional vehicle
/// filter.
fn fallback_response(text: &str, req: &ToneRequest, config: &ToneConfig) -> ToneResponse {
    let generated = fallback::generate_fallback(text, &req.tone, &req.length_class, config);
    ToneResponse {
        improved_text: emoji::strip_vehicle_emoji(&generated),
    }
}
