//! Tonecraft — tone transformation engine.
//!
//! Rewrites a short message into a target tone through an LLM
//! capability, validating and repairing the completion, and degrading
//! to a deterministic template rewrite whenever the call is
//! unavailable or unusable. No business logic lives outside the
//! modules below; HTTP routing and process bootstrap belong to the
//! embedding application.
//!
//!   - tone.rs     — canonical tone tables (emoji, placement, templates)
//!   - emoji.rs    — emoji detection, stripping, tone-aware insertion
//!   - llm/        — completion provider trait, prompts, Anthropic client
//!   - fallback.rs — deterministic offline rewrite
//!   - pipeline.rs — the orchestration flow tying it all together

pub mod emoji;
pub mod fallback;
pub mod llm;
pub mod pipeline;
pub mod tone;

pub use llm::{AnthropicClient, Completion, CompletionClient, CompletionError};
pub use pipeline::{transform, ToneRequest, ToneResponse, TransformError, LLM_TIMEOUT};
pub use tone::ToneConfig;
