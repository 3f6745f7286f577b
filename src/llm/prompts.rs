//! Prompt builders for the tone-transformation call.
//!
//! The system and user prompts deliberately repeat the emoji directive.
//! The duplication measurably improves model compliance; do not
//! deduplicate it.

use crate::tone::{self, ToneConfig};

/// Length guidance resolves by exact match; anything unrecognized gets
/// the neutral default.
fn length_guidance(length_class: &str) -> &'static str {
    match length_class {
        "short" => "Keep it brief.",
        "medium" => "Use a moderate length.",
        "long" => "Be extensive and elaborate, using multiple paragraphs. Longer is better.",
        "auto" | "automatic" => "Determine the appropriate length automatically from the content.",
        _ => "Use an appropriate length.",
    }
}

fn emoji_guidance(tone: &str, config: &ToneConfig) -> String {
    if config.should_include_emoji(tone) {
        if tone::is_auto(tone) {
            "Include emoji that match the automatically selected tone.".to_string()
        } else {
            format!("Include emoji that match the {} tone.", tone)
        }
    } else {
        "Do not include any emoji.".to_string()
    }
}

/// The assistant persona. Repeats the emoji directive from the user
/// prompt on purpose.
pub fn build_system_prompt(message_category: &str, tone: &str, config: &ToneConfig) -> String {
    format!(
        "You are an expert writer for {} messages. You rewrite messages to match a requested tone while preserving their meaning. {}",
        message_category,
        emoji_guidance(tone, config),
    )
}

/// The per-request instruction payload. Pure function of its inputs.
pub fn build_user_prompt(
    text: &str,
    message_category: &str,
    length_class: &str,
    tone: &str,
    config: &ToneConfig,
) -> String {
    let tone_instruction = if tone::is_auto(tone) {
        format!(
            "Rewrite the following {} message, inferring the tone that best fits its content.",
            message_category
        )
    } else {
        format!(
            "Rewrite the following {} message to sound more {}.",
            message_category, tone
        )
    };

    format!(
        "{tone_instruction}\n\
         {length}\n\
         {emoji}\n\n\
         Original message:\n\
         \"{text}\"\n\n\
         Return only the rewritten text, with no commentary or explanation. \
         The rewrite must be significantly different from the original so that \
         the target tone is unambiguous.",
        length = length_guidance(length_class),
        emoji = emoji_guidance(tone, config),
    )
}
