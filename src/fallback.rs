//! Deterministic fallback rewrite — no network, never fails.
//!
//! Used whenever the LLM path is unavailable or returns a degenerate
//! completion. Same (text, tone, length) always yields the same output.

use crate::emoji;
use crate::tone::{self, ToneConfig};

// Auto length thresholds, in characters: under 100 is short, under 300
// is medium, everything longer is long.
const SHORT_MAX_CHARS: usize = 100;
const MEDIUM_MAX_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthBucket {
    Short,
    Medium,
    Long,
}

fn resolve_length(length_class: &str, text: &str) -> LengthBucket {
    match length_class {
        "short" => LengthBucket::Short,
        "medium" => LengthBucket::Medium,
        "long" => LengthBucket::Long,
        "auto" | "automatic" => {
            let chars = text.chars().count();
            if chars < SHORT_MAX_CHARS {
                LengthBucket::Short
            } else if chars < MEDIUM_MAX_CHARS {
                LengthBucket::Medium
            } else {
                LengthBucket::Long
            }
        }
        // Unknown length classes behave like short: no padding.
        _ => LengthBucket::Short,
    }
}

fn filler_count(bucket: LengthBucket, config: &ToneConfig) -> usize {
    match bucket {
        LengthBucket::Short => 1,
        LengthBucket::Medium => config.medium_multiplier,
        LengthBucket::Long => config.long_multiplier,
    }
}

/// Synthesize a tone-shifted rewrite without the LLM.
///
/// Auto tone normalizes to "neutral" before template lookup; unknown
/// tones pass the text through the template step unchanged. The caller
/// applies the vehicle filter, not this function.
pub fn generate_fallback(text: &str, tone: &str, length_class: &str, config: &ToneConfig) -> String {
    let tone = if tone::is_auto(tone) { "neutral" } else { tone };

    let bucket = resolve_length(length_class, text);
    let multiplier = filler_count(bucket, config);

    let mut result = match config.template(tone) {
        Some(template) => template.apply(text),
        None => text.to_string(),
    };

    // Placement guard lives inside insert_emoji; no pre-check here.
    result = emoji::insert_emoji(&result, config.emoji_for(tone), tone, config);

    if multiplier > 1 {
        let pool = config.fillers_for(tone);
        for i in 0..multiplier {
            result.push(' ');
            result.push_str(pool[i % pool.len()]);
        }
    }

    result
}
