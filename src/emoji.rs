//! Emoji text utility — detection, stripping, and tone-aware placement.
//!
//! The detection ranges are a fixed compatibility contract with the
//! legacy deployments: common pictographs (U+1F300-1F6FF), supplemental
//! symbols (U+1F900-1F9FF), miscellaneous symbols (U+2600-26FF), and
//! dingbats (U+2700-27BF). Do not widen them without migrating stored
//! expectations in downstream clients.

use crate::tone::{self, ToneConfig};
use regex::Regex;
use std::sync::LazyLock;

static RE_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "[\u{1F300}-\u{1F6FF}\u{1F900}-\u{1F9FF}\u{2600}-\u{26FF}\u{2700}-\u{27BF}]+",
    )
    .unwrap()
});

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Vehicle and transport glyphs removed from every outgoing result.
/// A literal list, not a range: the surrounding pictograph block holds
/// glyphs we do want to keep (e.g. the urgent-tone siren).
const VEHICLE_GLYPHS: &[&str] = &[
    "\u{1F697}", // 🚗 car
    "\u{1F695}", // 🚕 taxi
    "\u{1F699}", // 🚙 SUV
    "\u{1F68C}", // 🚌 bus
    "\u{1F68E}", // 🚎 trolleybus
    "\u{1F3CE}", // 🏎 racecar
    "\u{1F693}", // 🚓 police car
    "\u{1F691}", // 🚑 ambulance
    "\u{1F692}", // 🚒 fire engine
    "\u{1F690}", // 🚐 minibus
    "\u{1F6FB}", // 🛻 pickup truck
    "\u{1F69A}", // 🚚 delivery truck
    "\u{1F69B}", // 🚛 articulated lorry
    "\u{1F69C}", // 🚜 tractor
    "\u{1F3CD}", // 🏍 motorcycle
    "\u{1F6F5}", // 🛵 motor scooter
    "\u{1F6B2}", // 🚲 bicycle
    "\u{1F6F4}", // 🛴 kick scooter
];

/// True iff the text contains at least one code point in the emoji
/// blocks. Shares `RE_EMOJI` with `strip_emoji` so detection and
/// stripping can never disagree on the ranges.
pub fn contains_emoji(text: &str) -> bool {
    RE_EMOJI.is_match(text)
}

fn normalize_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Remove all emoji code points, then collapse whitespace runs and trim.
/// Idempotent.
pub fn strip_emoji(text: &str) -> String {
    normalize_whitespace(&RE_EMOJI.replace_all(text, ""))
}

/// Remove every vehicle glyph (with or without a trailing variation
/// selector), then normalize whitespace. Applied to every outgoing
/// result regardless of tone.
pub fn strip_vehicle_emoji(text: &str) -> String {
    let mut result = text.to_string();
    for glyph in VEHICLE_GLYPHS {
        let presented = format!("{}\u{FE0F}", glyph);
        result = result.replace(&presented, "").replace(glyph, "");
    }
    normalize_whitespace(&result)
}

/// Place a tone's glyph into the text.
///
/// This is the one authoritative guard for emoji placement: callers do
/// not pre-check the no-emoji set. Returns the text unchanged when the
/// glyph is empty, the tone is an auto sentinel, or the tone forbids
/// emoji. Prefix-placement tones get `"{emoji} {text}"`, everything
/// else `"{text} {emoji}"`.
pub fn insert_emoji(text: &str, emoji: &str, tone: &str, config: &ToneConfig) -> String {
    if emoji.is_empty() || tone::is_auto(tone) || !config.should_include_emoji(tone) {
        return text.to_string();
    }
    if config.prefers_prefix(tone) {
        format!("{} {}", emoji, text)
    } else {
        format!("{} {}", text, emoji)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_emoji_in_all_four_blocks() {
        assert!(contains_emoji("party \u{1F389}")); // 🎉 pictographs
        assert!(contains_emoji("deal \u{1F91D}")); // 🤝 supplemental
        assert!(contains_emoji("warning \u{26A0}")); // ⚠ misc symbols
        assert!(contains_emoji("love \u{2764}")); // ❤ dingbats
        assert!(!contains_emoji("plain ascii text"));
    }

    #[test]
    fn strip_emoji_is_idempotent() {
        let input = "we \u{1F604} won \u{1F389}  today";
        let once = strip_emoji(input);
        assert_eq!(once, "we won today");
        assert_eq!(strip_emoji(&once), once);
        assert!(!contains_emoji(&once));
    }

    #[test]
    fn strip_vehicle_removes_every_listed_glyph() {
        for glyph in VEHICLE_GLYPHS {
            let text = format!("go {} now", glyph);
            assert_eq!(strip_vehicle_emoji(&text), "go now", "glyph {} survived", glyph);
        }
    }

    #[test]
    fn strip_vehicle_handles_variation_selector_and_is_idempotent() {
        let input = "race \u{1F3CE}\u{FE0F} day";
        let once = strip_vehicle_emoji(input);
        assert_eq!(once, "race day");
        assert_eq!(strip_vehicle_emoji(&once), once);
    }

    #[test]
    fn strip_vehicle_keeps_non_vehicle_glyphs() {
        assert_eq!(
            strip_vehicle_emoji("act now \u{1F6A8} \u{1F697}"),
            "act now \u{1F6A8}"
        );
    }

    #[test]
    fn every_canonical_glyph_is_detectable() {
        // The repair step only inserts a glyph it can also detect, so
        // each table entry must fall inside the detection ranges.
        let config = ToneConfig::canonical();
        for tone in [
            "friendly", "joyful", "exciting", "loving", "supportive", "humorous",
            "urgent", "cautionary", "surprised", "inspirational", "thoughtful",
            "persuasive", "confident", "brutal", "grieved",
        ] {
            let glyph = config.emoji_for(tone);
            assert!(!glyph.is_empty(), "no glyph for {}", tone);
            assert!(contains_emoji(glyph), "glyph for {} outside detection ranges", tone);
        }
    }

    #[test]
    fn insert_places_by_tone() {
        let config = ToneConfig::canonical();
        assert_eq!(
            insert_emoji("act now", "\u{1F6A8}", "urgent", &config),
            "\u{1F6A8} act now"
        );
        assert_eq!(
            insert_emoji("we won", "\u{1F604}", "joyful", &config),
            "we won \u{1F604}"
        );
    }

    #[test]
    fn insert_is_a_no_op_when_guarded() {
        let config = ToneConfig::canonical();
        // Empty glyph, auto sentinel, and no-emoji tone all pass through.
        assert_eq!(insert_emoji("hello", "", "joyful", &config), "hello");
        assert_eq!(insert_emoji("hello", "\u{1F604}", "auto", &config), "hello");
        assert_eq!(insert_emoji("hello", "\u{1F604}", "formal", &config), "hello");
    }
}
