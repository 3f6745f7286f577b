//! Canonical tone tables — emoji assignments, placement, templates, fillers.
//!
//! The two legacy deployments shipped divergent copies of these tables
//! (different glyphs, different length multipliers). This module keeps the
//! single reconciled version. `ToneConfig` is built once at startup and
//! passed into the pipeline, the fallback generator, and the emoji utility
//! so each stays independently testable.

use std::collections::{HashMap, HashSet};

/// Filler sentences appended for the medium length bucket.
pub const MEDIUM_FILLER_SENTENCES: usize = 3;
/// Filler sentences appended for the long length bucket.
pub const LONG_FILLER_SENTENCES: usize = 6;

/// True for the sentinel tones that defer the choice to the LLM.
pub fn is_auto(tone: &str) -> bool {
    matches!(tone, "auto" | "automatic")
}

/// One deterministic sentence pattern: `{prefix}{text}{suffix}`,
/// optionally lowercasing the original text so it reads mid-sentence.
#[derive(Debug, Clone, Copy)]
pub struct SentenceTemplate {
    prefix: &'static str,
    suffix: &'static str,
    lowercase: bool,
}

impl SentenceTemplate {
    pub fn apply(&self, text: &str) -> String {
        if self.lowercase {
            format!("{}{}{}", self.prefix, text.to_lowercase(), self.suffix)
        } else {
            format!("{}{}{}", self.prefix, text, self.suffix)
        }
    }
}

const fn tpl(prefix: &'static str, suffix: &'static str, lowercase: bool) -> SentenceTemplate {
    SentenceTemplate { prefix, suffix, lowercase }
}

const GENERIC_FILLERS: &[&str] = &[
    "I wanted to make sure this reaches you with the right emphasis.",
    "Please take a moment to consider it.",
    "Let me know if anything is unclear.",
];

/// Immutable tone configuration shared by every request.
pub struct ToneConfig {
    emoji: HashMap<&'static str, &'static str>,
    no_emoji: HashSet<&'static str>,
    prefix_placement: HashSet<&'static str>,
    templates: HashMap<&'static str, SentenceTemplate>,
    fillers: HashMap<&'static str, &'static [&'static str]>,
    pub medium_multiplier: usize,
    pub long_multiplier: usize,
}

impl ToneConfig {
    /// The reconciled production table. One glyph per tone; tones in the
    /// no-emoji set have no entry at all, so a glyph can never leak out
    /// for them even if a call site skips the placement guard.
    pub fn canonical() -> Self {
        let emoji = HashMap::from([
            ("friendly", "\u{1F60A}"),      // 😊
            ("joyful", "\u{1F604}"),        // 😄
            ("exciting", "\u{1F389}"),      // 🎉
            ("loving", "\u{2764}"),         // ❤
            ("supportive", "\u{1F91D}"),    // 🤝
            ("humorous", "\u{1F602}"),      // 😂
            ("urgent", "\u{1F6A8}"),        // 🚨
            ("cautionary", "\u{26A0}"),     // ⚠
            ("surprised", "\u{1F62E}"),     // 😮
            ("inspirational", "\u{2728}"),  // ✨
            ("thoughtful", "\u{1F914}"),    // 🤔
            ("persuasive", "\u{1F44D}"),    // 👍
            ("confident", "\u{1F4AA}"),     // 💪
            ("brutal", "\u{1F525}"),        // 🔥
            ("grieved", "\u{1F622}"),       // 😢
        ]);

        let no_emoji =
            HashSet::from(["formal", "informative", "expert", "neutral", "blunt"]);

        // Tones whose glyph reads naturally as a lead-in rather than a sign-off.
        let prefix_placement = HashSet::from(["formal", "cautionary", "surprised", "urgent"]);

        let templates = HashMap::from([
            ("formal", tpl("I would like to inform you that ", ".", true)),
            ("friendly", tpl("Hey! Just wanted to say, ", ". Hope that works for you!", true)),
            ("brutal", tpl("Listen up: ", ". Deal with it.", false)),
            ("persuasive", tpl("Consider this: ", ". You will be glad you did.", true)),
            ("confident", tpl("Without a doubt, ", ".", true)),
            ("cautionary", tpl("Please be careful: ", ".", true)),
            ("inspirational", tpl("Remember, ", ". Great things await!", true)),
            ("thoughtful", tpl("I have been reflecting on this: ", ".", true)),
            ("joyful", tpl("Wonderful news! ", "!", false)),
            ("exciting", tpl("This is incredible! ", "!", false)),
            ("grieved", tpl("It is with a heavy heart that I share this: ", ".", true)),
            ("loving", tpl("My dear, ", ". You mean the world to me.", true)),
            ("surprised", tpl("Wow, I did not see this coming: ", "!", true)),
            ("informative", tpl("Please note the following: ", ".", true)),
            ("expert", tpl("Based on my professional assessment, ", ".", true)),
            ("neutral", tpl("", ".", false)),
            ("urgent", tpl("URGENT: ", ". Please attend to this matter immediately.", false)),
            ("humorous", tpl("Funny story: ", ". No, seriously!", true)),
            ("blunt", tpl("", ". That is all.", false)),
            ("supportive", tpl("I am here for you: ", ". We will get through this together.", true)),
        ]);

        let fillers: HashMap<&'static str, &'static [&'static str]> = HashMap::from([
            (
                "formal",
                &[
                    "I trust this message finds you well.",
                    "Please do not hesitate to reach out should you require further clarification.",
                    "Thank you for your attention to this matter.",
                ][..],
            ),
            (
                "friendly",
                &[
                    "Anyway, hope your day is going great!",
                    "We should catch up properly soon.",
                    "Thanks a bunch!",
                ][..],
            ),
            (
                "urgent",
                &[
                    "Time is of the essence here.",
                    "Every minute counts, so please act now.",
                    "This cannot wait until later.",
                ][..],
            ),
            (
                "joyful",
                &[
                    "I could not be happier about this!",
                    "What a fantastic turn of events!",
                    "Days like this are worth celebrating!",
                ][..],
            ),
            (
                "persuasive",
                &[
                    "The benefits really do speak for themselves.",
                    "Few opportunities like this come along.",
                    "All it takes is one small step.",
                ][..],
            ),
            (
                "supportive",
                &[
                    "Whatever you decide, I have your back.",
                    "Take all the time you need.",
                    "You are doing better than you think.",
                ][..],
            ),
        ]);

        Self {
            emoji,
            no_emoji,
            prefix_placement,
            templates,
            fillers,
            medium_multiplier: MEDIUM_FILLER_SENTENCES,
            long_multiplier: LONG_FILLER_SENTENCES,
        }
    }

    /// False iff the tone is in the no-emoji set. Ordinary tones not
    /// covered by any special rule default to true.
    pub fn should_include_emoji(&self, tone: &str) -> bool {
        !self.no_emoji.contains(tone)
    }

    /// The canonical glyph for a tone. Empty for unknown tones, and
    /// short-circuited empty for the auto sentinels regardless of table
    /// contents.
    pub fn emoji_for(&self, tone: &str) -> &'static str {
        if is_auto(tone) {
            return "";
        }
        self.emoji.get(tone).copied().unwrap_or("")
    }

    /// Whether the tone's glyph goes in front of the text instead of after it.
    pub fn prefers_prefix(&self, tone: &str) -> bool {
        self.prefix_placement.contains(tone)
    }

    pub fn template(&self, tone: &str) -> Option<&SentenceTemplate> {
        self.templates.get(tone)
    }

    /// Filler pool for a tone; tones without a dedicated pool share the
    /// generic one.
    pub fn fillers_for(&self, tone: &str) -> &'static [&'static str] {
        self.fillers.get(tone).copied().unwrap_or(GENERIC_FILLERS)
    }
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_emoji_tones_are_excluded() {
        let config = ToneConfig::canonical();
        for tone in ["formal", "informative", "expert", "neutral", "blunt"] {
            assert!(!config.should_include_emoji(tone), "{} should not take emoji", tone);
            assert_eq!(config.emoji_for(tone), "", "{} must map to no glyph", tone);
        }
    }

    #[test]
    fn ordinary_tones_take_emoji() {
        let config = ToneConfig::canonical();
        assert!(config.should_include_emoji("joyful"));
        assert!(config.should_include_emoji("urgent"));
        // Tones with no special rule default to permitted.
        assert!(config.should_include_emoji("sarcastic"));
    }

    #[test]
    fn auto_never_gets_a_glyph() {
        let config = ToneConfig::canonical();
        assert_eq!(config.emoji_for("auto"), "");
        assert_eq!(config.emoji_for("automatic"), "");
    }

    #[test]
    fn unknown_tone_has_no_glyph_or_template() {
        let config = ToneConfig::canonical();
        assert_eq!(config.emoji_for("sarcastic"), "");
        assert!(config.template("sarcastic").is_none());
    }

    #[test]
    fn every_templated_tone_is_covered() {
        let config = ToneConfig::canonical();
        for tone in [
            "formal", "friendly", "brutal", "persuasive", "confident", "cautionary",
            "inspirational", "thoughtful", "joyful", "exciting", "grieved", "loving",
            "surprised", "informative", "expert", "neutral", "urgent", "humorous",
            "blunt", "supportive",
        ] {
            assert!(config.template(tone).is_some(), "missing template for {}", tone);
        }
    }

    #[test]
    fn formal_template_lowercases_and_wraps() {
        let config = ToneConfig::canonical();
        let out = config.template("formal").unwrap().apply("The Meeting Is At 3pm");
        assert_eq!(out, "I would like to inform you that the meeting is at 3pm.");
    }
}
