use std::collections::HashSet;

use regex::Regex;

/// Articles dropped before any comparison.
pub const DEFAULT_STOP_WORDS: [&str; 3] = ["a", "an", "the"];

/// Lower-cases, strips everything outside `[a-z0-9 ]`, tokenizes on
/// whitespace, and removes stop-words. Shared by both scorers so EM
/// and F1 always see the same token stream.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    pattern: Regex,
    stop_words: HashSet<String>,
}

impl TextNormalizer {
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: Regex::new(r"[^a-z0-9 ]").expect("valid literal pattern"),
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Ordered normalized tokens. Empty input yields an empty vec.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = self.pattern.replace_all(&lowered, " ");
        cleaned
            .split_whitespace()
            .filter(|t| !self.stop_words.contains(*t))
            .map(str::to_string)
            .collect()
    }

    /// Space-joined normalized tokens: the exact-match key.
    pub fn joined(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let n = TextNormalizer::default();
        assert_eq!(n.tokens("What's the Capital, of France?"), ["what", "s", "capital", "of", "france"]);
    }

    #[test]
    fn keeps_digits() {
        let n = TextNormalizer::default();
        assert_eq!(n.tokens("REM stage 3-4"), ["rem", "stage", "3", "4"]);
    }

    #[test]
    fn drops_stop_words_only() {
        let n = TextNormalizer::default();
        assert_eq!(n.tokens("the a an theory"), ["theory"]);
        assert!(n.tokens("the a an").is_empty());
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        let n = TextNormalizer::default();
        assert!(n.tokens("").is_empty());
        assert!(n.tokens("   ").is_empty());
        assert_eq!(n.joined(""), "");
    }

    #[test]
    fn idempotent_over_its_own_output() {
        let n = TextNormalizer::default();
        for text in ["The Capital is Paris!", "a 24-hour cycle", "  REM  sleep  "] {
            let once = n.tokens(text);
            let again = n.tokens(&n.joined(text));
            assert_eq!(once, again);
        }
    }

    #[test]
    fn custom_stop_words() {
        let n = TextNormalizer::new(["of"]);
        assert_eq!(n.tokens("the stages of sleep"), ["the", "stages", "sleep"]);
    }
}
