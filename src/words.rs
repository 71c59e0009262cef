use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of ASCII letters bounded by word boundaries.
const WORD_PATTERN: &str = r"\b[A-Za-z]+\b";

static DEFAULT_EXTRACTOR: LazyLock<WordExtractor> = LazyLock::new(WordExtractor::default);

/// Splits recognized text into alphabetic tokens
#[derive(Debug, Clone)]
pub struct WordExtractor {
    pattern: Regex,
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self {
            pattern: Regex::new(WORD_PATTERN).expect("valid word pattern"),
        }
    }
}

impl WordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every token in `text`, left to right, case preserved.
    ///
    /// Repeated words are kept. Letters glued to digits or to non-ASCII
    /// letters (`abc123`, `café`) do not form a token.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let words: Vec<String> = self
            .pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        debug!("Extracted {} words from {} characters", words.len(), text.len());
        words
    }
}

/// Extracts alphabetic words from `text` using the shared extractor
pub fn extract_words(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(text)
}
