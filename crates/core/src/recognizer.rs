//! Pluggable entity recognition
//!
//! The pipeline asks a recognizer for candidate entity spans and
//! matches them through the synonym table alongside plain substring
//! search of the full text. The substring search is authoritative: a
//! recognizer that finds nothing never changes the result.

/// Capability interface for extracting candidate entity spans.
///
/// Implementations must be safe for concurrent read-only use; the
/// processor holds one instance for the life of the process.
pub trait EntityRecognizer: Send + Sync {
    /// Return lower-cased candidate spans found in the text.
    fn recognize(&self, text: &str) -> Vec<String>;
}

/// Always-available recognizer using plain token heuristics.
///
/// Splits on whitespace, strips punctuation, and keeps words of three
/// or more characters as candidate spans.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRecognizer;

impl EntityRecognizer for PlainTextRecognizer {
    fn recognize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| word.len() >= 3)
            .map(|word| word.to_lowercase())
            .collect()
    }
}

/// Recognizer backed by a pretrained tokenizer model.
///
/// Loaded once per process and shared read-only afterwards. Callers are
/// expected to fall back to [`PlainTextRecognizer`] when loading fails.
#[cfg(feature = "ner")]
pub struct ModelRecognizer {
    tokenizer: tokenizers::Tokenizer,
}

#[cfg(feature = "ner")]
impl ModelRecognizer {
    /// Load a tokenizer definition (tokenizer.json) from disk.
    pub fn from_file(path: &str) -> Result<Self, String> {
        let tokenizer = tokenizers::Tokenizer::from_file(path)
            .map_err(|e| format!("failed to load tokenizer from {path}: {e}"))?;
        Ok(Self { tokenizer })
    }
}

#[cfg(feature = "ner")]
impl EntityRecognizer for ModelRecognizer {
    fn recognize(&self, text: &str) -> Vec<String> {
        let Ok(encoding) = self.tokenizer.encode(text, false) else {
            tracing::warn!("tokenizer failed to encode query, skipping span pass");
            return Vec::new();
        };

        encoding
            .get_tokens()
            .iter()
            .map(|token| token.trim_start_matches("##").to_lowercase())
            .filter(|token| token.len() >= 3 && token.chars().any(|c| c.is_alphanumeric()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_recognizer_extracts_keywords() {
        let spans = PlainTextRecognizer.recognize("show me all diabetic patients over 50");
        assert!(spans.contains(&"diabetic".to_string()));
        assert!(spans.contains(&"patients".to_string()));
        // "me" is too short
        assert!(!spans.contains(&"me".to_string()));
    }

    #[test]
    fn plain_recognizer_strips_punctuation() {
        let spans = PlainTextRecognizer.recognize("asthma, wheezing?");
        assert_eq!(spans, vec!["asthma".to_string(), "wheezing".to_string()]);
    }

    #[test]
    fn plain_recognizer_empty_input() {
        assert!(PlainTextRecognizer.recognize("").is_empty());
    }
}
