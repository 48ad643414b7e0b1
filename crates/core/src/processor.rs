//! The extraction-and-normalization pipeline
//!
//! Validation, age extraction, and condition extraction composed into
//! one pure pass over the input text. Either both filters come out or
//! the call fails; partial filters are never returned silently.

use crate::age;
use crate::condition;
use crate::error::QueryError;
use crate::query::QueryResult;
use crate::recognizer::{EntityRecognizer, PlainTextRecognizer};

/// Converts natural-language clinical queries into FHIR Patient
/// searches.
///
/// Stateless apart from the recognizer, which is initialized once and
/// only ever read; a single processor can serve concurrent callers.
pub struct QueryProcessor {
    recognizer: Box<dyn EntityRecognizer>,
}

impl QueryProcessor {
    /// Create a processor with the always-available plain recognizer.
    pub fn new() -> Self {
        Self::with_recognizer(Box::new(PlainTextRecognizer))
    }

    /// Create a processor with a custom entity recognizer.
    pub fn with_recognizer(recognizer: Box<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Convert a query into a structured result.
    ///
    /// Fails with [`QueryError::BlankInput`] for empty/whitespace-only
    /// input, [`QueryError::UnrecognizedInput`] when the input has no
    /// alphanumeric content, and [`QueryError::MissingFilter`] when the
    /// text yields no usable age predicate or condition label.
    pub fn convert(&self, text: &str) -> Result<QueryResult, QueryError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(QueryError::BlankInput);
        }
        if !trimmed.chars().any(|c| c.is_alphanumeric()) {
            return Err(QueryError::UnrecognizedInput);
        }

        // Case normalization happens exactly once; everything after
        // this point matches against lower-cased text.
        let normalized = trimmed.to_lowercase();

        let age = age::extract_age(&normalized);
        let label = self.extract_condition(&normalized);

        tracing::debug!(age = ?age, condition = ?label, "extracted filters");

        match (age, label) {
            (Some(age), Some(label)) => Ok(QueryResult::new(age, label)),
            (None, None) => Err(QueryError::MissingFilter(
                "neither an age nor a condition was recognized".into(),
            )),
            (None, Some(_)) => Err(QueryError::MissingFilter(
                "no age filter recognized".into(),
            )),
            (Some(_), None) => Err(QueryError::MissingFilter(
                "no condition filter recognized".into(),
            )),
        }
    }

    /// Match against recognizer spans and the whole text in one pass;
    /// the table's declaration order decides ties either way.
    fn extract_condition(&self, text: &str) -> Option<&'static str> {
        let spans = self.recognizer.recognize(text);
        condition::extract_with_spans(text, &spans)
    }
}

impl Default for QueryProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a query with a default processor.
///
/// One-shot entry point; callers doing many conversions should hold a
/// [`QueryProcessor`] instead.
pub fn convert(text: &str) -> Result<QueryResult, QueryError> {
    QueryProcessor::new().convert(text)
}
