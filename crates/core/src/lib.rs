//! nlq-core: Natural language to FHIR Patient query conversion
//!
//! This crate turns a free-text clinical query ("Show me all diabetic
//! patients over 50") into a structured filter description and the
//! corresponding FHIR-style request line. The pipeline is stateless and
//! synchronous; every value is derived fresh per call.

pub mod age;
pub mod condition;
pub mod error;
pub mod intent;
pub mod processor;
pub mod query;
pub mod recognizer;

// Re-export our types
pub use age::AgePredicate;
pub use error::QueryError;
pub use intent::{Intent, classify_intent};
pub use processor::{QueryProcessor, convert};
pub use query::{QueryFilters, QueryResult};
#[cfg(feature = "ner")]
pub use recognizer::ModelRecognizer;
pub use recognizer::{EntityRecognizer, PlainTextRecognizer};
