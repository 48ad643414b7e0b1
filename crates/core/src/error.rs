use thiserror::Error;

/// Query conversion error types.
///
/// Every failure is a property of the input text, never a transient
/// condition, so none of these are worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("input is empty or whitespace-only")]
    BlankInput,

    #[error("input contains no recognizable content")]
    UnrecognizedInput,

    #[error("missing filter: {0}")]
    MissingFilter(String),
}
