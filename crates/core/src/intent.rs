//! Query intent classification using keyword heuristics.
//!
//! Intent does not influence the request line; it is exposed for
//! callers that want to route count/update queries differently.

/// What the user wants done with the matching patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Search,
    Count,
    Update,
}

const SEARCH_WORDS: &[&str] = &["show", "list", "find", "get", "retrieve", "display"];
const COUNT_WORDS: &[&str] = &["count", "how many", "number of"];
const UPDATE_WORDS: &[&str] = &["update", "modify", "change"];

/// Classify the intent of a query, defaulting to [`Intent::Search`].
pub fn classify_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();

    if SEARCH_WORDS.iter().any(|w| lower.contains(w)) {
        Intent::Search
    } else if COUNT_WORDS.iter().any(|w| lower.contains(w)) {
        Intent::Count
    } else if UPDATE_WORDS.iter().any(|w| lower.contains(w)) {
        Intent::Update
    } else {
        Intent::Search
    }
}
