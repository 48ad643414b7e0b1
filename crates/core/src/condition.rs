//! Condition filter extraction
//!
//! Maps the many surface forms a condition shows up as ("diabetic",
//! "type 2 diabetes", "high blood pressure") onto one canonical label
//! via an ordered synonym table.

/// Canonical condition labels with their surface-form synonyms.
///
/// Declaration order is the tie-break: when text contains synonyms of
/// two different labels, the label declared first wins. Matching is
/// plain substring containment against the normalized text.
pub const CONDITION_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "diabetes",
        &[
            "diabetes",
            "diabetic",
            "diabetics",
            "type 1 diabetes",
            "type 2 diabetes",
            "dm",
            "t1dm",
            "t2dm",
        ],
    ),
    (
        "cancer",
        &[
            "cancer",
            "cancerous",
            "tumor",
            "tumour",
            "malignancy",
            "oncology",
            "carcinoma",
            "lymphoma",
            "leukemia",
        ],
    ),
    (
        "asthma",
        &[
            "asthma",
            "asthmatic",
            "respiratory",
            "breathing problems",
            "wheeze",
            "wheezing",
        ],
    ),
    (
        "heart disease",
        &[
            "heart disease",
            "cardiac",
            "cardiovascular",
            "heart condition",
            "coronary",
            "myocardial",
            "cardiology",
            "heart attack",
            "stroke",
        ],
    ),
    (
        "hypertension",
        &["hypertension", "high blood pressure", "elevated bp", "hbp"],
    ),
    (
        "depression",
        &[
            "depression",
            "depressed",
            "mental health",
            "psychiatric",
            "mood disorder",
        ],
    ),
    (
        "covid",
        &["covid", "coronavirus", "covid-19", "sars-cov-2", "pandemic"],
    ),
];

/// Extract a canonical condition label from normalized text.
///
/// Returns the first label (in table order) with any synonym contained
/// in the text, or `None`.
pub fn extract_condition(text: &str) -> Option<&'static str> {
    CONDITION_SYNONYMS
        .iter()
        .find(|(_, synonyms)| synonyms.iter().any(|s| text.contains(s)))
        .map(|(label, _)| *label)
}

/// Extract a condition label considering recognized entity spans as
/// well as the full text.
///
/// Labels are iterated in table order regardless of span order, and a
/// label matches if any of its synonyms is contained in a span or in
/// the text itself. Spans can therefore never change which label wins a
/// tie; the substring contract of [`extract_condition`] stays
/// authoritative.
pub fn extract_with_spans(text: &str, spans: &[String]) -> Option<&'static str> {
    CONDITION_SYNONYMS
        .iter()
        .find(|(_, synonyms)| {
            synonyms
                .iter()
                .any(|s| text.contains(s) || spans.iter().any(|span| span.contains(s)))
        })
        .map(|(label, _)| *label)
}
