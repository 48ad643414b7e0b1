//! Age filter extraction
//!
//! Scans normalized query text for age phrases (explicit comparisons
//! like "over 50", ranges like "between 40 and 60", the "N+" shorthand,
//! and named age bands like "elderly") and normalizes them into a
//! single [`AgePredicate`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A normalized age constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgePredicate {
    GreaterThan(u32),
    LessThan(u32),
    /// Inclusive range, kept in the order the query authored it.
    Range(u32, u32),
}

impl AgePredicate {
    /// Render the FHIR query-string fragment for this predicate.
    ///
    /// One renderer covers both explicit and named-band predicates:
    /// `>50` becomes `age=gt50`, `<18` becomes `age=lt18`, and `16-35`
    /// becomes `age=ge16&age=le35`.
    pub fn fragment(&self) -> String {
        match self {
            AgePredicate::GreaterThan(n) => format!("age=gt{n}"),
            AgePredicate::LessThan(n) => format!("age=lt{n}"),
            AgePredicate::Range(lo, hi) => format!("age=ge{lo}&age=le{hi}"),
        }
    }
}

impl fmt::Display for AgePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgePredicate::GreaterThan(n) => write!(f, ">{n}"),
            AgePredicate::LessThan(n) => write!(f, "<{n}"),
            AgePredicate::Range(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

/// How a matched pattern maps onto a predicate.
enum AgeRule {
    /// Take the first captured number as a greater-than bound.
    GreaterThan,
    /// Take the first captured number as a less-than bound.
    LessThan,
    /// Take the first two captured numbers as an inclusive range.
    Range,
    /// Named age band with a fixed predicate, no captures.
    Band(AgePredicate),
}

struct AgePattern {
    regex: Regex,
    rule: AgeRule,
}

fn pattern(re: &str, rule: AgeRule) -> AgePattern {
    AgePattern {
        regex: Regex::new(re).expect("invalid age pattern"),
        rule,
    }
}

/// Ordered age patterns. The first match wins, so declaration order is
/// the priority order: explicit comparisons, then ranges, then the "N+"
/// shorthand, then named bands.
static AGE_PATTERNS: LazyLock<Vec<AgePattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"over (\d+)|older than (\d+)|above (\d+)",
            AgeRule::GreaterThan,
        ),
        pattern(
            r"under (\d+)|younger than (\d+)|below (\d+)",
            AgeRule::LessThan,
        ),
        pattern(r"between (\d+) and (\d+)", AgeRule::Range),
        pattern(r"(\d+) to (\d+) years?", AgeRule::Range),
        pattern(r"(\d+)\+", AgeRule::GreaterThan),
        pattern(
            r"\b(?:elderly|seniors?)\b",
            AgeRule::Band(AgePredicate::GreaterThan(65)),
        ),
        pattern(
            r"\b(?:children|child|kids?|pediatric)\b",
            AgeRule::Band(AgePredicate::LessThan(18)),
        ),
        pattern(
            r"\b(?:youth|young adults?|adolescents?)\b",
            AgeRule::Band(AgePredicate::Range(16, 35)),
        ),
        pattern(
            r"\b(?:adults?|middle.?aged?)\b",
            AgeRule::Band(AgePredicate::Range(18, 65)),
        ),
        pattern(
            r"\b(?:infants?|babies|newborns?)\b",
            AgeRule::Band(AgePredicate::LessThan(2)),
        ),
    ]
});

/// Extract an age predicate from normalized (lower-cased) text.
///
/// Returns `None` when no pattern matches.
pub fn extract_age(text: &str) -> Option<AgePredicate> {
    for p in AGE_PATTERNS.iter() {
        let Some(caps) = p.regex.captures(text) else {
            continue;
        };

        // Alternations leave unmatched groups empty; keep whichever
        // captured digits actually parsed.
        let nums: Vec<u32> = caps
            .iter()
            .skip(1)
            .flatten()
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        let predicate = match p.rule {
            AgeRule::GreaterThan => nums.first().map(|&n| AgePredicate::GreaterThan(n)),
            AgeRule::LessThan => nums.first().map(|&n| AgePredicate::LessThan(n)),
            AgeRule::Range => match nums[..] {
                [lo, hi, ..] => Some(AgePredicate::Range(lo, hi)),
                _ => None,
            },
            AgeRule::Band(band) => Some(band),
        };

        if predicate.is_some() {
            return predicate;
        }
    }

    None
}
