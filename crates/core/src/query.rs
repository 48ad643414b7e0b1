//! Query result types and the FHIR request line builder

use std::fmt;

use serde::Serialize;

use crate::age::AgePredicate;

/// The normalized filters extracted from a query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryFilters {
    pub age: String,
    pub condition: String,
}

/// A converted query: the structured filters plus the request line.
///
/// Field order matters: both the `Serialize` derive and the `Display`
/// rendering emit `resource`, `filters.age`, `filters.condition`,
/// `fhir_request` in that order, which is the contract callers and
/// tests rely on.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryResult {
    pub resource: &'static str,
    pub filters: QueryFilters,
    pub fhir_request: String,
}

impl QueryResult {
    /// Build a result from both extracted filters.
    ///
    /// The request line keeps a fixed parameter order: age fragment(s)
    /// first, then the condition.
    pub fn new(age: AgePredicate, condition: &str) -> Self {
        let fhir_request = format!("GET /Patient?{}&condition={}", age.fragment(), condition);

        Self {
            resource: "Patient",
            filters: QueryFilters {
                age: age.to_string(),
                condition: condition.to_string(),
            },
            fhir_request,
        }
    }
}

impl fmt::Display for QueryResult {
    /// Stable textual rendering with fixed key order and indentation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "        \"resource\": \"{}\",", self.resource)?;
        writeln!(f, "        \"filters\": {{")?;
        writeln!(f, "            \"age\": \"{}\",", self.filters.age)?;
        writeln!(f, "            \"condition\": \"{}\"", self.filters.condition)?;
        writeln!(f, "        }},")?;
        writeln!(f, "        \"fhir_request\": \"{}\"", self.fhir_request)?;
        write!(f, "        }}")
    }
}
