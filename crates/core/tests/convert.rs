//! End-to-end tests for the conversion pipeline.
//!
//! These exercise the public `convert` entry point against the
//! canonical query set and pin the byte-exact output contract.

use nlq_core::{QueryError, convert};

#[test]
fn diabetic_patients_over_50() {
    let result = convert("Show me all diabetic patients over 50").unwrap();
    assert_eq!(
        result.to_string(),
        r#"{
        "resource": "Patient",
        "filters": {
            "age": ">50",
            "condition": "diabetes"
        },
        "fhir_request": "GET /Patient?age=gt50&condition=diabetes"
        }"#
    );
}

#[test]
fn youth_patients_with_cancer() {
    let result = convert("please give me information on youth patients who have cancer").unwrap();
    assert_eq!(
        result.to_string(),
        r#"{
        "resource": "Patient",
        "filters": {
            "age": "16-35",
            "condition": "cancer"
        },
        "fhir_request": "GET /Patient?age=ge16&age=le35&condition=cancer"
        }"#
    );
}

#[test]
fn children_with_asthma() {
    let result = convert("List all children with asthma").unwrap();
    assert_eq!(
        result.to_string(),
        r#"{
        "resource": "Patient",
        "filters": {
            "age": "<18",
            "condition": "asthma"
        },
        "fhir_request": "GET /Patient?age=lt18&condition=asthma"
        }"#
    );
}

#[test]
fn elderly_with_heart_disease() {
    let result = convert("Find elderly patients with heart disease").unwrap();
    assert_eq!(
        result.to_string(),
        r#"{
        "resource": "Patient",
        "filters": {
            "age": ">65",
            "condition": "heart disease"
        },
        "fhir_request": "GET /Patient?age=gt65&condition=heart disease"
        }"#
    );
}

#[test]
fn under_30_with_depression() {
    let result = convert("Get patients under 30 with depression").unwrap();
    assert_eq!(result.filters.age, "<30");
    assert_eq!(result.filters.condition, "depression");
    assert_eq!(
        result.fhir_request,
        "GET /Patient?age=lt30&condition=depression"
    );
}

#[test]
fn cancer_patients_in_explicit_range() {
    let result = convert("Show me cancer patients between 40 and 60 years old").unwrap();
    assert_eq!(result.filters.age, "40-60");
    assert_eq!(
        result.fhir_request,
        "GET /Patient?age=ge40&age=le60&condition=cancer"
    );
}

#[test]
fn adults_with_high_blood_pressure() {
    let result = convert("Find adults with high blood pressure").unwrap();
    assert_eq!(result.filters.age, "18-65");
    assert_eq!(result.filters.condition, "hypertension");
}

#[test]
fn case_insensitive() {
    let upper = convert("SHOW ME ALL DIABETIC PATIENTS OVER 50").unwrap();
    let lower = convert("show me all diabetic patients over 50").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn synonyms_of_one_condition_agree() {
    let synonyms = [
        "Find patients over 40 with diabetes",
        "Find patients over 40 with type 2 diabetes",
        "Find diabetic patients over 40",
    ];
    for query in synonyms {
        let result = convert(query).unwrap();
        assert_eq!(result.filters.condition, "diabetes", "query: {query}");
        assert_eq!(result.filters.age, ">40", "query: {query}");
    }
}

#[test]
fn idempotent() {
    let first = convert("List all children with asthma").unwrap();
    let second = convert("List all children with asthma").unwrap();
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn blank_and_symbol_inputs() {
    assert_eq!(convert(""), Err(QueryError::BlankInput));
    assert_eq!(convert("   \t "), Err(QueryError::BlankInput));
    assert_eq!(convert("!@#$%#"), Err(QueryError::UnrecognizedInput));
}

#[test]
fn one_sided_queries_fail() {
    assert!(matches!(
        convert("Show me all elderly patients"),
        Err(QueryError::MissingFilter(_))
    ));
    assert!(matches!(
        convert("Find patients with diabetes"),
        Err(QueryError::MissingFilter(_))
    ));
}

#[test]
fn infants_with_respiratory_issues() {
    let result = convert("Show me infants with respiratory issues").unwrap();
    assert_eq!(result.filters.age, "<2");
    assert_eq!(result.filters.condition, "asthma");
}
