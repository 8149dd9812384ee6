use pretty_assertions::assert_eq;
use sift_validator::prelude::*;

#[test]
fn test_pipe_stops_at_first_error() {
    let validator = non_empty_string().pipe(prefixed_id("usr"));

    let error = validator.validate("   ").unwrap_err();
    assert_eq!(error.message, "Required");

    let error = validator.validate(" org_1 ").unwrap_err();
    assert_eq!(error.code, "starts_with");
}

#[test]
fn test_pipe_feeds_trimmed_value() {
    let validator = non_empty_string().pipe(prefixed_id("usr"));
    assert_eq!(validator.validate("  usr_1  ").unwrap(), "usr_1");
}

#[test]
fn test_or_nests_both_errors() {
    let validator = prefixed_id("usr").or(prefixed_id("org"));
    let error = validator.validate("team_1").unwrap_err();

    assert_eq!(error.code, "or_failed");
    assert_eq!(error.nested[0].param("prefix"), Some("usr_"));
    assert_eq!(error.nested[1].param("prefix"), Some("org_"));
}

#[test]
fn test_or_any_nests_every_error() {
    let validator = or_any(vec![prefixed_id("usr"), prefixed_id("org"), prefixed_id("team")]);

    assert!(validator.validate("team_1").is_ok());

    let error = validator.validate("acc_1").unwrap_err();
    assert_eq!(error.code, "or_any_failed");
    assert_eq!(error.nested.len(), 3);
}

#[test]
fn test_with_message_keeps_code_and_nests_original() {
    let validator = email().with_message("Enter a valid email address");
    let error = validator.validate("nope").unwrap_err();

    assert_eq!(error.message, "Enter a valid email address");
    assert_eq!(error.code, "invalid_format");
    assert_eq!(error.nested.len(), 1);
}

#[test]
fn test_with_code_overrides_code() {
    let validator = with_code(min_length(3), "too_short");
    assert_eq!(validator.validate("ab").unwrap_err().code, "too_short");
}

#[test]
fn test_refine_message() {
    let validator = coerce_number().refine(|n| n.is_some(), "Invalid number");
    assert_eq!(validator.validate("abc").unwrap_err().message, "Invalid number");
    assert_eq!(validator.validate("1,000").unwrap(), Some("1000".to_owned()));
}

#[test]
fn test_each_collects_all_failures() {
    let validator = coerce_bigint().each();
    let input = [
        serde_json::json!("1"),
        serde_json::json!("x"),
        serde_json::json!(2),
        serde_json::json!(null),
    ];

    let error = validator.validate(&input).unwrap_err();
    assert_eq!(error.code, "each_failed");
    assert_eq!(error.param("failed_indices"), Some("1,3"));
    assert_eq!(error.nested.len(), 2);
}

#[test]
fn test_each_fail_fast_reports_index() {
    let validator = each_fail_fast(coerce_bigint());
    let input = [serde_json::json!("x"), serde_json::json!("y")];

    let error = validator.validate(&input).unwrap_err();
    assert_eq!(error.param("index"), Some("0"));
}

#[test]
fn test_parse_array_error_display() {
    let error = parse_array(&coerce_bigint(), [serde_json::json!(1), serde_json::json!(1.5)])
        .unwrap_err();

    assert_eq!(error.index, 1);
    assert_eq!(error.to_string(), "Error parsing element 1: Expected bigint, received number");
}

#[test]
fn test_validation_errors_into_single_error() {
    let errors: ValidationErrors = [
        ValidationError::required("name"),
        ValidationError::invalid_format("email"),
    ]
    .into_iter()
    .collect();

    let error = errors.into_single_error("Form is invalid");
    assert_eq!(error.total_error_count(), 3);
}
