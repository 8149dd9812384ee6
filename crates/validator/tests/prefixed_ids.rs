//! Integration tests for prefixed identifiers and identifier schema sets.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sift_validator::prelude::*;

sift_validator::id_schemas! {
    struct Ids {
        accounts => "acc",
        users => "usr",
    }
}

// ============================================================================
// PREFIXED STRING
// ============================================================================

#[rstest]
#[case("prefix", "1")]
#[case("prefix", "abc_def")]
#[case("usr", "01H8XGJWBWBAQ4Z4")]
#[case("a", "ü")]
fn accepts_prefix_separator_and_body(#[case] prefix: &str, #[case] body: &str) {
    let input = format!("{prefix}_{body}");
    assert_eq!(prefixed_string(prefix).validate(&input).unwrap(), input);
}

#[rstest]
#[case::no_separator("prefix")]
#[case::empty("")]
#[case::other_prefix("other_1")]
#[case::case_sensitive("PREFIX_1")]
#[case::leading_space(" prefix_1")]
fn prefix_mismatch(#[case] input: &str) {
    let error = prefixed_string("prefix").validate(input).unwrap_err();
    assert_eq!(error.code, "starts_with");
    assert_eq!(error.message, r#"String must start with the prefix "prefix_"."#);
}

#[test]
fn empty_body_is_malformed() {
    let error = prefixed_string("prefix").validate("prefix_").unwrap_err();
    assert_eq!(error.code, "min_length");
    assert_eq!(error.message, "Malformed prefixed string");
    assert_eq!(error.param("min"), Some("8"));
}

#[test]
fn custom_label_in_both_messages() {
    let validator = prefixed_string("prefix").with_label("customLabel");

    assert_eq!(
        validator.validate("bad").unwrap_err().message,
        r#"CustomLabel must start with the prefix "prefix_"."#
    );
    assert_eq!(validator.validate("prefix_").unwrap_err().message, "Malformed customLabel");
}

#[rstest]
#[case("ID", "ID")]
#[case("API", "API")]
#[case("users ID", "Users ID")]
#[case("customLabel", "CustomLabel")]
#[case("élan", "Élan")]
#[case("", "")]
fn label_capitalization(#[case] label: &str, #[case] expected: &str) {
    assert_eq!(capitalize_label(label), expected);
}

#[test]
fn prefixed_id_uses_id_label() {
    let validator = prefixed_id("org");
    assert_eq!(
        validator.validate("usr_1").unwrap_err().message,
        r#"ID must start with the prefix "org_"."#
    );
    assert_eq!(validator.validate("org_").unwrap_err().message, "Malformed ID");
}

#[test]
fn prefix_is_checked_before_length() {
    // "pr" is too short and has the wrong prefix; the prefix error wins.
    let error = prefixed_string("prefix").validate("pr").unwrap_err();
    assert_eq!(error.code, "starts_with");
}

// ============================================================================
// SCHEMA SETS
// ============================================================================

#[test]
fn schema_set_from_mapping() {
    let mapping: PrefixMapping = [("accounts", "acc"), ("users", "usr")].into_iter().collect();
    let ids = IdSchemaSet::new(mapping);

    assert!(ids["accounts"].validate("acc_123").is_ok());
    assert!(ids["users"].validate("acc_123").is_err());
    assert!(ids["users"].validate("usr_123").is_ok());

    assert_eq!(ids.tables().collect::<Vec<_>>(), ["accounts", "users"]);
}

#[test]
fn schema_set_messages_use_table_label() {
    let ids = IdSchemaSet::new([("users", "usr")].into_iter().collect());

    let error = ids.validate("users", "acc_1").unwrap_err();
    assert_eq!(error.message, r#"Users ID must start with the prefix "usr_"."#);

    let error = ids.validate("users", "usr_").unwrap_err();
    assert_eq!(error.message, "Malformed users ID");
}

#[test]
fn schema_set_unknown_table() {
    let ids = IdSchemaSet::new([("users", "usr")].into_iter().collect());

    let error = ids.validate("teams", "tm_1").unwrap_err();
    assert_eq!(error.code, "unknown_table");
    assert_eq!(error.param("table"), Some("teams"));
    assert!(ids.get("teams").is_none());
}

#[test]
fn schema_set_from_json_config() {
    let mapping = PrefixMapping::from_json_str(r#"{ "orders": "ord", "invoices": "inv" }"#).unwrap();
    let ids = IdSchemaSet::try_new(mapping).unwrap();

    assert_eq!(ids.len(), 2);
    assert!(ids.validate("invoices", "inv_2024_0001").is_ok());
}

#[rstest]
#[case::empty(r#"{ "users": "" }"#)]
#[case::separator(r#"{ "users": "us_r" }"#)]
fn schema_set_rejects_bad_prefixes(#[case] json: &str) {
    assert!(PrefixMapping::from_json_str(json).is_err());

    let unchecked: PrefixMapping = serde_json::from_str(json).unwrap();
    assert!(IdSchemaSet::try_new(unchecked.clone()).is_err());
    assert_eq!(IdSchemaSet::new(unchecked).len(), 1);
}

#[test]
fn typed_schema_set() {
    let ids = Ids::new();

    assert!(ids.accounts.validate("acc_123").is_ok());
    assert!(ids.users.validate("usr_123").is_ok());
    assert_eq!(
        ids.users.validate("acc_123").unwrap_err().message,
        r#"Users ID must start with the prefix "usr_"."#
    );
    assert_eq!(Ids::mapping().get("accounts"), Some("acc"));
}

#[test]
fn schema_set_is_shareable_across_threads() {
    let ids = std::sync::Arc::new(IdSchemaSet::new(Ids::mapping()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ids = std::sync::Arc::clone(&ids);
            std::thread::spawn(move || ids.validate("users", &format!("usr_{i}")).is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn ids_in_json_bodies() {
    let body = serde_json::json!({ "owner": "usr_7", "account": 7 });
    let user_id = sift_validator::json::string(prefixed_id("usr"));

    assert_eq!(user_id.validate(&body["owner"]).unwrap(), "usr_7");
    assert_eq!(
        user_id.validate(&body["account"]).unwrap_err().message,
        "Expected string, received number"
    );
}
