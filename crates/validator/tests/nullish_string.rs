//! Integration tests for nullish string normalization inside larger schemas.

use insta::{assert_debug_snapshot, assert_json_snapshot};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use sift_validator::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// NO-VALUE INPUTS
// ============================================================================

#[rstest]
#[case::empty(Nullish::from(""))]
#[case::spaces(Nullish::from("   "))]
#[case::tab_newline(Nullish::from("\t\n"))]
#[case::carriage_return(Nullish::from("\r\n "))]
#[case::bom(Nullish::from("\u{FEFF} "))]
#[case::line_separator(Nullish::from("\u{2028}"))]
#[case::null(Nullish::Null)]
#[case::undefined(Nullish::Undefined)]
fn no_value_whatever_the_inner(#[case] input: Nullish<String>) {
    init_tracing();

    assert_eq!(nullish_string(non_empty_string()).validate(&input).unwrap(), None);
    assert_eq!(nullish_string(email()).validate(&input).unwrap(), None);
    assert_eq!(nullish_string(prefixed_id("usr")).validate(&input).unwrap(), None);
    assert_eq!(nullish_string(min_length(100)).validate(&input).unwrap(), None);
}

#[test]
fn zero_width_space_is_not_whitespace() {
    let error = nullish_string(prefixed_id("usr")).validate_str("\u{200B}").unwrap_err();
    assert_eq!(error.code, "starts_with");
}

#[test]
fn next_line_is_not_trimmed() {
    // U+0085 is Unicode whitespace but not trimmed by form handling.
    let output = nullish_string(non_empty_string()).validate_str("\u{0085}").unwrap();
    assert_eq!(output, Some("\u{0085}".to_owned()));
}

// ============================================================================
// PASS-THROUGH AND REJECTION
// ============================================================================

#[test]
fn inner_transform_is_applied() {
    let validator = nullish_string(non_empty_string().transform(|s| s.to_uppercase()));
    assert_eq!(validator.validate_str("  abc ").unwrap(), Some("ABC".to_owned()));
}

#[test]
fn inner_rejection_is_unchanged() {
    let inner = non_empty_string().pipe(email()).with_message("Enter a valid email address");
    let direct = inner.validate("not-an-email").unwrap_err();

    let wrapped = nullish_string(inner).validate_str("not-an-email").unwrap_err();
    assert_eq!(wrapped, direct);
    assert_eq!(wrapped.message, "Enter a valid email address");
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[derive(Debug, Deserialize)]
struct ProfileForm {
    #[serde(default)]
    display_name: Nullish<String>,
    #[serde(default)]
    website: Nullish<String>,
    #[serde(default)]
    team_id: Nullish<String>,
}

#[derive(Debug)]
#[allow(dead_code)]
struct Profile {
    display_name: Option<String>,
    website: Option<String>,
    team_id: Option<String>,
}

fn parse_profile(json: &str) -> Result<Profile, ValidationErrors> {
    let form: ProfileForm = serde_json::from_str(json)
        .map_err(|e| ValidationErrors::from_iter([ValidationError::custom(e.to_string())]))?;

    let mut errors = ValidationErrors::new();
    let display_name = errors.field(
        "display_name",
        nullish_string(non_empty_string()).validate(&form.display_name),
    );
    let website = errors.field("website", nullish_string(url()).validate(&form.website));
    let team_id = errors.field(
        "team_id",
        nullish_string(prefixed_id("team")).validate(&form.team_id),
    );

    errors.into_result(Profile {
        display_name: display_name.flatten(),
        website: website.flatten(),
        team_id: team_id.flatten(),
    })
}

fn errors_for<'a>(errors: &'a ValidationErrors, field: &str) -> Vec<&'a ValidationError> {
    errors
        .errors()
        .iter()
        .filter(|e| e.field.as_deref() == Some(field))
        .collect()
}

#[test]
fn object_fields_normalize_independently() {
    let profile = parse_profile(
        r#"{ "display_name": "  Ada  ", "website": "", "team_id": null }"#,
    )
    .unwrap();

    assert_debug_snapshot!(profile, @r#"
    Profile {
        display_name: Some(
            "Ada",
        ),
        website: None,
        team_id: None,
    }
    "#);
}

#[test]
fn object_errors_are_collected_per_field() {
    let errors = parse_profile(r#"{ "website": "nope", "team_id": "usr_1" }"#).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors_for(&errors, "website").len(), 1);
    assert_eq!(
        errors_for(&errors, "team_id")[0].message,
        r#"ID must start with the prefix "team_"."#
    );
}

#[test]
fn array_elements_normalize_independently() {
    let tags = nullish_string(non_empty_string()).each();
    let input = [
        Nullish::from("rust"),
        Nullish::from(""),
        Nullish::from("  \t"),
        Nullish::Undefined,
        Nullish::from(" web "),
        Nullish::Null,
    ];

    assert_eq!(
        tags.validate(&input).unwrap(),
        [Some("rust".to_owned()), None, None, None, Some("web".to_owned()), None]
    );
}

#[test]
fn array_element_failure_does_not_affect_siblings() {
    let ids = nullish_string(prefixed_id("usr")).each();
    let input = [Nullish::from("usr_1"), Nullish::from("org_2"), Nullish::from(" ")];

    let error = ids.validate(&input).unwrap_err();
    assert_eq!(error.param("failed_indices"), Some("1"));
    assert_eq!(error.nested.len(), 1);
}

#[test]
fn union_of_prefixes() {
    let owner = nullish_string(prefixed_id("usr").or(prefixed_id("org")));

    assert_eq!(owner.validate_str("org_5").unwrap(), Some("org_5".to_owned()));
    assert_eq!(owner.validate_str("").unwrap(), None);
    assert!(owner.validate_str("team_5").is_err());
}

#[test]
fn non_empty_array_of_optional_strings() {
    let emails = nullish_non_empty_array(nullish_string(email()));
    let body: Option<Vec<Nullish<String>>> =
        serde_json::from_str(r#"["a@example.com", null, ""]"#).unwrap();

    let output = emails.validate(&body).unwrap().unwrap();
    assert_eq!(output.first().as_deref(), Some("a@example.com"));
    assert_eq!(output.len(), 3);
}

#[test]
fn catch_with_default() {
    let name = nullish_string(non_empty_string().pipe(max_length(5)))
        .catch_with(Some("anonymous".to_owned()));

    assert_eq!(name.validate(&"far too long".into()).unwrap(), Some("anonymous".to_owned()));
    assert_eq!(name.validate(&Nullish::Null).unwrap(), None);
}

#[test]
fn safe_parse_shape() {
    let validator = nullish_string(prefixed_id("usr"));

    assert_json_snapshot!(safe_parse_input(&validator, &"usr_1".into()), @r#"
    {
      "success": true,
      "data": "usr_1"
    }
    "#);
    assert_json_snapshot!(safe_parse_input(&validator, &"".into()), @r#"
    {
      "success": true,
      "data": null
    }
    "#);
}
