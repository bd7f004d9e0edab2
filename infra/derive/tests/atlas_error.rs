use atlas_derive::atlas_error;
use std::borrow::Cow;

#[atlas_error]
pub enum SegmentError {
    #[error("Invalid segment index{}: {source}", format_context(.context))]
    Index { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Unknown segment{}: {message}", format_context(.context))]
    Unknown { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_index(raw: &str) -> Result<u16, SegmentError> {
    Ok(raw.parse::<u16>()?)
}

#[test]
fn atlas_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/atlas_error_pass.rs");
}

#[test]
fn source_converts_through_question_mark() {
    let err = parse_index("four").unwrap_err();
    assert!(matches!(err, SegmentError::Index { context: None, .. }));
    assert!(err.to_string().starts_with("Invalid segment index: "));
}

#[test]
fn context_attaches_to_source_results() {
    let err = "x".parse::<u16>().context("Reading page index").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid segment index (Reading page index): invalid digit found in string"
    );
}

#[test]
fn context_attaches_to_own_results() {
    let failed: Result<(), SegmentError> =
        Err(SegmentError::Unknown { message: "photos".into(), context: None });
    let err = failed.context("Resolving deep link").unwrap_err();
    assert_eq!(err.to_string(), "Unknown segment (Resolving deep link): photos");
}

#[test]
fn internal_accepts_plain_strings() {
    let from_str: SegmentError = "static failure".into();
    let from_string: SegmentError = String::from("owned failure").into();

    assert_eq!(from_str.to_string(), "Internal error: static failure");
    assert_eq!(from_string.to_string(), "Internal error: owned failure");
}
