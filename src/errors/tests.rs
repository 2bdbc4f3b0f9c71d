//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ValidationIssue};
use crate::Position;

#[test]
fn test_validation_error_name() {
    let error = Error::new(
        ErrorImpl::ValidationFailed {
            issues: vec![ValidationIssue::UnbalancedParens { open: 2, close: 1 }],
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "ValidationFailed");
    assert!(error.is_validation());
    assert_eq!(error.issues().len(), 1);
}

#[test]
fn test_malformed_construct_error() {
    let error = Error::new(
        ErrorImpl::MalformedConstruct {
            construct: "if".to_string(),
            index: 7,
        },
        Position(5),
    );

    assert_eq!(error.get_error_name(), "MalformedConstruct");
    assert!(!error.is_validation());
    assert!(error.issues().is_empty());
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::MalformedConstruct {
            construct: "int".to_string(),
            index: 1,
        },
        Position(0),
    );

    assert_eq!(
        error.to_string(),
        "malformed \"int\" construct: no token at index 1 at token 0"
    );
}

#[test]
fn test_validation_issue_display() {
    assert_eq!(
        ValidationIssue::WrongLeadingToken {
            found: Some("void".to_string())
        }
        .to_string(),
        "code must start with `int` or `float`, found void"
    );
    assert_eq!(
        ValidationIssue::UnbalancedCurlies { open: 1, close: 0 }.to_string(),
        "unbalanced braces: 1 `{` against 0 `}`"
    );
    assert_eq!(
        ValidationIssue::WrongLeadingToken { found: None }.to_string(),
        "code must start with `int` or `float`, found nothing"
    );
}

#[test]
fn test_validation_error_has_no_tip() {
    let error = Error::new(
        ErrorImpl::ValidationFailed {
            issues: vec![ValidationIssue::WrongLeadingToken { found: None }],
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MalformedConstruct {
            construct: "if".to_string(),
            index: 4,
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
