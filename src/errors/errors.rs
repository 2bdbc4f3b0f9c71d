use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::ValidationFailed { .. })
    }

    /// Validation issues carried by the error, empty for construction failures.
    pub fn issues(&self) -> &[ValidationIssue] {
        match &self.internal_error {
            ErrorImpl::ValidationFailed { issues } => issues,
            ErrorImpl::MalformedConstruct { .. } => &[],
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ValidationFailed { .. } => "ValidationFailed",
            ErrorImpl::MalformedConstruct { .. } => "MalformedConstruct",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            // The issues themselves are listed by the caller.
            ErrorImpl::ValidationFailed { .. } => ErrorTip::None,
            ErrorImpl::MalformedConstruct { construct, .. } => ErrorTip::Suggestion(format!(
                "The `{}` construct ended before all of its tokens were found",
                construct
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at token {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("validation failed with {} issue(s)", .issues.len())]
    ValidationFailed { issues: Vec<ValidationIssue> },
    #[error("malformed {construct:?} construct: no token at index {index}")]
    MalformedConstruct { construct: String, index: usize },
}

/// A structural precondition checked before any tree is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("code must start with `int` or `float`, found {}", .found.as_deref().unwrap_or("nothing"))]
    WrongLeadingToken { found: Option<String> },
    #[error("unbalanced parentheses: {open} `(` against {close} `)`")]
    UnbalancedParens { open: usize, close: usize },
    #[error("unbalanced braces: {open} `{{` against {close} `}}`")]
    UnbalancedCurlies { open: usize, close: usize },
}
