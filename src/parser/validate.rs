use crate::errors::errors::ValidationIssue;

/// Literals a program is allowed to start with.
pub const LEADING_TOKENS: [&str; 2] = ["int", "float"];

fn count(tokens: &[&str], literal: &str) -> usize {
    tokens.iter().filter(|token| **token == literal).count()
}

/// Runs every structural check and returns all violations found.
///
/// The checks never short-circuit; an empty result means the sequence may be
/// handed to construction.
pub fn check(tokens: &[&str]) -> Vec<ValidationIssue> {
    let mut issues = vec![];

    let first = tokens.first().copied();
    if !first.is_some_and(|token| LEADING_TOKENS.contains(&token)) {
        issues.push(ValidationIssue::WrongLeadingToken {
            found: first.map(String::from),
        });
    }

    let (open, close) = (count(tokens, "("), count(tokens, ")"));
    if open != close {
        issues.push(ValidationIssue::UnbalancedParens { open, close });
    }

    let (open, close) = (count(tokens, "{"), count(tokens, "}"));
    if open != close {
        issues.push(ValidationIssue::UnbalancedCurlies { open, close });
    }

    issues
}
