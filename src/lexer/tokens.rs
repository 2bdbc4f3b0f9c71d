use std::fmt::Display;

use crate::Span;

/// Reserved words, in the order they are tried by the keyword rule.
pub const KEYWORDS: [&str; 10] = [
    "if", "else", "while", "for", "return", "int", "float", "char", "void", "print",
];

/// Printed by the caller once a scan reports unknown characters.
pub const UNKNOWN_CHARACTERS_WARNING: &str = "Error: unknown characters were found in the source!";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Number,
    Operator,
    Delimiter,
    Whitespace,
    Unknown,
}

impl TokenCategory {
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Number => "NUMBER",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Delimiter => "DELIMITER",
            TokenCategory::Whitespace => "WHITESPACE",
            TokenCategory::Unknown => "UNKNOWN",
        }
    }

    /// Whether matches of this category end up in the bucket map.
    pub fn is_recorded(&self) -> bool {
        *self != TokenCategory::Whitespace
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub category: TokenCategory,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.category, self.value)
    }
}

/// Literals grouped by category.
///
/// Categories keep the order in which they were first seen and literals keep
/// the order in which they were appended, so iterating the map (or calling
/// [`TokenBuckets::flatten`]) yields category-grouped order rather than
/// source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuckets {
    buckets: Vec<(TokenCategory, Vec<String>)>,
}

impl TokenBuckets {
    pub fn new() -> Self {
        TokenBuckets { buckets: vec![] }
    }

    pub fn append(&mut self, category: TokenCategory, literal: String) {
        match self.buckets.iter_mut().find(|(kind, _)| *kind == category) {
            Some((_, literals)) => literals.push(literal),
            None => self.buckets.push((category, vec![literal])),
        }
    }

    pub fn get(&self, category: TokenCategory) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|(kind, _)| *kind == category)
            .map(|(_, literals)| literals.as_slice())
    }

    pub fn categories(&self) -> Vec<TokenCategory> {
        self.buckets.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, &[String])> {
        self.buckets
            .iter()
            .map(|(kind, literals)| (*kind, literals.as_slice()))
    }

    /// Number of categories present.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// All literals, category by category.
    pub fn flatten(&self) -> Vec<String> {
        self.buckets
            .iter()
            .flat_map(|(_, literals)| literals.iter().cloned())
            .collect()
    }
}

impl Display for TokenBuckets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (category, literals) in self.iter() {
            writeln!(f, "=== {} ===\n{}\n", category, literals.join(", "))?;
        }

        Ok(())
    }
}
