use lazy_static::lazy_static;
use regex_automata::{meta::Regex, Anchored, Input};
use tracing::{debug, trace, warn};

use crate::{Position, Span, MK_RECORD_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenBuckets, TokenCategory, KEYWORDS, UNKNOWN_CHARACTERS_WARNING};

pub type RuleHandler = fn(&mut Lexer<'_>, &str);

pub struct ScanRule {
    pub category: TokenCategory,
    regex: Regex,
    handler: RuleHandler,
}

lazy_static! {
    /// Rules in priority order; the first one matching at the cursor wins.
    pub static ref SCAN_RULES: Vec<ScanRule> = vec![
        ScanRule {
            category: TokenCategory::Keyword,
            regex: Regex::new(&format!(r"\b(?:{})\b", KEYWORDS.join("|"))).unwrap(),
            handler: MK_RECORD_HANDLER!(TokenCategory::Keyword),
        },
        ScanRule {
            category: TokenCategory::Identifier,
            regex: Regex::new(r"\b[a-zA-Z_][a-zA-Z_0-9]*\b").unwrap(),
            handler: MK_RECORD_HANDLER!(TokenCategory::Identifier),
        },
        ScanRule {
            category: TokenCategory::Number,
            regex: Regex::new(r"\b\d+(\.\d+)?\b").unwrap(),
            handler: MK_RECORD_HANDLER!(TokenCategory::Number),
        },
        ScanRule {
            category: TokenCategory::Operator,
            regex: Regex::new(r"[+\-*/=<>]").unwrap(),
            handler: MK_RECORD_HANDLER!(TokenCategory::Operator),
        },
        ScanRule {
            category: TokenCategory::Delimiter,
            regex: Regex::new(r"[(){};,]").unwrap(),
            handler: MK_RECORD_HANDLER!(TokenCategory::Delimiter),
        },
        ScanRule {
            category: TokenCategory::Whitespace,
            regex: Regex::new(r"\s+").unwrap(),
            handler: MK_RECORD_HANDLER!(TokenCategory::Whitespace),
        },
        ScanRule {
            category: TokenCategory::Unknown,
            regex: Regex::new(r".").unwrap(),
            handler: MK_RECORD_HANDLER!(TokenCategory::Unknown),
        },
    ];
}

/// Result of scanning one source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub buckets: TokenBuckets,
    pub had_unknown: bool,
    /// Bytes matched by all rules, whitespace included.
    pub consumed: usize,
}

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    buckets: TokenBuckets,
    had_unknown: bool,
    consumed: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            buckets: TokenBuckets::new(),
            had_unknown: false,
            consumed: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(category = %token.category, value = %token.value, start = token.span.start.0, "token");

        self.consumed += token.span.len();

        if token.category == TokenCategory::Unknown {
            self.had_unknown = true;
        }

        if token.category.is_recorded() {
            self.buckets.append(token.category, token.value);
        }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Finds the first rule with a non-empty match starting exactly at the cursor.
    ///
    /// Searches are anchored at the cursor but still see the whole source,
    /// so word boundaries account for the text before the cursor.
    fn match_here(&self) -> Option<(&'static ScanRule, &'a str)> {
        let source = self.source;
        let input = Input::new(source)
            .span(self.pos..source.len())
            .anchored(Anchored::Yes);

        SCAN_RULES.iter().find_map(|rule| {
            rule.regex
                .search(&input)
                .filter(|found| !found.is_empty())
                .map(|found| (rule, &source[found.range()]))
        })
    }

    fn finish(self) -> ScanResult {
        ScanResult {
            buckets: self.buckets,
            had_unknown: self.had_unknown,
            consumed: self.consumed,
        }
    }
}

/// Splits `source` into category buckets.
///
/// Never fails: anything no rule recognises is bucketed as unknown and
/// reported through [`ScanResult::had_unknown`].
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> ScanResult {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        match lex.match_here() {
            Some((rule, matched)) => (rule.handler)(&mut lex, matched),
            None => {
                // Only reachable if the catch-all misses.
                let width = lex.remainder().chars().next().map_or(1, char::len_utf8);
                let matched = &lex.remainder()[..width];
                let fallback: RuleHandler = MK_RECORD_HANDLER!(TokenCategory::Unknown);
                fallback(&mut lex, matched);
            }
        }
    }

    let result = lex.finish();

    if result.had_unknown {
        warn!("{}", UNKNOWN_CHARACTERS_WARNING);
    }

    debug!(categories = result.buckets.len(), consumed = result.consumed, "scan finished");

    result
}
