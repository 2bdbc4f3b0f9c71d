//! Utility macros for the front-end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RECORD_HANDLER!` - Creates a lexer handler that records a token into
//!   its category bucket
//!
//! These macros keep the scan rule table readable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The TokenCategory
/// * `$value` - The matched literal
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenCategory::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $value:expr, $span:expr) => {
        Token {
            category: $category,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler that records the matched literal under a category.
///
/// The generated handler builds a token spanning the match, hands it to the
/// lexer and advances the cursor past the match.
///
/// # Example
///
/// ```ignore
/// ScanRule {
///     category: TokenCategory::Operator,
///     regex: Regex::new(r"[+\-*/=<>]").unwrap(),
///     handler: MK_RECORD_HANDLER!(TokenCategory::Operator),
/// }
/// ```
#[macro_export]
macro_rules! MK_RECORD_HANDLER {
    ($category:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            lexer.push(MK_TOKEN!(
                $category,
                String::from(matched),
                Span {
                    start: Position(lexer.pos as u32),
                    end: Position((lexer.pos + matched.len()) as u32),
                }
            ));
            lexer.advance_n(matched.len());
        }
    };
}
