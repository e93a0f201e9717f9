//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed-text tokens.
///
/// Generates a handler that creates a token with the given kind spanning
/// the literal's length from the lexer's current position. The lexer
/// advances past the match itself.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for the span length)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &$crate::lexer::lexer::Lexer, _matched: &str| {
            Some($crate::MK_TOKEN!(
                $kind,
                String::from($value),
                lexer.span_of($value.len())
            ))
        }
    };
}
