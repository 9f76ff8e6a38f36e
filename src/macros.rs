//! Utility macros for the lexical analyser.
//!
//! This module defines helper macros used by both tokenizers:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a regex handler that emits the matched text
//!
//! These macros reduce boilerplate in the lexer implementations.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$line` - The 1-based source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates a regex lexer handler for patterns whose whole match is one token.
///
/// Generates a handler function that pushes a token of the given kind holding
/// the matched text and advances the lexer past it.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^:=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Assign),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut RegexLexer, matched: &str| {
            let line = lexer.line;
            lexer.push(MK_TOKEN!($kind, String::from(matched), line));
            lexer.advance_n(matched);
            Ok(())
        }
    };
}
