//! Helper macros for the lexer.
//!
//! `MK_TOKEN!` builds a `Token` literal and `MK_DEFAULT_HANDLER!` builds
//! the handler closure for tokens whose text is a fixed string, so the
//! pattern table stays one line per operator.

/// Builds a Token from its parts.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's text
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
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Builds a lexer handler for a token with fixed text.
///
/// The generated handler records the position, consumes the text, and
/// pushes a token spanning it.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal text the handler consumes
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            let start = lexer.position();
            lexer.advance_over($value);
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                Span {
                    start,
                    end: lexer.position(),
                }
            ));
        }
    };
}
