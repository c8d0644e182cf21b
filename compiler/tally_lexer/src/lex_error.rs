//! Lexer error types.

use thiserror::Error;

use crate::Span;

/// A lexer error: where it happened and what went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape `\\{0}` in string literal")]
    InvalidStringEscape(char),
    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntOverflow(String),
}

impl LexError {
    #[cold]
    pub fn unexpected_char(span: Span, ch: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnexpectedChar(ch),
        }
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn invalid_string_escape(span: Span, escape_char: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidStringEscape(escape_char),
        }
    }

    #[cold]
    pub fn int_overflow(span: Span, literal: &str) -> Self {
        LexError {
            span,
            kind: LexErrorKind::IntOverflow(literal.to_string()),
        }
    }
}
