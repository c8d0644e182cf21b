//! Parse error types.

use std::fmt;

use tally_lexer::{LexError, Span, TokenKind};
use thiserror::Error;

/// A single parse error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token other than the one the grammar requires.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    /// No expression starts with this token.
    #[error("no prefix parse rule for {found}")]
    ExpectedExpression { found: String, span: Span },
}

impl ParseError {
    #[cold]
    pub(crate) fn unexpected(expected: &'static str, found: &TokenKind, span: Span) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: found.describe(),
            span,
        }
    }

    #[cold]
    pub(crate) fn expected_expression(found: &TokenKind, span: Span) -> Self {
        ParseError::ExpectedExpression {
            found: found.describe(),
            span,
        }
    }

    /// Where the error was detected.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::UnexpectedToken { span, .. } | ParseError::ExpectedExpression { span, .. } => {
                *span
            }
        }
    }
}

/// Every error found while parsing a source file, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::error::Error for ParseErrors {}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}
