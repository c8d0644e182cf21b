//! Lexer for Tally using logos.
//!
//! Logos produces [`RawToken`]s; this module cooks them into [`Token`]s,
//! parsing integer literals and resolving string escapes. Whitespace and
//! `//` comments are discarded.

mod cook_escape;
mod lex_error;
mod raw_token;
mod token;

use logos::Logos;

use raw_token::RawToken;

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Span, Token, TokenKind};

/// Lex `source` into tokens, stopping at the first error.
///
/// On success the list ends with a single [`TokenKind::Eof`].
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start as u32, range.end as u32);
        let slice = lexer.slice();

        let Ok(raw) = result else {
            let ch = slice.chars().next().unwrap_or('\0');
            return Err(LexError::unexpected_char(span, ch));
        };

        tokens.push(Token::new(cook(raw, slice, span)?, span));
    }

    let end = source.len() as u32;
    tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
    Ok(tokens)
}

fn cook(raw: RawToken, slice: &str, span: Span) -> Result<TokenKind, LexError> {
    let kind = match raw {
        RawToken::Fn => TokenKind::Fn,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::For => TokenKind::For,

        RawToken::Ident => TokenKind::Ident(slice.to_string()),
        RawToken::Int => match slice.parse::<i64>() {
            Ok(n) => TokenKind::Int(n),
            Err(_) => return Err(LexError::int_overflow(span, slice)),
        },
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Str(cook_escape::unescape_string(content, span.start + 1)?)
        }
        RawToken::UnterminatedString => return Err(LexError::unterminated_string(span)),

        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,

        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
    };
    Ok(kind)
}
