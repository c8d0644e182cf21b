//! Recursive descent parser for Tally.
//!
//! Statements are parsed by plain recursive descent; expressions use
//! precedence climbing. Errors are collected per statement and parsing
//! resumes after the next `;`, so one run reports every broken statement.

mod error;
mod grammar;

use tally_ir::Program;
use tally_lexer::{Span, Token, TokenKind};

pub use error::{ParseError, ParseErrors};

/// Parse a complete source file.
pub fn parse(source: &str) -> Result<Program, ParseErrors> {
    let tokens = tally_lexer::lex(source).map_err(|err| ParseErrors(vec![err.into()]))?;
    Parser::new(tokens).parse_program()
}

/// Parser state.
pub(crate) struct Parser {
    /// Token list from the lexer; always ends in `Eof`.
    tokens: Vec<Token>,
    /// Current token index.
    pos: usize,
    /// Number of blocks currently open.
    depth: usize,
    /// Collected errors.
    errors: Vec<ParseError>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            errors: Vec::new(),
        }
    }

    #[tracing::instrument(level = "trace", skip_all)]
    fn parse_program(mut self) -> Result<Program, ParseErrors> {
        let mut statements = Vec::new();

        while !self.at_end() {
            let start = self.pos;
            self.depth = 0;
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    if self.pos == start {
                        self.advance();
                    }
                    self.recover_to_next_statement();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(Program::new(statements))
        } else {
            tracing::debug!(errors = self.errors.len(), "parse failed");
            Err(ParseErrors(self.errors))
        }
    }

    // ===== Token access =====

    fn current(&self) -> &TokenKind {
        self.tokens.get(self.pos).map_or(&TokenKind::Eof, |t| &t.kind)
    }

    fn current_span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some(token) => token.span,
            None => self.tokens.last().map_or(Span::default(), |t| t.span),
        }
    }

    fn at_end(&self) -> bool {
        matches!(self.current(), TokenKind::Eof)
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current()) == std::mem::discriminant(kind)
    }

    /// Advance past `kind` if it is the current token.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    fn error(&self, expected: &'static str) -> ParseError {
        ParseError::unexpected(expected, self.current(), self.current_span())
    }

    /// Skip to just past the next top-level `;`, or to the next top-level
    /// `let`/`return`. Blocks left open by the failed statement are skipped
    /// through their closing braces.
    fn recover_to_next_statement(&mut self) {
        while !self.at_end() {
            match self.current() {
                TokenKind::LBrace => self.depth += 1,
                TokenKind::RBrace => self.depth = self.depth.saturating_sub(1),
                TokenKind::Semicolon if self.depth == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::Let | TokenKind::Return if self.depth == 0 => return,
                _ => {}
            }
            self.advance();
        }
    }
}
