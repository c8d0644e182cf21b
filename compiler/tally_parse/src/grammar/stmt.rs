//! Statement parsing: `let`, `return`, expression statements and blocks.

use tally_ir::{Block, Ident, LetStmt, Stmt};
use tally_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse one statement. A trailing `;` is optional.
    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        let stmt = match self.current() {
            TokenKind::Let => Stmt::Let(self.let_binding()?),
            TokenKind::Return => {
                self.advance();
                Stmt::Return(self.expression()?)
            }
            _ => Stmt::Expr(self.expression()?),
        };
        self.eat(&TokenKind::Semicolon);
        Ok(stmt)
    }

    /// `{ statements }`
    pub(crate) fn block(&mut self) -> Result<Block, ParseError> {
        self.consume(&TokenKind::LBrace, "`{`")?;
        self.depth += 1;
        let mut statements = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.at_end() {
            statements.push(self.statement()?);
        }
        self.consume(&TokenKind::RBrace, "`}`")?;
        self.depth -= 1;
        Ok(Block::new(statements))
    }

    /// A `for` header clause: `let x = e` or the bare assignment `x = e`.
    ///
    /// Both forms bind in the current frame, so they share a node.
    pub(crate) fn for_clause(&mut self) -> Result<Stmt, ParseError> {
        let binding = if self.check(&TokenKind::Let) {
            self.let_binding()?
        } else {
            self.assignment()?
        };
        Ok(Stmt::Let(binding))
    }

    /// `let name = value`, without the trailing semicolon.
    fn let_binding(&mut self) -> Result<LetStmt, ParseError> {
        self.consume(&TokenKind::Let, "`let`")?;
        self.assignment()
    }

    /// `name = value`
    fn assignment(&mut self) -> Result<LetStmt, ParseError> {
        let name = self.ident()?;
        self.consume(&TokenKind::Assign, "`=`")?;
        let value = self.expression()?;
        Ok(LetStmt { name, value })
    }

    pub(crate) fn ident(&mut self) -> Result<Ident, ParseError> {
        if let TokenKind::Ident(name) = self.current() {
            let ident = Ident::new(name.as_str());
            self.advance();
            Ok(ident)
        } else {
            Err(self.error("an identifier"))
        }
    }
}
