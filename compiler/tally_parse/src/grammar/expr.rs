//! Expression parsing: operators, calls, literals and control flow.

use tally_ir::{Expr, ForExpr, FunctionLit, IfExpr, InfixOp, PrefixOp};
use tally_lexer::TokenKind;

use crate::{ParseError, Parser};

/// Binding strength, weakest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
}

fn infix_op(kind: &TokenKind) -> Option<(InfixOp, Precedence)> {
    let op = match kind {
        TokenKind::EqEq => (InfixOp::Eq, Precedence::Equals),
        TokenKind::NotEq => (InfixOp::NotEq, Precedence::Equals),
        TokenKind::Lt => (InfixOp::Lt, Precedence::LessGreater),
        TokenKind::Gt => (InfixOp::Gt, Precedence::LessGreater),
        TokenKind::Plus => (InfixOp::Add, Precedence::Sum),
        TokenKind::Minus => (InfixOp::Sub, Precedence::Sum),
        TokenKind::Star => (InfixOp::Mul, Precedence::Product),
        TokenKind::Slash => (InfixOp::Div, Precedence::Product),
        _ => return None,
    };
    Some(op)
}

impl Parser {
    /// Parse any expression.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_precedence(Precedence::Lowest)
    }

    /// Precedence climbing. All binary operators are left associative.
    fn parse_precedence(&mut self, min_prec: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;

        while let Some((op, prec)) = infix_op(self.current()) {
            if prec <= min_prec {
                break;
            }
            self.advance();
            let right = self.parse_precedence(prec)?;
            left = Expr::infix(left, op, right);
        }

        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current() {
            TokenKind::Bang => PrefixOp::Not,
            TokenKind::Minus => PrefixOp::Neg,
            _ => return self.postfix(),
        };
        self.advance();
        let operand = self.parse_precedence(Precedence::Prefix)?;
        Ok(Expr::prefix(op, operand))
    }

    /// A primary expression followed by any number of call suffixes.
    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        while self.eat(&TokenKind::LParen) {
            let args = self.call_args()?;
            expr = Expr::call(expr, args);
        }
        Ok(expr)
    }

    /// Arguments after the opening `(`, through the closing `)`.
    fn call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            self.consume(&TokenKind::RParen, "`,` or `)`")?;
            return Ok(args);
        }
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let expr = match self.current() {
            TokenKind::Int(n) => Expr::Int(*n),
            TokenKind::Str(text) => Expr::string(text),
            TokenKind::Ident(name) => Expr::ident(name),
            TokenKind::True => Expr::Bool(true),
            TokenKind::False => Expr::Bool(false),

            TokenKind::LParen => {
                self.advance();
                let inner = self.expression()?;
                self.consume(&TokenKind::RParen, "`)`")?;
                return Ok(inner);
            }
            TokenKind::If => return self.parse_if(),
            TokenKind::For => return self.parse_for(),
            TokenKind::Fn => return self.parse_function(),

            other => {
                return Err(ParseError::expected_expression(other, self.current_span()));
            }
        };
        self.advance();
        Ok(expr)
    }

    /// `if (condition) { ... } else { ... }`
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        self.consume(&TokenKind::If, "`if`")?;
        self.consume(&TokenKind::LParen, "`(`")?;
        let condition = self.expression()?;
        self.consume(&TokenKind::RParen, "`)`")?;
        let consequence = self.block()?;

        let alternative = if self.eat(&TokenKind::Else) {
            Some(self.block()?)
        } else {
            None
        };

        Ok(Expr::If(IfExpr {
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// `for (init; condition; update) { ... }`
    fn parse_for(&mut self) -> Result<Expr, ParseError> {
        self.consume(&TokenKind::For, "`for`")?;
        self.consume(&TokenKind::LParen, "`(`")?;
        let init = self.for_clause()?;
        self.consume(&TokenKind::Semicolon, "`;`")?;
        let condition = self.expression()?;
        self.consume(&TokenKind::Semicolon, "`;`")?;
        let update = self.for_clause()?;
        self.consume(&TokenKind::RParen, "`)`")?;
        let body = self.block()?;

        Ok(Expr::For(Box::new(ForExpr {
            init,
            condition,
            update,
            body,
        })))
    }

    /// `fn(a, b) { ... }`
    fn parse_function(&mut self) -> Result<Expr, ParseError> {
        self.consume(&TokenKind::Fn, "`fn`")?;
        self.consume(&TokenKind::LParen, "`(`")?;

        let mut params = Vec::new();
        if !self.eat(&TokenKind::RParen) {
            loop {
                params.push(self.ident()?);
                if self.eat(&TokenKind::Comma) {
                    continue;
                }
                self.consume(&TokenKind::RParen, "`,` or `)`")?;
                break;
            }
        }

        let body = self.block()?;
        Ok(Expr::Function(FunctionLit::new(params, body)))
    }
}
