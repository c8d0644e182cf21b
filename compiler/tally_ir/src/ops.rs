//! Prefix and infix operators.

use std::fmt;

/// Prefix (unary) operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    /// `!` logical negation.
    Not,
    /// `-` integer negation.
    Neg,
}

impl PrefixOp {
    /// Source symbol for this operator.
    pub fn as_symbol(self) -> &'static str {
        match self {
            PrefixOp::Not => "!",
            PrefixOp::Neg => "-",
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Infix (binary) operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InfixOp {
    Add,   // +
    Sub,   // -
    Mul,   // *
    Div,   // /
    Lt,    // <
    Gt,    // >
    Eq,    // ==
    NotEq, // !=
}

impl InfixOp {
    /// Source symbol for this operator.
    pub fn as_symbol(self) -> &'static str {
        match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
        }
    }

    /// Whether this is `==` or `!=`.
    ///
    /// Only equality operators are defined between values of different types.
    #[inline]
    pub fn is_equality(self) -> bool {
        matches!(self, InfixOp::Eq | InfixOp::NotEq)
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
