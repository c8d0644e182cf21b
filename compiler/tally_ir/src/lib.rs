//! Tally IR - the syntax tree consumed by the evaluator.
//!
//! The parser produces a [`Program`]; the evaluator walks it without ever
//! re-parsing. Function bodies are reference counted so that closures share
//! the tree instead of copying it.

mod ast;
mod ops;

pub use ast::{Block, Expr, ForExpr, FunctionLit, Ident, IfExpr, LetStmt, Program, Stmt};
pub use ops::{InfixOp, PrefixOp};
