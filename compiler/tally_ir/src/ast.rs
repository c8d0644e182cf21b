//! Syntax tree node types.
//!
//! Rendering (`Display`) produces fully parenthesized source text; it is
//! what `tally parse` prints and how function values render themselves.

use std::fmt;
use std::rc::Rc;

use crate::ops::{InfixOp, PrefixOp};

/// An identifier. Cheap to clone; shared between the tree and runtime frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident(Rc<str>);

impl Ident {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Ident(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The shared name, for use as an environment key.
    #[inline]
    pub fn as_rc(&self) -> &Rc<str> {
        &self.0
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Root of a parsed source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `let name = value;`
    Let(LetStmt),
    /// `return value;`
    Return(Expr),
    /// An expression evaluated for its value.
    Expr(Expr),
}

/// Binding statement. Also produced by the assignment sugar in `for` headers.
#[derive(Clone, Debug, PartialEq)]
pub struct LetStmt {
    pub name: Ident,
    pub value: Expr,
}

/// A braced statement list. Blocks do not open a new scope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    Ident(Ident),
    Prefix {
        op: PrefixOp,
        operand: Box<Expr>,
    },
    Infix {
        left: Box<Expr>,
        op: InfixOp,
        right: Box<Expr>,
    },
    If(IfExpr),
    For(Box<ForExpr>),
    Function(FunctionLit),
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn prefix(op: PrefixOp, operand: Expr) -> Self {
        Expr::Prefix {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn infix(left: Expr, op: InfixOp, right: Expr) -> Self {
        Expr::Infix {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn ident(name: &str) -> Self {
        Expr::Ident(Ident::new(name))
    }

    pub fn string(text: &str) -> Self {
        Expr::Str(Rc::from(text))
    }
}

/// `if (condition) { consequence } else { alternative }`
#[derive(Clone, Debug, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub consequence: Block,
    pub alternative: Option<Block>,
}

/// `for (init; condition; update) { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct ForExpr {
    pub init: Stmt,
    pub condition: Expr,
    pub update: Stmt,
    pub body: Block,
}

/// `fn(params) { body }`
///
/// Parameters and body are shared with every function value created from
/// this literal.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLit {
    pub params: Rc<[Ident]>,
    pub body: Rc<Block>,
}

impl FunctionLit {
    pub fn new(params: Vec<Ident>, body: Block) -> Self {
        FunctionLit {
            params: params.into(),
            body: Rc::new(body),
        }
    }
}

// Rendering

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(let_stmt) => write!(f, "{let_stmt};"),
            Stmt::Return(value) => write!(f, "return {value};"),
            Stmt::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {}", self.name, self.value)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for stmt in &self.statements {
            write!(f, " {stmt}")?;
        }
        f.write_str(" }")
    }
}

/// Render a `for` header clause without its terminating semicolon.
fn fmt_clause(stmt: &Stmt, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match stmt {
        Stmt::Let(let_stmt) => write!(f, "{let_stmt}"),
        Stmt::Return(value) => write!(f, "return {value}"),
        Stmt::Expr(expr) => write!(f, "{expr}"),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(n) => write!(f, "{n}"),
            Expr::Str(text) => write!(f, "{:?}", &**text),
            Expr::Bool(b) => write!(f, "{b}"),
            Expr::Ident(ident) => write!(f, "{ident}"),
            Expr::Prefix { op, operand } => write!(f, "({op}{operand})"),
            Expr::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Expr::If(if_expr) => {
                write!(f, "if {} {}", if_expr.condition, if_expr.consequence)?;
                if let Some(alternative) = &if_expr.alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Expr::For(for_expr) => {
                f.write_str("for (")?;
                fmt_clause(&for_expr.init, f)?;
                write!(f, "; {}; ", for_expr.condition)?;
                fmt_clause(&for_expr.update, f)?;
                write!(f, ") {}", for_expr.body)
            }
            Expr::Function(lit) => write!(f, "{lit}"),
            Expr::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, args)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for FunctionLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_comma_separated(f, &self.params)?;
        write!(f, ") {}", self.body)
    }
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
