//! Operation kinds and their stable identifiers.

use std::fmt;

/// A class of metered work.
///
/// Every successful integer infix operation, string concatenation, and
/// metered builtin call is accounted as exactly one event of one kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    Add,
    Sub,
    Mul,
    Div,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
    IsPrime,
    Sin,
    Tan,
    Rand,
    Pow,
    Sqrt,
    Len,
    Fib,
    StringConcat,
}

impl OperationKind {
    /// Number of kinds.
    pub const COUNT: usize = 17;

    /// Every kind, in wire-code order.
    pub const ALL: [OperationKind; Self::COUNT] = [
        OperationKind::Add,
        OperationKind::Sub,
        OperationKind::Mul,
        OperationKind::Div,
        OperationKind::LessThan,
        OperationKind::GreaterThan,
        OperationKind::Equal,
        OperationKind::NotEqual,
        OperationKind::IsPrime,
        OperationKind::Sin,
        OperationKind::Tan,
        OperationKind::Rand,
        OperationKind::Pow,
        OperationKind::Sqrt,
        OperationKind::Len,
        OperationKind::Fib,
        OperationKind::StringConcat,
    ];

    /// Stable numeric wire code. Never renumber.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            OperationKind::Add => 0,
            OperationKind::Sub => 1,
            OperationKind::Mul => 2,
            OperationKind::Div => 3,
            OperationKind::LessThan => 4,
            OperationKind::GreaterThan => 5,
            OperationKind::Equal => 6,
            OperationKind::NotEqual => 7,
            OperationKind::IsPrime => 8,
            OperationKind::Sin => 9,
            OperationKind::Tan => 10,
            OperationKind::Rand => 11,
            OperationKind::Pow => 12,
            OperationKind::Sqrt => 13,
            OperationKind::Len => 14,
            OperationKind::Fib => 15,
            OperationKind::StringConcat => 16,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.code() as usize
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Snake-case name, as used in weight files.
    pub const fn name(self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Sub => "sub",
            OperationKind::Mul => "mul",
            OperationKind::Div => "div",
            OperationKind::LessThan => "less_than",
            OperationKind::GreaterThan => "greater_than",
            OperationKind::Equal => "equal",
            OperationKind::NotEqual => "not_equal",
            OperationKind::IsPrime => "is_prime",
            OperationKind::Sin => "sin",
            OperationKind::Tan => "tan",
            OperationKind::Rand => "rand",
            OperationKind::Pow => "pow",
            OperationKind::Sqrt => "sqrt",
            OperationKind::Len => "len",
            OperationKind::Fib => "fib",
            OperationKind::StringConcat => "string_concat",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One accounting event, as carried on the event stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OperationEvent {
    pub kind: OperationKind,
}

impl From<OperationKind> for OperationEvent {
    fn from(kind: OperationKind) -> Self {
        OperationEvent { kind }
    }
}
