use num::BigInt;
use std::fmt;

/// One assembled statement, in source order. Local names have already
/// been qualified with their enclosing label's prefix.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// `name:` binds the current image offset.
    Label(String),
    /// `name = expr` binds a symbol without emitting a cell.
    Constant(String, Expr),
    /// A bare expression emits one cell.
    Value(Expr),
    /// A string literal emits one cell per codepoint, no terminator.
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(BigInt),
    Character(char),
    Symbol(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
}

/// Unary `+` and `*` are identities; `-` negates; `/` is reciprocal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnaryOp {
    Plus,
    Minus,
    Star,
    Slash,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Star => "*",
            UnaryOp::Slash => "/",
        })
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(number) => write!(f, "{}", number),
            Expr::Character(c) => write!(f, "'{}'", c),
            Expr::Symbol(name) => f.write_str(name),
            Expr::Unary(op, inner) => write!(f, "{}{}", op, inner),
            Expr::Binary(left, op, right) => write!(f, "({} {} {})", left, op, right),
        }
    }
}
