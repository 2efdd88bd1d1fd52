use crate::parser::Rule;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed source, reported with the pest location.
    #[error("{0}")]
    Parse(#[from] Box<pest::error::Error<Rule>>),

    /// A constant whose expression never resolves. The symbol may be
    /// genuinely undefined or part of a reference cycle.
    #[error("undefined symbol or cyclic reference: {name} = {expression}")]
    UnresolvedSymbol { name: String, expression: String },

    /// An image cell whose expression never resolves.
    #[error("undefined symbol: {offset}: {expression}")]
    UndefinedCell { offset: usize, expression: String },

    /// Division by zero while evaluating an expression.
    #[error("division by zero: {expression}")]
    DivisionByZero { expression: String },

    /// A character literal that does not hold exactly one codepoint.
    #[error("bad character literal: {text}")]
    BadCharacter { text: String },
}
