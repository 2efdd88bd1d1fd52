//! Assembler for the [qvm](../qvm/index.html) rational virtual machine.
//!
//! The entry points are [`assemble`], which turns assembly source into
//! a program image (a vector of rationals), and
//! [`assemble_with_source_map`], which also reports the source line of
//! every image cell. Parsing is implemented with [pest]; the grammar
//! lives in `grammar.pest`.
//!
//! # Source language
//!
//! A program is a sequence of lines. Each line may carry a label, a
//! comma-separated list of statements, and a comment from `;` to the
//! end of the line:
//!
//! ```text
//!     message
//! loop:
//!     dup, ldd            ; load the next character
//!     dup, beq + exit     ; stop on NUL
//!     ldi + stdout, put
//!     adi + 1, bal + loop
//! exit:
//!     0, hcf
//! message:
//!     "Hello, World!\n", 0
//! ```
//!
//! A statement is either a constant definition (`name = expr`), an
//! expression whose value becomes the next image cell, or a string
//! literal that expands to one cell per codepoint.
//!
//! Expressions evaluate in exact rational arithmetic. The binary
//! operators are `+ - * /`; unary `-` negates, unary `/` takes the
//! reciprocal, and unary `+` and `*` are identities (so `/2` is one
//! half). Operands are non-negative decimal integers, character
//! literals such as `'a'` (only the `\n` escape is recognised),
//! identifiers, and parenthesised expressions.
//!
//! Labels bind identifiers to image offsets. Names starting with `.`
//! are local: they are silently prefixed with the most recent
//! non-local name, so two routines can both use `.loop` without
//! clashing.
//!
//! Forward references are resolved by a second pass over the recorded
//! *errata*: expressions that could not be evaluated yet. The pass
//! loops while it makes progress, so definition order never matters;
//! a genuinely undefined symbol or a cycle such as `a = b` / `b = a`
//! is reported naming the offending key and expression.
//!
//! A built-in prelude defines the register indices (`pr`, `dr`, `cr`),
//! every opcode mnemonic, and the standard stream handles (`stdin`,
//! `stdout`, `stderr`), so `function, cal` or `ldi + stdout, put`
//! work without declarations.
//!
//! [pest]: https://docs.rs/pest/

mod ast;
mod error;
mod parser;
mod prelude;
mod resolve;


pub use crate::ast::{BinaryOp, Expr, Statement, UnaryOp};
pub use crate::error::Error;
pub use crate::parser::{QasmParser, Rule};
pub use crate::resolve::SourceMap;

use pest::Span;
use qvm::Q;

pub type Result<T> = std::result::Result<T, Error>;

/// Assembles source text into a program image.
pub fn assemble(input: &str) -> Result<Vec<Q>> {
    Ok(assemble_with_source_map(input)?.0)
}

/// Assembles source text, also returning the 1-based source line of
/// each image cell.
pub fn assemble_with_source_map(input: &str) -> Result<(Vec<Q>, SourceMap)> {
    resolve::assemble_statements(parser::parse(input)?)
}

pub(crate) fn new_parser_error(span: Span, message: String) -> pest::error::Error<Rule> {
    pest::error::Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}
