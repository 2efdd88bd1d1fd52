use crate::ast::{BinaryOp, Expr, Statement, UnaryOp};
use crate::prelude;
use crate::{Error, Result};
use num::{BigInt, Zero};
use qvm::rational::{self, Q};
use std::collections::HashMap;
use tracing::debug;

/// The 1-based source line of each emitted image cell.
pub type SourceMap = Vec<u32>;

/// A deferred evaluation: a constant still missing its value, or an
/// image cell emitted as a zero placeholder.
#[derive(Clone, Debug, PartialEq)]
enum Key {
    Symbol(String),
    Cell(usize),
}

/// Assembles lowered statements into an image.
///
/// Pass 1 emits cells and binds whatever evaluates immediately,
/// recording the rest as errata. Pass 2 re-evaluates the errata to a
/// fixed point, committing each success; when an iteration makes no
/// progress the first stuck erratum is reported.
pub fn assemble_statements(statements: Vec<(Statement, usize)>) -> Result<(Vec<Q>, SourceMap)> {
    let mut code: Vec<Q> = Vec::new();
    let mut map: SourceMap = Vec::new();
    let mut symbols = prelude::symbols();
    let mut errata: Vec<(Key, Expr)> = Vec::new();

    for (statement, line) in statements {
        match statement {
            Statement::Label(name) => {
                symbols.insert(name, Q::from_integer(BigInt::from(code.len())));
            }
            Statement::Constant(name, expression) => match evaluate(&expression, &symbols)? {
                Some(value) => {
                    symbols.insert(name, value);
                }
                None => errata.push((Key::Symbol(name), expression)),
            },
            Statement::Value(expression) => {
                match evaluate(&expression, &symbols)? {
                    Some(value) => code.push(value),
                    None => {
                        errata.push((Key::Cell(code.len()), expression));
                        code.push(Q::zero());
                    }
                }

                map.push(line as u32);
            }
            Statement::Text(text) => {
                for c in text.chars() {
                    code.push(rational::from_char(c));
                    map.push(line as u32);
                }
            }
        }
    }

    while !errata.is_empty() {
        let mut progress = false;
        let mut remaining = Vec::with_capacity(errata.len());

        for (key, expression) in errata {
            match evaluate(&expression, &symbols)? {
                Some(value) => {
                    progress = true;

                    match key {
                        Key::Symbol(name) => {
                            symbols.insert(name, value);
                        }
                        Key::Cell(offset) => code[offset] = value,
                    }
                }
                None => remaining.push((key, expression)),
            }
        }

        if !progress {
            let (key, expression) = remaining
                .into_iter()
                .next()
                .expect("a stalled pass still holds errata");

            return Err(match key {
                Key::Symbol(name) => Error::UnresolvedSymbol {
                    name,
                    expression: expression.to_string(),
                },
                Key::Cell(offset) => Error::UndefinedCell {
                    offset,
                    expression: expression.to_string(),
                },
            });
        }

        debug!(remaining = remaining.len(), "resolution pass");
        errata = remaining;
    }

    debug!(cells = code.len(), "assembled image");
    Ok((code, map))
}

/// Evaluates an expression over the symbol table. `Ok(None)` means an
/// identifier is still unbound; division by zero is an immediate error.
fn evaluate(expression: &Expr, symbols: &HashMap<String, Q>) -> Result<Option<Q>> {
    match expression {
        Expr::Number(number) => Ok(Some(Q::from_integer(number.clone()))),
        Expr::Character(c) => Ok(Some(rational::from_char(*c))),
        Expr::Symbol(name) => Ok(symbols.get(name).cloned()),
        Expr::Unary(op, inner) => {
            let value = match evaluate(inner, symbols)? {
                Some(value) => value,
                None => return Ok(None),
            };

            match op {
                UnaryOp::Plus | UnaryOp::Star => Ok(Some(value)),
                UnaryOp::Minus => Ok(Some(-value)),
                UnaryOp::Slash => {
                    if value.is_zero() {
                        Err(Error::DivisionByZero {
                            expression: expression.to_string(),
                        })
                    } else {
                        Ok(Some(value.recip()))
                    }
                }
            }
        }
        Expr::Binary(left, op, right) => {
            let left = match evaluate(left, symbols)? {
                Some(value) => value,
                None => return Ok(None),
            };
            let right = match evaluate(right, symbols)? {
                Some(value) => value,
                None => return Ok(None),
            };

            match op {
                BinaryOp::Add => Ok(Some(left + right)),
                BinaryOp::Subtract => Ok(Some(left - right)),
                BinaryOp::Multiply => Ok(Some(left * right)),
                BinaryOp::Divide => {
                    if right.is_zero() {
                        Err(Error::DivisionByZero {
                            expression: expression.to_string(),
                        })
                    } else {
                        Ok(Some(left / right))
                    }
                }
            }
        }
    }
}
