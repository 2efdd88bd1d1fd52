use crate::ast::{BinaryOp, Expr, Statement, UnaryOp};
use crate::{new_parser_error, Error, Result};
use matches::debug_assert_matches;
use num::BigInt;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct QasmParser;

/// Parses a program and lowers it to a flat statement list, tagging
/// each statement with its 1-based source line. Local names (leading
/// `.`) are qualified with the most recent non-local label or constant
/// name.
pub fn parse(input: &str) -> Result<Vec<(Statement, usize)>> {
    let program = QasmParser::parse(Rule::program, input)
        .map_err(Box::new)?
        .next()
        .expect("the grammar yields exactly one program");

    let mut lowerer = Lowerer { prefix: None };
    let mut statements = Vec::new();

    for line in program.into_inner() {
        if line.as_rule() != Rule::line {
            continue;
        }

        for pair in line.into_inner() {
            let number = pair.as_span().start_pos().line_col().0;
            let statement = match pair.as_rule() {
                Rule::label => lowerer.label(pair)?,
                Rule::statement => lowerer.statement(pair)?,
                _ => unreachable!(),
            };

            statements.push((statement, number));
        }
    }

    Ok(statements)
}

struct Lowerer {
    prefix: Option<String>,
}

impl Lowerer {
    /// Qualifies a defining occurrence: local names get the prefix,
    /// non-local names become the new prefix.
    fn define(&mut self, pair: &Pair<Rule>) -> Result<String> {
        let name = pair.as_str();

        if name.starts_with('.') {
            self.qualify(pair)
        } else {
            self.prefix = Some(name.to_owned());
            Ok(name.to_owned())
        }
    }

    fn qualify(&self, pair: &Pair<Rule>) -> Result<String> {
        let name = pair.as_str();

        if !name.starts_with('.') {
            return Ok(name.to_owned());
        }

        match &self.prefix {
            Some(prefix) => Ok(format!("{}{}", prefix, name)),
            None => Err(Error::from(Box::new(new_parser_error(
                pair.as_span(),
                format!("local name {} before any label", name),
            )))),
        }
    }

    fn label(&mut self, pair: Pair<Rule>) -> Result<Statement> {
        let identifier = pair.into_inner().next().expect("a label holds its name");
        Ok(Statement::Label(self.define(&identifier)?))
    }

    fn statement(&mut self, pair: Pair<Rule>) -> Result<Statement> {
        let inner = pair.into_inner().next().expect("a statement holds one node");

        match inner.as_rule() {
            Rule::constant => {
                let mut pairs = inner.into_inner();
                let identifier = pairs.next().expect("a constant holds its name");
                let name = self.define(&identifier)?;
                let expression =
                    self.expression(pairs.next().expect("a constant holds its expression"))?;

                Ok(Statement::Constant(name, expression))
            }
            Rule::expression => Ok(Statement::Value(self.expression(inner)?)),
            Rule::string => Ok(Statement::Text(unescape(text_body(inner.as_str())))),
            _ => unreachable!(),
        }
    }

    /// An expression is a chain of multiply-expressions joined by
    /// equal-precedence additive operators, folded left to right.
    fn expression(&self, pair: Pair<Rule>) -> Result<Expr> {
        debug_assert_matches!(pair.as_rule(), Rule::expression);
        let mut pairs = pair.into_inner();

        let mut expression =
            self.multiply_expression(pairs.next().expect("an expression has a first term"))?;

        while let Some(operator) = pairs.next() {
            let right =
                self.multiply_expression(pairs.next().expect("a binary operator has an operand"))?;
            let op = match operator.as_str() {
                "+" => BinaryOp::Add,
                "-" => BinaryOp::Subtract,
                _ => unreachable!(),
            };

            expression = Expr::Binary(Box::new(expression), op, Box::new(right));
        }

        Ok(expression)
    }

    fn multiply_expression(&self, pair: Pair<Rule>) -> Result<Expr> {
        let mut pairs = pair.into_inner();

        let mut expression =
            self.unary_expression(pairs.next().expect("a term has a first factor"))?;

        while let Some(operator) = pairs.next() {
            let right =
                self.unary_expression(pairs.next().expect("a binary operator has an operand"))?;
            let op = match operator.as_str() {
                "*" => BinaryOp::Multiply,
                "/" => BinaryOp::Divide,
                _ => unreachable!(),
            };

            expression = Expr::Binary(Box::new(expression), op, Box::new(right));
        }

        Ok(expression)
    }

    /// Unary operators apply innermost-first, i.e. right to left.
    fn unary_expression(&self, pair: Pair<Rule>) -> Result<Expr> {
        let mut operators = Vec::new();
        let mut operand = None;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::unary_operator => operators.push(match inner.as_str() {
                    "+" => UnaryOp::Plus,
                    "-" => UnaryOp::Minus,
                    "*" => UnaryOp::Star,
                    "/" => UnaryOp::Slash,
                    _ => unreachable!(),
                }),
                Rule::operand => operand = Some(self.operand(inner)?),
                _ => unreachable!(),
            }
        }

        let mut expression = operand.expect("a unary expression holds its operand");

        for op in operators.into_iter().rev() {
            expression = Expr::Unary(op, Box::new(expression));
        }

        Ok(expression)
    }

    fn operand(&self, pair: Pair<Rule>) -> Result<Expr> {
        let inner = pair.into_inner().next().expect("an operand holds one node");

        match inner.as_rule() {
            Rule::number => {
                let number: BigInt = inner
                    .as_str()
                    .parse()
                    .expect("the grammar only admits decimal digits");
                Ok(Expr::Number(number))
            }
            Rule::character => {
                let text = unescape(text_body(inner.as_str()));
                let mut chars = text.chars();

                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Expr::Character(c)),
                    _ => Err(Error::BadCharacter {
                        text: inner.as_str().to_owned(),
                    }),
                }
            }
            Rule::identifier => Ok(Expr::Symbol(self.qualify(&inner)?)),
            Rule::expression => self.expression(inner),
            _ => unreachable!(),
        }
    }
}

/// Strips the quote characters from a literal's matched text.
fn text_body(text: &str) -> &str {
    &text[1..text.len() - 1]
}

// TODO: handle escapes beyond \n (the grammar already admits them).
fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}
