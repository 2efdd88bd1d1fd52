//! Textual persistence for program images: one reduced rational per
//! line, written `numerator/denominator` or as a bare integer.

use crate::rational::Q;
use num::{BigInt, Signed, Zero};
use std::fmt::Write as _;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ImageError {
    #[error("line {line}: invalid rational: {text}")]
    Invalid { line: usize, text: String },

    #[error("line {line}: zero denominator: {text}")]
    ZeroDenominator { line: usize, text: String },
}

/// Parses an image from its textual form. Blank lines are ignored.
pub fn parse(text: &str) -> Result<Vec<Q>, ImageError> {
    let mut words = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            continue;
        }

        words.push(parse_word(trimmed, index + 1)?);
    }

    Ok(words)
}

/// Renders an image to its textual form.
pub fn render(words: &[Q]) -> String {
    let mut text = String::new();

    for word in words {
        // Display for a reduced rational is `n/d`, or `n` alone when
        // the denominator is one.
        writeln!(text, "{}", word).expect("writing to a string cannot fail");
    }

    text
}

fn parse_word(text: &str, line: usize) -> Result<Q, ImageError> {
    let invalid = || ImageError::Invalid {
        line,
        text: text.to_owned(),
    };

    match text.find('/') {
        None => {
            let numerator: BigInt = text.parse().map_err(|_| invalid())?;
            Ok(Q::from_integer(numerator))
        }
        Some(slash) => {
            let numerator: BigInt = text[..slash].parse().map_err(|_| invalid())?;
            let denominator: BigInt = text[slash + 1..].parse().map_err(|_| invalid())?;

            if denominator.is_zero() {
                return Err(ImageError::ZeroDenominator {
                    line,
                    text: text.to_owned(),
                });
            }

            if denominator.is_negative() {
                return Err(invalid());
            }

            Ok(Q::new(numerator, denominator))
        }
    }
}
