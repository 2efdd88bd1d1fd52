use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};

/// The machine's only value type: a reduced signed fraction with a
/// positive denominator. All arithmetic is exact.
pub type Q = BigRational;

/// Returns `⌊q⌋`, rounding toward negative infinity.
pub fn floor(q: &Q) -> BigInt {
    q.floor().to_integer()
}

/// Splits `q` into its integer part and a proper fraction in `[0, 1)`,
/// such that `q = whole + fraction`.
///
/// This is how machine words decode: the integer part is the operand
/// and the fractional part selects the opcode.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use qvm::rational::{divmod, Q};
///
/// let word = Q::new(BigInt::from(-40), BigInt::from(7));
/// let (whole, fraction) = divmod(&word);
/// assert_eq!(whole, BigInt::from(-6));
/// assert_eq!(fraction, Q::new(BigInt::from(2), BigInt::from(7)));
/// ```
pub fn divmod(q: &Q) -> (BigInt, Q) {
    let whole = floor(q);
    let fraction = q - Q::from_integer(whole.clone());
    (whole, fraction)
}

/// Returns `⌊left / right⌋` as an integer-valued rational, or `None`
/// when `right` is zero.
pub fn floor_div(left: &Q, right: &Q) -> Option<Q> {
    if right.is_zero() {
        None
    } else {
        Some((left / right).floor())
    }
}

/// Floored modulo: `left − right·⌊left / right⌋`, or `None` when
/// `right` is zero. The result has the sign of `right`.
pub fn modulo(left: &Q, right: &Q) -> Option<Q> {
    if right.is_zero() {
        return None;
    }

    let quotient = (left / right).floor();
    Some(left - right * quotient)
}

/// Packs a proper reduced fraction `p/d` into its canonical dense
/// index `(d−1)(d−2)/2 + p`.
///
/// The packing is injective over reduced fractions in `[0, 1)` and
/// preserves the enumeration order of [`next_fraction`], so it can
/// index both the opcode table and the heap. Returns `None` if `q` is
/// not a proper fraction or the index does not fit in `usize`.
pub fn fraction_index(q: &Q) -> Option<usize> {
    let numerator = q.numer();
    let denominator = q.denom();

    if numerator.is_negative() || numerator >= denominator {
        return None;
    }

    let index = (denominator - BigInt::one()) * (denominator - BigInt::from(2)) / BigInt::from(2)
        + numerator;
    index.to_usize()
}

/// Returns the successor of a proper fraction in the enumeration that
/// visits every reduced fraction in `[0, 1)` exactly once, ordered by
/// denominator and then numerator:
/// `0, 1/2, 1/3, 2/3, 1/4, 3/4, 1/5, 2/5, …`
pub fn next_fraction(q: &Q) -> Q {
    let step = Q::new(BigInt::one(), q.denom().clone());
    let mut q = q.clone();

    loop {
        q = q + &step;

        if q >= Q::one() {
            return Q::new(BigInt::one(), step.denom() + BigInt::one());
        }

        if q.denom() == step.denom() {
            return q;
        }
    }
}

/// Maps a rational to a character via the Unicode codepoint `⌊q⌋`.
/// Values outside the codepoint range yield U+FFFD.
pub fn to_char(q: &Q) -> char {
    floor(q)
        .to_u32()
        .and_then(std::char::from_u32)
        .unwrap_or(std::char::REPLACEMENT_CHARACTER)
}

/// Maps a character to the rational integer of its codepoint.
pub fn from_char(c: char) -> Q {
    Q::from_integer(BigInt::from(c as u32))
}
