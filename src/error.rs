use crate::rational::Q;
use num::BigInt;
use thiserror::Error;

/// Fatal execution faults. Each aborts the run with a diagnostic;
/// recoverable conditions (blocked or closed input) are reported
/// through [`crate::Outcome`] instead.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Division by zero, reciprocal of zero, or a zero modulus.
    #[error("division by zero")]
    DivisionByZero,

    /// The fractional part of a fetched word is not in the opcode table.
    #[error("unknown opcode in word {0}")]
    UnknownOpcode(Q),

    /// A register operand does not name a machine register.
    #[error("invalid register index {0}")]
    InvalidRegister(BigInt),

    /// A stream handle does not fit the handle range.
    #[error("invalid stream handle {0}")]
    InvalidHandle(Q),

    /// An operand that must be a non-negative count is not.
    #[error("invalid operand {0}")]
    InvalidOperand(BigInt),

    /// An address with a negative offset.
    #[error("negative offset in address {0}")]
    NegativeOffset(Q),

    /// A heap access past the end of an array.
    #[error("address {address} is out of bounds for array {base} of length {len}")]
    OutOfBounds { address: Q, base: Q, len: usize },

    /// An access through a key that was never minted.
    #[error("array {0} is not allocated")]
    Unallocated(Q),

    /// An access through a key whose array has been freed.
    #[error("array {0} has been freed")]
    Freed(Q),

    /// An attempt to free the reserved static image.
    #[error("array {0} is reserved")]
    Reserved(Q),

    /// A pop from an empty array.
    #[error("pop from empty array {0}")]
    StackUnderflow(Q),
}
