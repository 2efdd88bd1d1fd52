//! A stack-based virtual machine whose only value type is an exact,
//! arbitrary-precision rational number.
//!
//! Machine words, addresses, heap identifiers and data all live in the
//! same numeric domain: a word decodes into an integer operand and a
//! fractional opcode via [`rational::divmod`], and heap arrays are keyed
//! by proper fractions minted in a deterministic enumeration (see
//! [`Memory`]). A [`Process`] owns its registers, memory and stream
//! table, and [`Process::run`] drives the fetch/decode/dispatch loop
//! until the program halts, blocks on input, or hits end-of-file.

pub mod constants;
pub mod error;
pub mod image;
pub mod memory;
pub mod opcode;
pub mod process;
pub mod rational;
pub mod stream;

pub use crate::error::Error;
pub use crate::memory::Memory;
pub use crate::opcode::{Opcode, ParseOpcodeError};
pub use crate::process::{Outcome, Process, RegisterId};
pub use crate::rational::Q;
pub use crate::stream::{Handle, StreamTable, Wait};
