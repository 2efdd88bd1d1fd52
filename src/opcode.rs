use crate::rational::{self, Q};
use num::BigInt;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dense packing of a proper reduced fraction `p/d`.
const fn packed(numerator: isize, denominator: isize) -> isize {
    (denominator - 1) * (denominator - 2) / 2 + numerator
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown mnemonic: {mnemonic}")]
pub struct ParseOpcodeError {
    pub mnemonic: String,
}

macro_rules! opcodes {
    ($( $name:ident, $mnemonic:literal, $numerator:literal / $denominator:literal; )*) => {
        /// The opcode table. Each opcode is identified by a proper
        /// fraction; the enum discriminant is the dense packing of that
        /// fraction, so decoding a word is `divmod`, pack, and a
        /// primitive-to-enum lookup.
        #[derive(Clone, Copy, Debug, Eq, PartialEq, FromPrimitive, ToPrimitive)]
        pub enum Opcode {
            $( $name = packed($numerator, $denominator), )*
        }

        impl Opcode {
            /// Every opcode, in packed-index order.
            pub const ALL: &'static [Opcode] = &[ $( Opcode::$name, )* ];

            /// The assembly mnemonic.
            pub fn mnemonic(self) -> &'static str {
                match self {
                    $( Opcode::$name => $mnemonic, )*
                }
            }

            /// The fractional value that selects this opcode.
            pub fn value(self) -> Q {
                match self {
                    $( Opcode::$name => Q::new(
                        BigInt::from($numerator),
                        BigInt::from($denominator),
                    ), )*
                }
            }
        }

        impl FromStr for Opcode {
            type Err = ParseOpcodeError;

            fn from_str(s: &str) -> Result<Opcode, ParseOpcodeError> {
                match s {
                    $( $mnemonic => Ok(Opcode::$name), )*
                    _ => Err(ParseOpcodeError {
                        mnemonic: s.to_owned(),
                    }),
                }
            }
        }
    };
}

opcodes! {
    Ldi, "ldi", 0 / 1;
    Ent, "ent", 1 / 2;
    Psh, "psh", 1 / 3;
    New, "new", 2 / 3;
    Mli, "mli", 1 / 4;
    Siz, "siz", 3 / 4;
    Dup, "dup", 1 / 5;
    Bge, "bge", 2 / 5;
    Std, "std", 3 / 5;
    Num, "num", 4 / 5;
    Sub, "sub", 1 / 6;
    Inv, "inv", 5 / 6;
    Ldd, "ldd", 1 / 7;
    Pul, "pul", 2 / 7;
    Adi, "adi", 3 / 7;
    Fdi, "fdi", 4 / 7;
    Add, "add", 5 / 7;
    Swp, "swp", 6 / 7;
    Mul, "mul", 1 / 8;
    Neg, "neg", 3 / 8;
    Str, "str", 5 / 8;
    Stl, "stl", 7 / 8;
    Div, "div", 1 / 9;
    Mod, "mod", 2 / 9;
    Del, "del", 4 / 9;
    Bgt, "bgt", 5 / 9;
    Hcf, "hcf", 7 / 9;
    Ret, "ret", 8 / 9;
    Ble, "ble", 1 / 10;
    Bne, "bne", 3 / 10;
    Bal, "bal", 7 / 10;
    Beq, "beq", 9 / 10;
    Ldl, "ldl", 1 / 11;
    Dis, "dis", 2 / 11;
    Blt, "blt", 3 / 11;
    Cls, "cls", 4 / 11;
    Cal, "cal", 5 / 11;
    Den, "den", 6 / 11;
    Ldr, "ldr", 7 / 11;
    Lds, "lds", 8 / 11;
    Put, "put", 9 / 11;
    Get, "get", 10 / 11;
    Tel, "tel", 1 / 12;
    Inc, "inc", 5 / 12;
    Dec, "dec", 7 / 12;
    Sts, "sts", 11 / 12;
}

impl Opcode {
    /// Looks up the opcode selected by a proper fraction.
    pub fn from_value(value: &Q) -> Option<Opcode> {
        rational::fraction_index(value).and_then(Opcode::from_usize)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
