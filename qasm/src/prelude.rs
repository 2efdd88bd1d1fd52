use num::BigInt;
use qvm::{constants, Opcode, RegisterId, Q};
use std::collections::HashMap;

/// The built-in symbols every program starts from: register indices,
/// every opcode mnemonic, and the standard stream handles.
pub fn symbols() -> HashMap<String, Q> {
    let mut symbols = HashMap::new();

    let mut define = |name: &str, value: Q| {
        symbols.insert(name.to_owned(), value);
    };

    define("pr", integer(RegisterId::PR as i64));
    define("dr", integer(RegisterId::DR as i64));
    define("cr", integer(RegisterId::CR as i64));

    for &opcode in Opcode::ALL {
        define(opcode.mnemonic(), opcode.value());
    }

    // `pop` is the traditional spelling of `dis`.
    define("pop", Opcode::Dis.value());

    define("stdin", integer(constants::STDIN));
    define("stdout", integer(constants::STDOUT));
    define("stderr", integer(constants::STDERR));

    symbols
}

fn integer(value: i64) -> Q {
    Q::from_integer(BigInt::from(value))
}
