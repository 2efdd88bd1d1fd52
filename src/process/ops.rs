//! One handler per opcode. Every handler has the same shape: it takes
//! the process and the integer operand, mutates registers, memory and
//! streams, and reports how control should flow.

use super::{integer, register_index, Flow, Process, RegisterId};
use crate::constants;
use crate::error::Error;
use crate::opcode::Opcode;
use crate::rational::{self, Q};
use crate::stream::{Handle, Wait};
use num::{BigInt, One, Signed, ToPrimitive, Zero};

pub(super) fn dispatch(
    process: &mut Process,
    opcode: Opcode,
    operand: &BigInt,
) -> Result<Flow, Error> {
    match opcode {
        Opcode::Add => add(process, operand),
        Opcode::Sub => sub(process, operand),
        Opcode::Mul => mul(process, operand),
        Opcode::Div => div(process, operand),
        Opcode::Mod => modulo(process, operand),
        Opcode::Neg => neg(process, operand),
        Opcode::Inv => inv(process, operand),
        Opcode::Num => num(process, operand),
        Opcode::Den => den(process, operand),
        Opcode::Inc => inc(process, operand),
        Opcode::Dec => dec(process, operand),
        Opcode::Adi => adi(process, operand),
        Opcode::Mli => mli(process, operand),
        Opcode::Fdi => fdi(process, operand),
        Opcode::Ldi => ldi(process, operand),
        Opcode::Dup => dup(process, operand),
        Opcode::Swp => swp(process, operand),
        Opcode::Dis => dis(process, operand),
        Opcode::Bal => bal(process, operand),
        Opcode::Beq => beq(process, operand),
        Opcode::Bne => bne(process, operand),
        Opcode::Blt => blt(process, operand),
        Opcode::Ble => ble(process, operand),
        Opcode::Bgt => bgt(process, operand),
        Opcode::Bge => bge(process, operand),
        Opcode::Cal => cal(process, operand),
        Opcode::Cls => cls(process, operand),
        Opcode::Ret => ret(process, operand),
        Opcode::Ent => ent(process, operand),
        Opcode::Ldl => ldl(process, operand),
        Opcode::Stl => stl(process, operand),
        Opcode::Lds => lds(process, operand),
        Opcode::Sts => sts(process, operand),
        Opcode::Ldd => ldd(process, operand),
        Opcode::Std => std(process, operand),
        Opcode::Ldr => ldr(process, operand),
        Opcode::Str => str(process, operand),
        Opcode::New => new(process, operand),
        Opcode::Del => del(process, operand),
        Opcode::Siz => siz(process, operand),
        Opcode::Psh => psh(process, operand),
        Opcode::Pul => pul(process, operand),
        Opcode::Get => get(process, operand),
        Opcode::Put => put(process, operand),
        Opcode::Tel => tel(process, operand),
        Opcode::Hcf => hcf(process, operand),
    }
}

/// Converts an operand that must be a non-negative count.
fn count(operand: &BigInt) -> Result<usize, Error> {
    operand
        .to_usize()
        .ok_or_else(|| Error::InvalidOperand(operand.clone()))
}

/// Converts an operand that must name a register.
fn register(operand: &BigInt) -> Result<usize, Error> {
    operand
        .to_usize()
        .filter(|&index| index < constants::REGISTER_COUNT)
        .ok_or_else(|| Error::InvalidRegister(operand.clone()))
}

/// Converts a popped value into a stream handle via its floor.
fn handle(value: &Q) -> Result<Handle, Error> {
    rational::floor(value)
        .to_i64()
        .ok_or_else(|| Error::InvalidHandle(value.clone()))
}

fn set_program(process: &mut Process, target: Q) {
    process.registers[register_index(RegisterId::PR)] = target;
}

fn local_address(process: &Process, operand: &BigInt) -> Q {
    let top = process.register(RegisterId::CR);
    top - Q::one() - integer(operand)
}

fn add(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let right = process.pop_data()?;
    let left = process.pop_data()?;

    process.push_data(left + right)?;
    Ok(Flow::Continue)
}

fn sub(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let right = process.pop_data()?;
    let left = process.pop_data()?;

    process.push_data(left - right)?;
    Ok(Flow::Continue)
}

fn mul(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let right = process.pop_data()?;
    let left = process.pop_data()?;

    process.push_data(left * right)?;
    Ok(Flow::Continue)
}

fn div(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let right = process.pop_data()?;
    let left = process.pop_data()?;

    if right.is_zero() {
        return Err(Error::DivisionByZero);
    }

    process.push_data(left / right)?;
    Ok(Flow::Continue)
}

fn modulo(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let right = process.pop_data()?;
    let left = process.pop_data()?;

    let value = rational::modulo(&left, &right).ok_or(Error::DivisionByZero)?;
    process.push_data(value)?;
    Ok(Flow::Continue)
}

fn neg(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;
    process.push_data(-value)?;
    Ok(Flow::Continue)
}

fn inv(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;

    if value.is_zero() {
        return Err(Error::DivisionByZero);
    }

    process.push_data(value.recip())?;
    Ok(Flow::Continue)
}

fn num(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;
    process.push_data(Q::from_integer(value.numer().clone()))?;
    Ok(Flow::Continue)
}

fn den(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;
    process.push_data(Q::from_integer(value.denom().clone()))?;
    Ok(Flow::Continue)
}

fn inc(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;
    process.push_data(value + Q::one())?;
    Ok(Flow::Continue)
}

fn dec(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;
    process.push_data(value - Q::one())?;
    Ok(Flow::Continue)
}

fn adi(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;
    process.push_data(value + integer(operand))?;
    Ok(Flow::Continue)
}

fn mli(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;
    process.push_data(value * integer(operand))?;
    Ok(Flow::Continue)
}

fn fdi(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;

    let quotient =
        rational::floor_div(&value, &integer(operand)).ok_or(Error::DivisionByZero)?;
    process.push_data(quotient)?;
    Ok(Flow::Continue)
}

fn ldi(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    process.push_data(integer(operand))?;
    Ok(Flow::Continue)
}

/// Pushes a copy of the value `operand` cells below the stack top.
fn dup(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let depth = count(operand)?;
    let address =
        process.register(RegisterId::DR) - Q::one() - Q::from_integer(BigInt::from(depth));

    let value = process.memory.read(&address)?;
    process.push_data(value)?;
    Ok(Flow::Continue)
}

fn swp(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let a = process.pop_data()?;
    let b = process.pop_data()?;

    process.push_data(a)?;
    process.push_data(b)?;
    Ok(Flow::Continue)
}

fn dis(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    process.pop_data()?;
    Ok(Flow::Continue)
}

fn bal(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    set_program(process, integer(operand));
    Ok(Flow::Continue)
}

fn beq(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    if process.pop_data()?.is_zero() {
        set_program(process, integer(operand));
    }

    Ok(Flow::Continue)
}

fn bne(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    if !process.pop_data()?.is_zero() {
        set_program(process, integer(operand));
    }

    Ok(Flow::Continue)
}

fn blt(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    if process.pop_data()?.is_negative() {
        set_program(process, integer(operand));
    }

    Ok(Flow::Continue)
}

fn ble(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    if !process.pop_data()?.is_positive() {
        set_program(process, integer(operand));
    }

    Ok(Flow::Continue)
}

fn bgt(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    if process.pop_data()?.is_positive() {
        set_program(process, integer(operand));
    }

    Ok(Flow::Continue)
}

fn bge(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    if !process.pop_data()?.is_negative() {
        set_program(process, integer(operand));
    }

    Ok(Flow::Continue)
}

fn cal(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let target = process.pop_data()?;
    let link = process.register(RegisterId::PR).clone();

    process.push_call(link)?;
    set_program(process, target);
    Ok(Flow::Continue)
}

fn cls(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let link = process.register(RegisterId::PR).clone();

    process.push_call(link)?;
    set_program(process, integer(operand));
    Ok(Flow::Continue)
}

/// Releases `operand` frame cells, then pops the return address.
fn ret(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    for _ in 0..count(operand)? {
        process.pop_call()?;
    }

    let target = process.pop_call()?;
    set_program(process, target);
    Ok(Flow::Continue)
}

/// Reserves `operand` zeroed frame cells on the call stack.
fn ent(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    for _ in 0..count(operand)? {
        process.push_call(Q::zero())?;
    }

    Ok(Flow::Continue)
}

fn ldl(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let address = local_address(process, operand);
    let value = process.memory.read(&address)?;

    process.push_data(value)?;
    Ok(Flow::Continue)
}

fn stl(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let address = local_address(process, operand);
    let value = process.pop_data()?;

    process.memory.write(&address, value)?;
    Ok(Flow::Continue)
}

fn lds(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let value = process.memory.read(&integer(operand))?;
    process.push_data(value)?;
    Ok(Flow::Continue)
}

fn sts(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;
    process.memory.write(&integer(operand), value)?;
    Ok(Flow::Continue)
}

fn ldd(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let address = process.pop_data()? + integer(operand);
    let value = process.memory.read(&address)?;

    process.push_data(value)?;
    Ok(Flow::Continue)
}

fn std(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let address = process.pop_data()? + integer(operand);
    let value = process.pop_data()?;

    process.memory.write(&address, value)?;
    Ok(Flow::Continue)
}

fn ldr(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let value = process.registers[register(operand)?].clone();
    process.push_data(value)?;
    Ok(Flow::Continue)
}

fn str(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let value = process.pop_data()?;
    process.registers[register(operand)?] = value;
    Ok(Flow::Continue)
}

fn new(process: &mut Process, operand: &BigInt) -> Result<Flow, Error> {
    let size = count(operand)?;
    let base = process.memory.alloc(size);

    process.push_data(base)?;
    Ok(Flow::Continue)
}

fn del(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let base = process.pop_data()?;
    process.memory.delete(&base)?;
    Ok(Flow::Continue)
}

fn siz(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let base = process.pop_data()?;
    let size = process.memory.size(&base)?;

    process.push_data(Q::from_integer(BigInt::from(size)))?;
    Ok(Flow::Continue)
}

fn psh(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let base = process.pop_data()?;
    let value = process.pop_data()?;

    process.memory.push(&base, value)?;
    Ok(Flow::Continue)
}

fn pul(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let base = process.pop_data()?;
    let value = process.memory.pop(&base)?;

    process.push_data(value)?;
    Ok(Flow::Continue)
}

/// Dequeues one value from the stream named by the top of the data
/// stack. The handle is only consumed when a value is available, so a
/// blocked or closed read can be retried as-is after the host
/// intervenes.
fn get(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let top = process.register(RegisterId::DR) - Q::one();
    let handle = handle(&process.memory.read(&top)?)?;

    match process.streams.dequeue(handle) {
        Ok(value) => {
            process.pop_data()?;
            process.push_data(value)?;
            Ok(Flow::Continue)
        }
        Err(Wait::Blocked) => Ok(Flow::Blocked),
        Err(Wait::Closed) => Ok(Flow::Closed),
    }
}

fn put(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let handle = handle(&process.pop_data()?)?;
    let value = process.pop_data()?;

    process.streams.enqueue(handle, value);
    Ok(Flow::Continue)
}

fn tel(process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    let handle = handle(&process.pop_data()?)?;
    let len = process.streams.len(handle);

    process.push_data(Q::from_integer(BigInt::from(len)))?;
    Ok(Flow::Continue)
}

fn hcf(_process: &mut Process, _operand: &BigInt) -> Result<Flow, Error> {
    Ok(Flow::Terminated)
}
