use crate::constants;
use crate::error::Error;
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::rational::{self, Q};
use crate::stream::{Handle, StreamTable};
use num::{BigInt, One, ToPrimitive, Zero};
use num_derive::{FromPrimitive, ToPrimitive};
use tracing::{debug, trace};

mod ops;

/// The machine registers. All of them hold full rational addresses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, FromPrimitive, ToPrimitive)]
pub enum RegisterId {
    /// Program register: address of the next instruction.
    PR,
    /// Data register: one past the top of the data stack.
    DR,
    /// Call register: one past the top of the call stack.
    CR,
}

#[inline]
pub(crate) fn register_index(id: RegisterId) -> usize {
    id as usize
}

/// Result of a single [`Process::run`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The program executed a halt instruction.
    Terminated,
    /// The program read an empty open stream; the host may supply
    /// input and call `run` again to retry the same instruction.
    Blocked,
    /// The program read an empty closed stream.
    Closed,
}

/// Per-step control flow, as returned by the operation handlers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Blocked,
    Closed,
    Terminated,
}

/// A single-threaded process: registers, a fraction-keyed memory, and
/// a stream table. Each process owns all of its state; dropping the
/// process releases everything.
pub struct Process {
    registers: [Q; constants::REGISTER_COUNT],
    memory: Memory,
    streams: StreamTable,
}

impl Process {
    /// Creates a process with an empty argument vector.
    pub fn new(image: &[Q]) -> Process {
        Process::with_argv(image, &[])
    }

    /// Creates a process from a program image and an argument vector.
    ///
    /// The image is loaded at the static key `0` and `PR` starts at
    /// offset 0. The data and call stacks get fresh arrays. Each
    /// argument is marshalled as a NUL-terminated array of codepoints;
    /// the array of argument keys is the sole starting value on the
    /// data stack, and its length is the argument count.
    pub fn with_argv(image: &[Q], argv: &[&str]) -> Process {
        let mut memory = Memory::new();
        memory.extend_static(image.iter().cloned());

        let data = memory.alloc(0);
        let call = memory.alloc(0);
        let argv_base = memory.alloc(0);

        for arg in argv {
            let arg_base = memory.alloc(0);

            for c in arg.chars() {
                append(&mut memory, &arg_base, rational::from_char(c));
            }

            append(&mut memory, &arg_base, Q::zero());
            append(&mut memory, &argv_base, arg_base);
        }

        let mut process = Process {
            registers: [Q::zero(), data, call],
            memory,
            streams: StreamTable::new(),
        };

        process
            .push_data(argv_base)
            .expect("the initial data stack is live");

        debug!(image_len = image.len(), argc = argv.len(), "created process");
        process
    }

    /// Runs until the program halts, blocks on input, or reads past
    /// end-of-file. Blocked and closed runs may be resumed; the
    /// blocking instruction is retried in full.
    pub fn run(&mut self) -> Result<Outcome, Error> {
        loop {
            match self.step()? {
                Flow::Continue => {}
                Flow::Blocked => {
                    debug!("run blocked on input");
                    return Ok(Outcome::Blocked);
                }
                Flow::Closed => {
                    debug!("run reached end of input");
                    return Ok(Outcome::Closed);
                }
                Flow::Terminated => {
                    debug!("run terminated");
                    return Ok(Outcome::Terminated);
                }
            }
        }
    }

    /// Fetches, decodes and dispatches one instruction.
    ///
    /// On anything but [`Flow::Continue`], `PR` is restored so the
    /// same instruction is fetched again on re-entry.
    fn step(&mut self) -> Result<Flow, Error> {
        let at = self.registers[register_index(RegisterId::PR)].clone();
        let word = self.memory.read(&at)?;
        self.registers[register_index(RegisterId::PR)] = at.clone() + Q::one();

        let (operand, fraction) = rational::divmod(&word);
        let opcode =
            Opcode::from_value(&fraction).ok_or_else(|| Error::UnknownOpcode(word.clone()))?;

        trace!(at = %at, opcode = %opcode, operand = %operand, "step");

        let flow = ops::dispatch(self, opcode, &operand)?;

        if flow != Flow::Continue {
            self.registers[register_index(RegisterId::PR)] = at;
        }

        Ok(flow)
    }

    /// The current value of a register.
    pub fn register(&self, id: RegisterId) -> &Q {
        &self.registers[register_index(id)]
    }

    /// The process memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Pushes a value onto the data stack.
    pub fn push_data(&mut self, value: Q) -> Result<(), Error> {
        let top = self.registers[register_index(RegisterId::DR)].clone();
        self.memory.push(&top, value)?;
        self.registers[register_index(RegisterId::DR)] = top + Q::one();
        Ok(())
    }

    /// Pops the top of the data stack.
    pub fn pop_data(&mut self) -> Result<Q, Error> {
        let top = self.registers[register_index(RegisterId::DR)].clone();
        let value = self.memory.pop(&top)?;
        self.registers[register_index(RegisterId::DR)] = top - Q::one();
        Ok(value)
    }

    /// Pushes a value onto the call stack.
    pub fn push_call(&mut self, value: Q) -> Result<(), Error> {
        let top = self.registers[register_index(RegisterId::CR)].clone();
        self.memory.push(&top, value)?;
        self.registers[register_index(RegisterId::CR)] = top + Q::one();
        Ok(())
    }

    /// Pops the top of the call stack.
    pub fn pop_call(&mut self) -> Result<Q, Error> {
        let top = self.registers[register_index(RegisterId::CR)].clone();
        let value = self.memory.pop(&top)?;
        self.registers[register_index(RegisterId::CR)] = top - Q::one();
        Ok(value)
    }

    /// Enqueues the codepoints of `text` on a stream.
    pub fn write(&mut self, handle: Handle, text: &str) {
        for c in text.chars() {
            self.streams.enqueue(handle, rational::from_char(c));
        }
    }

    /// Drains a stream into a string, converting each value through
    /// the codepoint of its floor.
    pub fn read(&mut self, handle: Handle) -> String {
        let mut text = String::new();

        while let Ok(value) = self.streams.dequeue(handle) {
            text.push(rational::to_char(&value));
        }

        text
    }

    /// Like [`read`](Process::read), but stops after the first newline.
    pub fn read_line(&mut self, handle: Handle) -> String {
        let mut text = String::new();

        while let Ok(value) = self.streams.dequeue(handle) {
            let c = rational::to_char(&value);
            text.push(c);

            if c == '\n' {
                break;
            }
        }

        text
    }

    /// Closes a stream; the program observes end-of-file once the
    /// queued values drain.
    pub fn close(&mut self, handle: Handle) {
        self.streams.close(handle);
    }

    /// Number of values queued on a stream.
    pub fn stream_len(&self, handle: Handle) -> usize {
        self.streams.len(handle)
    }

    /// Whether the next instruction is the halt opcode.
    pub fn is_halted(&self) -> bool {
        self.peek_opcode() == Some(Opcode::Hcf)
    }

    /// Whether the next instruction is a stream read that would block.
    pub fn is_blocked(&self) -> bool {
        if self.peek_opcode() != Some(Opcode::Get) {
            return false;
        }

        let top = self.register(RegisterId::DR) - Q::one();

        match self.memory.read(&top).map(|value| rational::floor(&value)) {
            Ok(handle) => match handle.to_i64() {
                Some(handle) => {
                    self.streams.len(handle) == 0 && !self.streams.is_closed(handle)
                }
                None => false,
            },
            Err(_) => false,
        }
    }

    fn peek_opcode(&self) -> Option<Opcode> {
        let word = self.memory.read(self.register(RegisterId::PR)).ok()?;
        Opcode::from_value(&rational::divmod(&word).1)
    }
}

fn append(memory: &mut Memory, base: &Q, value: Q) {
    memory
        .push(base, value)
        .expect("freshly allocated arrays are live");
}

pub(crate) fn integer(value: &BigInt) -> Q {
    Q::from_integer(value.clone())
}
