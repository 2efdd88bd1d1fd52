use crate::stream::Handle;

/// Handle of the standard input stream.
pub const STDIN: Handle = 0;

/// Handle of the standard output stream.
pub const STDOUT: Handle = 1;

/// Handle of the standard error stream.
pub const STDERR: Handle = 2;

/// Number of machine registers (`PR`, `DR`, `CR`).
pub const REGISTER_COUNT: usize = 3;
