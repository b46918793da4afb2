use core::fmt;

/// Failures that abort a syscall step. Everything the emulated program can recover from is
/// reported through the `(v0, v1)` registers instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyscallError {
    /// The number is neither emulated nor listed as a no-op.
    UnsupportedSyscall(u64),
    /// `clone` was issued with a flag combination other than the runtime's thread flags.
    InvalidCloneFlags(u64),
    /// The program read past the end of the length-prefixed preimage stream.
    PreimageOffsetOutOfBounds { offset: u64, len: u64 },
}

impl fmt::Display for SyscallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SyscallError::UnsupportedSyscall(num) => write!(f, "unsupported syscall: {}", num),
            SyscallError::InvalidCloneFlags(flags) => {
                write!(f, "unsupported clone flags: {:#x}", flags)
            }
            SyscallError::PreimageOffsetOutOfBounds { offset, len } => write!(
                f,
                "preimage offset {} out of bounds for stream of {} bytes",
                offset, len
            ),
        }
    }
}

impl std::error::Error for SyscallError {}
