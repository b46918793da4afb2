use std::io::Write;

use crate::errors::SyscallError;
use crate::memory::{MemTracker, Memory};
use crate::oracle::{HintSink, PreimageReader};
use crate::syscalls::constants::{F_GETFL, MIPS_EBADF, MIPS_EINVAL, SYS_ERROR_SIGNAL};
use crate::syscalls::fd::FileDescriptor;
use crate::syscalls::hint::HintBuffer;
use crate::syscalls::preimage::PreimageStream;

const BAD_FD: (u64, u64) = (SYS_ERROR_SIGNAL, MIPS_EBADF);

/// `read(fd, addr, count)`. Returns `(bytes read, errno)`.
///
/// Stdin is always empty. Hint responses are never materialized; the program is told it got
/// all it asked for.
pub fn handle_sys_read<R: PreimageReader + ?Sized>(
    fd: u64,
    addr: u64,
    count: u64,
    preimage: &mut PreimageStream,
    reader: &mut R,
    memory: &mut dyn Memory,
    tracker: &mut dyn MemTracker,
) -> Result<(u64, u64), SyscallError> {
    let result = match FileDescriptor::try_from(fd) {
        Ok(FileDescriptor::Stdin) => (0, 0),
        Ok(FileDescriptor::PreimageRead) => {
            let n = preimage.read(addr, count, reader, memory, tracker)?;
            (n, 0)
        }
        Ok(FileDescriptor::HintRead) => (count, 0),
        _ => BAD_FD,
    };
    Ok(result)
}

/// `write(fd, addr, count)`. Returns `(bytes written, errno)`.
pub fn handle_sys_write<S: HintSink + ?Sized>(
    fd: u64,
    addr: u64,
    count: u64,
    last_hint: &mut HintBuffer,
    preimage: &mut PreimageStream,
    sink: &mut S,
    memory: &dyn Memory,
    tracker: &mut dyn MemTracker,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> (u64, u64) {
    match FileDescriptor::try_from(fd) {
        Ok(FileDescriptor::Stdout) => {
            copy_to_sink(memory, addr, count, stdout, "stdout");
            (count, 0)
        }
        Ok(FileDescriptor::Stderr) => {
            copy_to_sink(memory, addr, count, stderr, "stderr");
            (count, 0)
        }
        Ok(FileDescriptor::HintWrite) => {
            let data = memory.read_memory_range(addr, count);
            last_hint.write(&data, sink);
            (count, 0)
        }
        Ok(FileDescriptor::PreimageWrite) => {
            let n = preimage.write_key(addr, count, memory, tracker);
            (n, 0)
        }
        _ => BAD_FD,
    }
}

/// Output sinks are observable but not part of the proven state, so a failing sink does not
/// change the result of the step.
fn copy_to_sink(memory: &dyn Memory, addr: u64, count: u64, out: &mut dyn Write, name: &str) {
    let data = memory.read_memory_range(addr, count);
    if let Err(e) = out.write_all(&data) {
        log::warn!("failed to copy {} bytes to {}: {}", count, name, e);
    }
}

/// `fcntl(fd, cmd)`. Only `F_GETFL` is modeled.
pub fn handle_sys_fcntl(fd: u64, cmd: u64) -> (u64, u64) {
    if cmd != F_GETFL {
        return (SYS_ERROR_SIGNAL, MIPS_EINVAL);
    }
    match FileDescriptor::try_from(fd) {
        Ok(fd) => (fd.open_flags(), 0),
        Err(_) => BAD_FD,
    }
}
