use std::io::Write;

use crate::config::SyscallConfig;
use crate::errors::SyscallError;
use crate::memory::{MemTracker, Memory};
use crate::oracle::PreimageChannel;
use crate::state::SyscallState;
use crate::syscalls::args::{handle_syscall_updates, SyscallArgs};
use crate::syscalls::constants::{MIPS_EBADF, SYS_ERROR_SIGNAL};
use crate::syscalls::io::{handle_sys_fcntl, handle_sys_read, handle_sys_write};
use crate::syscalls::mmap::handle_sys_mmap;
use crate::syscalls::table::{check_clone_flags, Syscall, SyscallClass, SyscallTable};

/// The collaborators a syscall step may touch.
pub struct SyscallContext<'a> {
    pub memory: &'a mut dyn Memory,
    pub tracker: &'a mut dyn MemTracker,
    pub preimages: &'a mut dyn PreimageChannel,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    pub page_size: u64,
    pub brk_start: u64,
}

impl<'a> SyscallContext<'a> {
    pub fn new(
        config: &SyscallConfig,
        memory: &'a mut dyn Memory,
        tracker: &'a mut dyn MemTracker,
        preimages: &'a mut dyn PreimageChannel,
        stdout: &'a mut dyn Write,
        stderr: &'a mut dyn Write,
    ) -> Self {
        Self {
            memory,
            tracker,
            preimages,
            stdout,
            stderr,
            page_size: config.page_size,
            brk_start: config.brk_start,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyscallOutcome {
    /// The syscall ran here; results were written back and the PC advanced.
    Handled { v0: u64, v1: u64 },
    /// The syscall belongs to the thread scheduler. Nothing was written back and the PC did
    /// not move.
    External { syscall: Syscall, args: SyscallArgs },
}

/// Executes the syscall instruction at the current PC.
///
/// On error the [`SyscallState`] is left as it was. Unsupported numbers and invalid clone
/// flags are rejected before any collaborator is touched.
pub fn handle_syscall(
    state: &mut SyscallState,
    table: &SyscallTable,
    ctx: &mut SyscallContext,
) -> Result<SyscallOutcome, SyscallError> {
    let args = SyscallArgs::from_registers(&state.registers);
    let SyscallArgs { num, a0, a1, a2, .. } = args;

    let syscall = match table.classify(num) {
        SyscallClass::Emulated(syscall) => syscall,
        SyscallClass::Noop => {
            log::trace!("no-op syscall {}", num);
            return Ok(apply(state, 0, 0));
        }
        SyscallClass::Unsupported => {
            log::warn!("unsupported syscall {} at pc {:#x}", num, state.cpu.pc);
            return Err(SyscallError::UnsupportedSyscall(num));
        }
    };

    if syscall.is_external() {
        if syscall == Syscall::Clone {
            check_clone_flags(a0)?;
        }
        log::trace!("deferring {:?} to the scheduler", syscall);
        return Ok(SyscallOutcome::External { syscall, args });
    }

    log::trace!("syscall {:?} a0={:#x} a1={:#x} a2={:#x}", syscall, a0, a1, a2);
    let (v0, v1) = match syscall {
        Syscall::Mmap => {
            let (v0, v1, new_heap) = handle_sys_mmap(a0, a1, state.heap, ctx.page_size);
            state.heap = new_heap;
            (v0, v1)
        }
        Syscall::Munmap => (0, 0),
        Syscall::Brk => (ctx.brk_start, 0),
        Syscall::Read => handle_sys_read(
            a0,
            a1,
            a2,
            &mut state.preimage,
            &mut *ctx.preimages,
            &mut *ctx.memory,
            &mut *ctx.tracker,
        )?,
        Syscall::Write => handle_sys_write(
            a0,
            a1,
            a2,
            &mut state.last_hint,
            &mut state.preimage,
            &mut *ctx.preimages,
            &*ctx.memory,
            &mut *ctx.tracker,
            &mut *ctx.stdout,
            &mut *ctx.stderr,
        ),
        Syscall::Fcntl => handle_sys_fcntl(a0, a1),
        Syscall::Open => (SYS_ERROR_SIGNAL, MIPS_EBADF),
        Syscall::Clone
        | Syscall::Exit
        | Syscall::ExitGroup
        | Syscall::Futex
        | Syscall::SchedYield
        | Syscall::Nanosleep
        | Syscall::GetTid => unreachable!("external syscalls return early"),
    };

    Ok(apply(state, v0, v1))
}

fn apply(state: &mut SyscallState, v0: u64, v1: u64) -> SyscallOutcome {
    handle_syscall_updates(&mut state.cpu, &mut state.registers, v0, v1);
    SyscallOutcome::Handled { v0, v1 }
}
