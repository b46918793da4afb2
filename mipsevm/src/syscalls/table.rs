use hashbrown::HashSet;

use crate::config::SyscallConfig;
use crate::errors::SyscallError;
use crate::syscalls::constants::*;

/// Syscalls with real semantics. Some of them are only classified here and handled by the
/// external thread scheduler; see [`Syscall::is_external`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Syscall {
    Mmap,
    Munmap,
    Brk,
    Clone,
    ExitGroup,
    Read,
    Write,
    Fcntl,
    Exit,
    SchedYield,
    GetTid,
    Futex,
    Open,
    Nanosleep,
}

impl Syscall {
    pub fn from_number(num: u64) -> Option<Self> {
        match num {
            SYS_MMAP => Some(Syscall::Mmap),
            SYS_MUNMAP => Some(Syscall::Munmap),
            SYS_BRK => Some(Syscall::Brk),
            SYS_CLONE => Some(Syscall::Clone),
            SYS_EXIT_GROUP => Some(Syscall::ExitGroup),
            SYS_READ => Some(Syscall::Read),
            SYS_WRITE => Some(Syscall::Write),
            SYS_FCNTL => Some(Syscall::Fcntl),
            SYS_EXIT => Some(Syscall::Exit),
            SYS_SCHED_YIELD => Some(Syscall::SchedYield),
            SYS_GETTID => Some(Syscall::GetTid),
            SYS_FUTEX => Some(Syscall::Futex),
            SYS_OPEN => Some(Syscall::Open),
            SYS_NANOSLEEP => Some(Syscall::Nanosleep),
            _ => None,
        }
    }

    pub const fn number(self) -> u64 {
        match self {
            Syscall::Mmap => SYS_MMAP,
            Syscall::Munmap => SYS_MUNMAP,
            Syscall::Brk => SYS_BRK,
            Syscall::Clone => SYS_CLONE,
            Syscall::ExitGroup => SYS_EXIT_GROUP,
            Syscall::Read => SYS_READ,
            Syscall::Write => SYS_WRITE,
            Syscall::Fcntl => SYS_FCNTL,
            Syscall::Exit => SYS_EXIT,
            Syscall::SchedYield => SYS_SCHED_YIELD,
            Syscall::GetTid => SYS_GETTID,
            Syscall::Futex => SYS_FUTEX,
            Syscall::Open => SYS_OPEN,
            Syscall::Nanosleep => SYS_NANOSLEEP,
        }
    }

    /// Whether the semantics belong to the thread scheduler rather than this crate.
    pub const fn is_external(self) -> bool {
        matches!(
            self,
            Syscall::Clone
                | Syscall::Exit
                | Syscall::ExitGroup
                | Syscall::Futex
                | Syscall::SchedYield
                | Syscall::Nanosleep
                | Syscall::GetTid
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyscallClass {
    Emulated(Syscall),
    /// Succeeds with `(0, 0)` and no other effect.
    Noop,
    /// Not modeled. Executing it is fatal to the step.
    Unsupported,
}

/// Static classification of syscall numbers. The no-op list is data so that a different
/// target runtime can supply its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyscallTable {
    noops: HashSet<u64>,
}

impl Default for SyscallTable {
    fn default() -> Self {
        Self::new(&SyscallConfig::default())
    }
}

impl SyscallTable {
    pub fn new(config: &SyscallConfig) -> Self {
        Self::with_noops(config.noop_syscalls.iter().copied())
    }

    pub fn with_noops<I: IntoIterator<Item = u64>>(noops: I) -> Self {
        Self {
            noops: noops.into_iter().collect(),
        }
    }

    /// Emulated numbers take precedence over no-op entries.
    pub fn classify(&self, num: u64) -> SyscallClass {
        if let Some(syscall) = Syscall::from_number(num) {
            SyscallClass::Emulated(syscall)
        } else if self.noops.contains(&num) {
            SyscallClass::Noop
        } else {
            SyscallClass::Unsupported
        }
    }

    pub fn is_noop(&self, num: u64) -> bool {
        matches!(self.classify(num), SyscallClass::Noop)
    }
}

/// Only the exact flag set used for runtime thread creation is accepted.
pub fn check_clone_flags(flags: u64) -> Result<(), SyscallError> {
    if flags == VALID_CLONE_FLAGS {
        Ok(())
    } else {
        Err(SyscallError::InvalidCloneFlags(flags))
    }
}
