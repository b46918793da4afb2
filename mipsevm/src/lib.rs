#![allow(clippy::too_many_arguments)]

pub mod config;
pub mod errors;
pub mod memory;
pub mod oracle;
pub mod state;
pub mod syscalls;
pub mod util;

pub use config::SyscallConfig;
pub use errors::SyscallError;
pub use state::{CpuScalars, SyscallState};
pub use syscalls::dispatch::{handle_syscall, SyscallContext, SyscallOutcome};
pub use syscalls::table::SyscallTable;
