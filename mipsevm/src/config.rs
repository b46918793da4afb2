use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::syscalls::constants::{BRK_START, GO_RUNTIME_NOOP_SYSCALLS, PAGE_SIZE};

/// Parameters of the syscall model that an embedder may need to change for a different target
/// runtime.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SyscallConfig {
    /// Granularity `mmap` lengths are rounded up to. Must be a power of two.
    pub page_size: u64,

    /// Program break reported by `brk`.
    pub brk_start: u64,

    /// Initial heap pointer for a fresh [`crate::SyscallState`].
    pub heap_start: u64,

    /// Syscall numbers that succeed with `(0, 0)` without any effect.
    pub noop_syscalls: Vec<u64>,
}

impl Default for SyscallConfig {
    fn default() -> Self {
        Self::go_runtime_config()
    }
}

impl SyscallConfig {
    /// The configuration matching the syscalls issued by the Go runtime on MIPS64.
    pub fn go_runtime_config() -> Self {
        Self {
            page_size: PAGE_SIZE,
            brk_start: BRK_START,
            heap_start: 0x20_0000_0000,
            noop_syscalls: GO_RUNTIME_NOOP_SYSCALLS.to_vec(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("failed to parse syscall config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.page_size.is_power_of_two(),
            "page size must be a nonzero power of two, got {}",
            self.page_size
        );
        Ok(())
    }
}
