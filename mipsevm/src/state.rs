use serde::{Deserialize, Serialize};

use crate::config::SyscallConfig;
use crate::syscalls::hint::HintBuffer;
use crate::syscalls::preimage::PreimageStream;

/// Width of one MIPS instruction; the PC pair advances by this after every syscall.
pub const INSTRUCTION_SIZE: u64 = 4;

/// The program-counter pair modeling the branch-delay slot, plus the multiply/divide
/// result registers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CpuScalars {
    pub pc: u64,
    pub next_pc: u64,
    pub lo: u64,
    pub hi: u64,
}

impl CpuScalars {
    pub fn new(entry: u64) -> Self {
        Self {
            pc: entry,
            next_pc: entry.wrapping_add(INSTRUCTION_SIZE),
            lo: 0,
            hi: 0,
        }
    }

    /// `pc <- next_pc; next_pc <- next_pc + 4`.
    pub fn advance(&mut self) {
        self.pc = self.next_pc;
        self.next_pc = self.next_pc.wrapping_add(INSTRUCTION_SIZE);
    }
}

/// Everything a syscall step reads or writes besides memory and the external sinks.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SyscallState {
    pub cpu: CpuScalars,
    pub registers: [u64; 32],
    /// Next address handed out by an unhinted `mmap`.
    pub heap: u64,
    pub preimage: PreimageStream,
    pub last_hint: HintBuffer,
}

impl SyscallState {
    pub fn new(entry: u64, heap_start: u64) -> Self {
        Self {
            cpu: CpuScalars::new(entry),
            heap: heap_start,
            ..Default::default()
        }
    }

    /// A fresh state whose heap starts at `config.heap_start`.
    pub fn from_config(entry: u64, config: &SyscallConfig) -> Self {
        Self::new(entry, config.heap_start)
    }
}
