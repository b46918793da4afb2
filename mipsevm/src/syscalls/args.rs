use crate::state::CpuScalars;

/// Register holding the syscall number on entry and the result value on return (`v0`).
pub const REG_SYSCALL_NUM: usize = 2;
/// First argument register (`a0`); `a1..a3` follow.
pub const REG_ARG0: usize = 4;
/// Result value register (`v0`).
pub const REG_RESULT: usize = 2;
/// Error register (`a3`). Zero on success.
pub const REG_ERRNO: usize = 7;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SyscallArgs {
    pub num: u64,
    pub a0: u64,
    pub a1: u64,
    pub a2: u64,
    pub a3: u64,
}

impl SyscallArgs {
    pub fn from_registers(registers: &[u64; 32]) -> Self {
        Self {
            num: registers[REG_SYSCALL_NUM],
            a0: registers[REG_ARG0],
            a1: registers[REG_ARG0 + 1],
            a2: registers[REG_ARG0 + 2],
            a3: registers[REG_ARG0 + 3],
        }
    }
}

/// Writes the result pair back and steps past the syscall instruction.
pub fn handle_syscall_updates(cpu: &mut CpuScalars, registers: &mut [u64; 32], v0: u64, v1: u64) {
    registers[REG_RESULT] = v0;
    registers[REG_ERRNO] = v1;
    cpu.advance();
}
