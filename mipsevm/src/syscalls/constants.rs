//! Syscall numbers, descriptors, errno values and scheduler constants shared between the
//! syscall core and the external thread scheduler. Numbers follow the MIPS64 n64 Linux ABI.

use static_assertions::const_assert_eq;

// Syscalls with emulated or externally handled semantics.
pub const SYS_MMAP: u64 = 5009;
pub const SYS_MUNMAP: u64 = 5011;
pub const SYS_BRK: u64 = 5012;
pub const SYS_CLONE: u64 = 5055;
pub const SYS_EXIT_GROUP: u64 = 5205;
pub const SYS_READ: u64 = 5000;
pub const SYS_WRITE: u64 = 5001;
pub const SYS_FCNTL: u64 = 5070;
pub const SYS_EXIT: u64 = 5058;
pub const SYS_SCHED_YIELD: u64 = 5023;
pub const SYS_GETTID: u64 = 5178;
pub const SYS_FUTEX: u64 = 5194;
pub const SYS_OPEN: u64 = 5002;
pub const SYS_NANOSLEEP: u64 = 5034;

// Syscalls that succeed without effect.
pub const SYS_GET_AFFINITY: u64 = 5196;
pub const SYS_MADVISE: u64 = 5027;
pub const SYS_RT_SIGPROCMASK: u64 = 5014;
pub const SYS_SIGALTSTACK: u64 = 5129;
pub const SYS_RT_SIGACTION: u64 = 5013;
pub const SYS_PRLIMIT64: u64 = 5297;
pub const SYS_CLOSE: u64 = 5003;
pub const SYS_PREAD64: u64 = 5016;
pub const SYS_FSTAT64: u64 = 5005;
pub const SYS_OPENAT: u64 = 5247;
pub const SYS_READLINK: u64 = 5087;
pub const SYS_READLINKAT: u64 = 5257;
pub const SYS_IOCTL: u64 = 5015;
pub const SYS_EPOLL_CREATE1: u64 = 5285;
pub const SYS_PIPE2: u64 = 5287;
pub const SYS_EPOLL_CTL: u64 = 5208;
pub const SYS_EPOLL_PWAIT: u64 = 5272;
pub const SYS_GETRANDOM: u64 = 5313;
pub const SYS_UNAME: u64 = 5061;
pub const SYS_STAT64: u64 = 5004;
pub const SYS_GETUID: u64 = 5100;
pub const SYS_GETGID: u64 = 5102;
pub const SYS_LLSEEK: u64 = 5008;
pub const SYS_MINCORE: u64 = 5026;
pub const SYS_TGKILL: u64 = 5225;

// Profiling syscalls. The runtime only issues these when profiling is enabled, so they are
// treated as no-ops as well.
pub const SYS_SETITIMER: u64 = 5036;
pub const SYS_TIMER_CREATE: u64 = 5216;
pub const SYS_TIMER_SETTIME: u64 = 5217;
pub const SYS_TIMER_DELETE: u64 = 5220;
pub const SYS_CLOCK_GETTIME: u64 = 5222;

/// The no-op list used by [`crate::SyscallConfig::go_runtime_config`].
pub const GO_RUNTIME_NOOP_SYSCALLS: [u64; 30] = [
    SYS_GET_AFFINITY,
    SYS_MADVISE,
    SYS_RT_SIGPROCMASK,
    SYS_SIGALTSTACK,
    SYS_RT_SIGACTION,
    SYS_PRLIMIT64,
    SYS_CLOSE,
    SYS_PREAD64,
    SYS_FSTAT64,
    SYS_OPENAT,
    SYS_READLINK,
    SYS_READLINKAT,
    SYS_IOCTL,
    SYS_EPOLL_CREATE1,
    SYS_PIPE2,
    SYS_EPOLL_CTL,
    SYS_EPOLL_PWAIT,
    SYS_GETRANDOM,
    SYS_UNAME,
    SYS_STAT64,
    SYS_GETUID,
    SYS_GETGID,
    SYS_LLSEEK,
    SYS_MINCORE,
    SYS_TGKILL,
    SYS_SETITIMER,
    SYS_TIMER_CREATE,
    SYS_TIMER_SETTIME,
    SYS_TIMER_DELETE,
    SYS_CLOCK_GETTIME,
];

// File descriptors.
pub const FD_STDIN: u64 = 0;
pub const FD_STDOUT: u64 = 1;
pub const FD_STDERR: u64 = 2;
pub const FD_HINT_READ: u64 = 3;
pub const FD_HINT_WRITE: u64 = 4;
pub const FD_PREIMAGE_READ: u64 = 5;
pub const FD_PREIMAGE_WRITE: u64 = 6;

// Errors.
pub const SYS_ERROR_SIGNAL: u64 = u64::MAX;
pub const MIPS_EBADF: u64 = 0x9;
pub const MIPS_EINVAL: u64 = 0x16;
pub const MIPS_EAGAIN: u64 = 0xb;
pub const MIPS_ETIMEDOUT: u64 = 0x91;

// fcntl.
pub const F_GETFL: u64 = 3;
pub const O_RDONLY: u64 = 0;
pub const O_WRONLY: u64 = 1;

// Futex.
pub const FUTEX_WAIT_PRIVATE: u64 = 128;
pub const FUTEX_WAKE_PRIVATE: u64 = 129;
pub const FUTEX_TIMEOUT_STEPS: u64 = 10_000;
pub const FUTEX_NO_TIMEOUT: u64 = u64::MAX;
pub const FUTEX_EMPTY_ADDR: u64 = u64::MAX;

// Clone flags, as used by the Go runtime's `newosproc`.
pub const CLONE_VM: u64 = 0x100;
pub const CLONE_FS: u64 = 0x200;
pub const CLONE_FILES: u64 = 0x400;
pub const CLONE_SIGHAND: u64 = 0x800;
pub const CLONE_PTRACE: u64 = 0x2000;
pub const CLONE_VFORK: u64 = 0x4000;
pub const CLONE_PARENT: u64 = 0x8000;
pub const CLONE_THREAD: u64 = 0x10000;
pub const CLONE_NEWNS: u64 = 0x20000;
pub const CLONE_SYSVSEM: u64 = 0x40000;
pub const CLONE_SETTLS: u64 = 0x80000;
pub const CLONE_PARENT_SETTID: u64 = 0x100000;
pub const CLONE_CHILD_CLEARTID: u64 = 0x200000;
pub const CLONE_UNTRACED: u64 = 0x800000;
pub const CLONE_CHILD_SETTID: u64 = 0x1000000;
pub const CLONE_STOPPED: u64 = 0x2000000;
pub const CLONE_NEWUTS: u64 = 0x4000000;
pub const CLONE_NEWIPC: u64 = 0x8000000;

/// The only flag combination accepted by `clone`.
pub const VALID_CLONE_FLAGS: u64 =
    CLONE_VM | CLONE_FS | CLONE_FILES | CLONE_SIGHAND | CLONE_SYSVSEM | CLONE_THREAD;

pub const SCHED_QUANTUM: u64 = 100_000;
pub const BRK_START: u64 = 0x4000_0000;

pub const PAGE_ADDR_SIZE: u32 = 12;
pub const PAGE_SIZE: u64 = 1 << PAGE_ADDR_SIZE;
pub const PAGE_ADDR_MASK: u64 = PAGE_SIZE - 1;

const_assert_eq!(PAGE_SIZE & PAGE_ADDR_MASK, 0);
const_assert_eq!(VALID_CLONE_FLAGS, 0x50f00);
