use crate::syscalls::constants::*;

/// The closed set of descriptors visible to the emulated program. Descriptors are never opened
/// or closed at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FileDescriptor {
    Stdin,
    Stdout,
    Stderr,
    HintRead,
    HintWrite,
    PreimageRead,
    PreimageWrite,
}

impl FileDescriptor {
    pub const fn number(self) -> u64 {
        match self {
            FileDescriptor::Stdin => FD_STDIN,
            FileDescriptor::Stdout => FD_STDOUT,
            FileDescriptor::Stderr => FD_STDERR,
            FileDescriptor::HintRead => FD_HINT_READ,
            FileDescriptor::HintWrite => FD_HINT_WRITE,
            FileDescriptor::PreimageRead => FD_PREIMAGE_READ,
            FileDescriptor::PreimageWrite => FD_PREIMAGE_WRITE,
        }
    }

    /// The access mode reported by `fcntl(F_GETFL)`.
    pub const fn open_flags(self) -> u64 {
        match self {
            FileDescriptor::Stdin | FileDescriptor::PreimageRead | FileDescriptor::HintRead => {
                O_RDONLY
            }
            FileDescriptor::Stdout
            | FileDescriptor::Stderr
            | FileDescriptor::PreimageWrite
            | FileDescriptor::HintWrite => O_WRONLY,
        }
    }
}

impl TryFrom<u64> for FileDescriptor {
    type Error = u64;

    fn try_from(fd: u64) -> Result<Self, Self::Error> {
        match fd {
            FD_STDIN => Ok(FileDescriptor::Stdin),
            FD_STDOUT => Ok(FileDescriptor::Stdout),
            FD_STDERR => Ok(FileDescriptor::Stderr),
            FD_HINT_READ => Ok(FileDescriptor::HintRead),
            FD_HINT_WRITE => Ok(FileDescriptor::HintWrite),
            FD_PREIMAGE_READ => Ok(FileDescriptor::PreimageRead),
            FD_PREIMAGE_WRITE => Ok(FileDescriptor::PreimageWrite),
            _ => Err(fd),
        }
    }
}
