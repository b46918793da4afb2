use hashbrown::HashMap;
use itertools::Itertools;

use crate::util::{aligned_addr, splice_word, word_byte, ByteOrder};

/// Word-addressed view of the emulated address space. MIPS memory is big-endian, so byte `i` of
/// the word at `addr` is the byte stored at `addr + i`.
pub trait Memory {
    /// Reads the 8-byte word at `addr`, which must be 8-byte aligned.
    fn get_double_word(&self, addr: u64) -> u64;

    /// Writes the 8-byte word at `addr`, which must be 8-byte aligned.
    fn set_double_word(&mut self, addr: u64, value: u64);

    /// Copies `count` bytes starting at the arbitrary address `addr`.
    fn read_memory_range(&self, addr: u64, count: u64) -> Vec<u8>;
}

/// Records which memory words a step touched, for the witness of that step.
pub trait MemTracker {
    fn track_mem_access(&mut self, eff_addr: u64);
}

/// A sparse [`Memory`] keyed by aligned address. Words that are zero are not stored.
#[derive(Clone, Debug, Default)]
pub struct SparseMemory {
    contents: HashMap<u64, u64>,
}

impl SparseMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `data` byte by byte starting at `addr`.
    pub fn set_memory_range(&mut self, addr: u64, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            let byte_addr = addr.wrapping_add(i as u64);
            let eff_addr = aligned_addr(byte_addr);
            let word = self.get_double_word(eff_addr);
            let updated =
                splice_word(word, (byte_addr & 7) as usize, &[byte], ByteOrder::BigEndian);
            self.set_double_word(eff_addr, updated);
        }
    }

    /// Number of non-zero words held.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl Memory for SparseMemory {
    fn get_double_word(&self, addr: u64) -> u64 {
        assert_eq!(addr & 7, 0, "unaligned double word read at {:#x}", addr);
        self.contents.get(&addr).copied().unwrap_or(0)
    }

    fn set_double_word(&mut self, addr: u64, value: u64) {
        assert_eq!(addr & 7, 0, "unaligned double word write at {:#x}", addr);
        if value == 0 {
            self.contents.remove(&addr);
        } else {
            self.contents.insert(addr, value);
        }
    }

    fn read_memory_range(&self, addr: u64, count: u64) -> Vec<u8> {
        (0..count)
            .map(|i| {
                let byte_addr = addr.wrapping_add(i);
                let word = self.get_double_word(aligned_addr(byte_addr));
                word_byte(word, (byte_addr & 7) as usize, ByteOrder::BigEndian)
            })
            .collect_vec()
    }
}

/// A [`MemTracker`] that keeps every tracked address in access order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryAccessLog {
    pub accesses: Vec<u64>,
}

impl MemoryAccessLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkpoint(&self) -> usize {
        self.accesses.len()
    }

    /// Addresses tracked since `checkpoint`.
    pub fn accesses_since(&self, checkpoint: usize) -> &[u64] {
        &self.accesses[checkpoint..]
    }
}

impl MemTracker for MemoryAccessLog {
    fn track_mem_access(&mut self, eff_addr: u64) {
        self.accesses.push(eff_addr);
    }
}
