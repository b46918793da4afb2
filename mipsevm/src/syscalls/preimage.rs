use serde::{Deserialize, Serialize};

use crate::errors::SyscallError;
use crate::memory::{MemTracker, Memory};
use crate::oracle::PreimageReader;
use crate::util::{aligned_addr, splice_word, word_bytes, ByteOrder};

/// Delivery state of the preimage descriptors: the key currently exposed through the read
/// descriptor, and how many bytes of its stream were already delivered.
///
/// Keys are written through the write descriptor in ascending, non-overlapping chunks: each
/// write shifts the key left and appends its bytes. Callers that write out of order get a
/// corrupted key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PreimageStream {
    pub key: [u8; 32],
    pub offset: u64,
}

impl PreimageStream {
    pub fn new(key: [u8; 32]) -> Self {
        Self { key, offset: 0 }
    }

    /// Copies the next bytes of the current preimage into the word containing `addr`, never
    /// crossing that word's end. Returns the number of bytes delivered.
    pub fn read<R: PreimageReader + ?Sized>(
        &mut self,
        addr: u64,
        count: u64,
        reader: &mut R,
        memory: &mut dyn Memory,
        tracker: &mut dyn MemTracker,
    ) -> Result<u64, SyscallError> {
        let eff_addr = aligned_addr(addr);
        tracker.track_mem_access(eff_addr);
        let mem = memory.get_double_word(eff_addr);

        let (dat, dat_len) = reader.read_preimage(self.key, self.offset)?;
        let alignment = addr & 7;
        let space = 8 - alignment;
        let n = dat_len.min(space).min(count);

        let updated = splice_word(
            mem,
            alignment as usize,
            &dat[..n as usize],
            ByteOrder::BigEndian,
        );
        memory.set_double_word(eff_addr, updated);
        self.offset += n;

        log::trace!(
            "read {} preimage bytes into {:#x}, offset now {}",
            n,
            eff_addr,
            self.offset
        );
        Ok(n)
    }

    /// Shifts up to `count` bytes taken from the word containing `addr` into the key, and
    /// restarts delivery at offset 0. Returns the number of bytes consumed.
    pub fn write_key(
        &mut self,
        addr: u64,
        count: u64,
        memory: &dyn Memory,
        tracker: &mut dyn MemTracker,
    ) -> u64 {
        let eff_addr = aligned_addr(addr);
        tracker.track_mem_access(eff_addr);
        let mem = memory.get_double_word(eff_addr);

        let alignment = addr & 7;
        let space = 8 - alignment;
        let n = count.min(space) as usize;

        self.key.copy_within(n.., 0);
        let bytes = word_bytes(mem, alignment as usize, n, ByteOrder::BigEndian);
        self.key[32 - n..].copy_from_slice(&bytes);
        self.offset = 0;

        log::debug!("updated preimage key: {}", hex_key(&self.key));
        n as u64
    }
}

fn hex_key(key: &[u8; 32]) -> String {
    key.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryAccessLog, SparseMemory};

    struct FixedReader {
        stream: Vec<u8>,
    }

    impl PreimageReader for FixedReader {
        fn read_preimage(
            &mut self,
            _key: [u8; 32],
            offset: u64,
        ) -> Result<([u8; 32], u64), SyscallError> {
            let rest = &self.stream[offset as usize..];
            let n = rest.len().min(32);
            let mut dat = [0u8; 32];
            dat[..n].copy_from_slice(&rest[..n]);
            Ok((dat, n as u64))
        }
    }

    #[test]
    fn read_stops_at_word_end() {
        let mut memory = SparseMemory::new();
        memory.set_double_word(0x20, 0x1111_1111_1111_1111);
        let mut tracker = MemoryAccessLog::new();
        let mut reader = FixedReader {
            stream: (1..=16).collect(),
        };
        let mut stream = PreimageStream::default();

        let n = stream
            .read(0x25, 100, &mut reader, &mut memory, &mut tracker)
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(stream.offset, 3);
        assert_eq!(memory.get_double_word(0x20), 0x1111_1111_1101_0203);
        assert_eq!(tracker.accesses, vec![0x20]);
    }

    #[test]
    fn read_is_bounded_by_count_and_data() {
        let mut memory = SparseMemory::new();
        let mut tracker = MemoryAccessLog::new();
        let mut reader = FixedReader {
            stream: vec![9, 8, 7],
        };
        let mut stream = PreimageStream::default();

        assert_eq!(
            stream
                .read(0x40, 2, &mut reader, &mut memory, &mut tracker)
                .unwrap(),
            2
        );
        assert_eq!(
            stream
                .read(0x42, 8, &mut reader, &mut memory, &mut tracker)
                .unwrap(),
            1
        );
        assert_eq!(memory.read_memory_range(0x40, 3), vec![9, 8, 7]);
        assert_eq!(stream.offset, 3);
    }

    #[test]
    fn write_key_shifts_in_bytes() {
        let mut memory = SparseMemory::new();
        memory.set_double_word(0x10, 0x0102_0304_0506_0708);
        let mut tracker = MemoryAccessLog::new();
        let mut stream = PreimageStream::new([0xee; 32]);
        stream.offset = 40;

        assert_eq!(stream.write_key(0x14, 10, &memory, &mut tracker), 4);
        let mut expected = [0xee; 32];
        expected[28..].copy_from_slice(&[5, 6, 7, 8]);
        assert_eq!(stream.key, expected);
        assert_eq!(stream.offset, 0);
        assert_eq!(tracker.accesses, vec![0x10]);
    }

    #[test]
    fn zero_length_key_write_still_resets_offset() {
        let memory = SparseMemory::new();
        let mut tracker = MemoryAccessLog::new();
        let mut stream = PreimageStream::new([3; 32]);
        stream.offset = 12;
        assert_eq!(stream.write_key(0x8, 0, &memory, &mut tracker), 0);
        assert_eq!(stream.key, [3; 32]);
        assert_eq!(stream.offset, 0);
    }
}
