/// Byte order used when mapping byte offsets within a memory word onto bit positions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteOrder {
    /// Byte 0 is the most significant byte. MIPS memory is big-endian.
    BigEndian,
    LittleEndian,
}

/// Bit position of the byte at `index` (0 = lowest address) within a 64-bit word.
const fn byte_shift(index: usize, order: ByteOrder) -> u32 {
    match order {
        ByteOrder::BigEndian => (56 - 8 * index) as u32,
        ByteOrder::LittleEndian => (8 * index) as u32,
    }
}

/// Returns the byte at `index` of `word`.
pub fn word_byte(word: u64, index: usize, order: ByteOrder) -> u8 {
    assert!(index < 8, "byte index out of range: {}", index);
    (word >> byte_shift(index, order)) as u8
}

/// Returns `len` bytes of `word` starting at byte `offset`.
pub fn word_bytes(word: u64, offset: usize, len: usize, order: ByteOrder) -> Vec<u8> {
    (offset..offset + len)
        .map(|i| word_byte(word, i, order))
        .collect()
}

/// Overwrites the bytes of `word` starting at byte `offset` with `bytes`, leaving the other
/// bytes of the word unchanged.
pub fn splice_word(word: u64, offset: usize, bytes: &[u8], order: ByteOrder) -> u64 {
    assert!(
        offset + bytes.len() <= 8,
        "splice of {} bytes at offset {} overflows the word",
        bytes.len(),
        offset
    );
    bytes.iter().enumerate().fold(word, |acc, (i, &b)| {
        let shift = byte_shift(offset + i, order);
        (acc & !(0xff << shift)) | ((b as u64) << shift)
    })
}

/// The 8-byte aligned address of the word containing `addr`.
pub const fn aligned_addr(addr: u64) -> u64 {
    addr & !7
}

/// Rounds `len` up to a multiple of `page_size`, which must be a power of two. Wraps like the
/// 64-bit arithmetic of the on-chain re-executor.
pub const fn page_align_up(len: u64, page_size: u64) -> u64 {
    let mask = page_size - 1;
    if len & mask != 0 {
        len.wrapping_add(page_size - (len & mask))
    } else {
        len
    }
}
