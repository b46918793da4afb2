//! Interfaces to the preimage oracle, the key-addressed data source the emulated program reads
//! through the preimage descriptors, and to the hint sink behind the hint descriptor.

use crate::errors::SyscallError;

/// Size of the big-endian length prefix that precedes every preimage in the read stream.
pub const PREIMAGE_LENGTH_PREFIX_SIZE: usize = 8;

/// The maximum number of bytes returned by a single [`PreimageReader::read_preimage`] call.
pub const PREIMAGE_READ_CHUNK_SIZE: usize = 32;

/// An external source of preimages, implemented by the embedder.
pub trait PreimageOracle {
    /// Delivers a complete hint frame, without its length prefix.
    fn hint(&mut self, hint: &[u8]);

    /// Returns the raw preimage of `key`.
    fn get_preimage(&mut self, key: [u8; 32]) -> Vec<u8>;
}

/// Receives complete hint frames.
pub trait HintSink {
    fn hint(&mut self, hint: &[u8]);
}

/// Serves the length-prefixed preimage stream of a key.
pub trait PreimageReader {
    /// Returns up to [`PREIMAGE_READ_CHUNK_SIZE`] bytes of the stream of `key` starting at
    /// `offset`, together with the number of valid bytes.
    fn read_preimage(
        &mut self,
        key: [u8; 32],
        offset: u64,
    ) -> Result<([u8; PREIMAGE_READ_CHUNK_SIZE], u64), SyscallError>;
}

/// Everything the I/O handlers need from the oracle side.
pub trait PreimageChannel: PreimageReader + HintSink {}

impl<T: PreimageReader + HintSink> PreimageChannel for T {}

/// Wraps a [`PreimageOracle`] and keeps the most recently fetched preimage, so that streaming a
/// preimage over many small reads queries the oracle once.
#[derive(Debug)]
pub struct CachedPreimageReader<O: PreimageOracle> {
    oracle: O,
    last_key: Option<[u8; 32]>,
    /// The prefixed stream of `last_key`.
    last_preimage: Vec<u8>,
}

impl<O: PreimageOracle> CachedPreimageReader<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            last_key: None,
            last_preimage: vec![],
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn into_inner(self) -> O {
        self.oracle
    }

    fn load(&mut self, key: [u8; 32]) {
        if self.last_key == Some(key) {
            return;
        }
        let data = self.oracle.get_preimage(key);
        let mut preimage = Vec::with_capacity(PREIMAGE_LENGTH_PREFIX_SIZE + data.len());
        preimage.extend_from_slice(&(data.len() as u64).to_be_bytes());
        preimage.extend_from_slice(&data);
        self.last_key = Some(key);
        self.last_preimage = preimage;
    }
}

impl<O: PreimageOracle> PreimageReader for CachedPreimageReader<O> {
    fn read_preimage(
        &mut self,
        key: [u8; 32],
        offset: u64,
    ) -> Result<([u8; PREIMAGE_READ_CHUNK_SIZE], u64), SyscallError> {
        self.load(key);

        let len = self.last_preimage.len() as u64;
        if offset >= len {
            return Err(SyscallError::PreimageOffsetOutOfBounds { offset, len });
        }

        let rest = &self.last_preimage[offset as usize..];
        let n = rest.len().min(PREIMAGE_READ_CHUNK_SIZE);
        let mut dat = [0u8; PREIMAGE_READ_CHUNK_SIZE];
        dat[..n].copy_from_slice(&rest[..n]);
        Ok((dat, n as u64))
    }
}

impl<O: PreimageOracle> HintSink for CachedPreimageReader<O> {
    fn hint(&mut self, hint: &[u8]) {
        self.oracle.hint(hint);
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;

    use super::*;

    #[derive(Default)]
    struct CountingOracle {
        preimages: HashMap<[u8; 32], Vec<u8>>,
        fetches: usize,
        hints: Vec<Vec<u8>>,
    }

    impl PreimageOracle for CountingOracle {
        fn hint(&mut self, hint: &[u8]) {
            self.hints.push(hint.to_vec());
        }

        fn get_preimage(&mut self, key: [u8; 32]) -> Vec<u8> {
            self.fetches += 1;
            self.preimages.get(&key).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn stream_is_length_prefixed() {
        let key = [7u8; 32];
        let mut oracle = CountingOracle::default();
        oracle.preimages.insert(key, b"hello".to_vec());
        let mut reader = CachedPreimageReader::new(oracle);

        let (dat, len) = reader.read_preimage(key, 0).unwrap();
        assert_eq!(len, 13);
        assert_eq!(&dat[..8], &5u64.to_be_bytes());
        assert_eq!(&dat[8..13], b"hello");

        let (dat, len) = reader.read_preimage(key, 10).unwrap();
        assert_eq!(len, 3);
        assert_eq!(&dat[..3], b"llo");
        assert_eq!(reader.oracle().fetches, 1);
    }

    #[test]
    fn reads_are_chunked() {
        let key = [1u8; 32];
        let mut oracle = CountingOracle::default();
        oracle.preimages.insert(key, vec![0xab; 100]);
        let mut reader = CachedPreimageReader::new(oracle);

        let (_, len) = reader.read_preimage(key, 0).unwrap();
        assert_eq!(len, PREIMAGE_READ_CHUNK_SIZE as u64);
        let (_, len) = reader.read_preimage(key, 100).unwrap();
        assert_eq!(len, 8);
    }

    #[test]
    fn offset_past_end_is_an_error() {
        let key = [2u8; 32];
        let mut reader = CachedPreimageReader::new(CountingOracle::default());
        assert_eq!(
            reader.read_preimage(key, 8),
            Err(SyscallError::PreimageOffsetOutOfBounds { offset: 8, len: 8 })
        );
    }

    #[test]
    fn key_change_refetches() {
        let mut reader = CachedPreimageReader::new(CountingOracle::default());
        reader.read_preimage([1u8; 32], 0).unwrap();
        reader.read_preimage([1u8; 32], 4).unwrap();
        reader.read_preimage([2u8; 32], 0).unwrap();
        assert_eq!(reader.oracle().fetches, 2);

        reader.hint(b"abc");
        assert_eq!(reader.into_inner().hints, vec![b"abc".to_vec()]);
    }
}
