use serde::{Deserialize, Serialize};

use crate::oracle::HintSink;

/// Size of the big-endian length prefix of a hint frame.
pub const HINT_LENGTH_PREFIX_SIZE: usize = 4;

/// Hint-channel bytes that do not yet form a complete frame. A frame is a 4-byte big-endian
/// length `L` followed by `L` bytes; frames may arrive split across any number of writes.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HintBuffer {
    pending: Vec<u8>,
}

impl HintBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffered bytes of the incomplete frame, if any.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Appends `data` and delivers every frame that is now complete to `sink`, in order.
    /// Returns the number of frames delivered.
    pub fn write<S: HintSink + ?Sized>(&mut self, data: &[u8], sink: &mut S) -> usize {
        self.pending.extend_from_slice(data);

        let mut consumed = 0;
        let mut delivered = 0;
        while let Some(frame) = next_frame(&self.pending[consumed..]) {
            log::debug!("hint frame of {} bytes", frame.len());
            sink.hint(frame);
            consumed += HINT_LENGTH_PREFIX_SIZE + frame.len();
            delivered += 1;
        }
        self.pending.drain(..consumed);

        delivered
    }
}

/// The payload of the first frame of `buf`, if it is complete.
fn next_frame(buf: &[u8]) -> Option<&[u8]> {
    let (prefix, rest) = buf.split_first_chunk::<HINT_LENGTH_PREFIX_SIZE>()?;
    let len = u32::from_be_bytes(*prefix) as usize;
    rest.get(..len)
}
