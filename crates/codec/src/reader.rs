//! Bounds-checked cursor over a blob.
//!
//! Every length read from the blob is validated against the bytes that
//! actually remain before anything sized by it is allocated or sliced.
//! `take` is atomic: on failure the cursor does not move.

use byteorder::{ByteOrder, LittleEndian};
use cmdreplay_core::{ReplayError, ReplayResult};

/// Size of every count/length prefix on the wire
pub const LEN_PREFIX: usize = 4;

/// Which truncation error a reader reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// String sequences and tagged sequences
    Sequence,
    /// String maps
    Map,
}

/// Cursor over the unread tail of a blob.
#[derive(Debug, Clone)]
pub struct BlobReader<'a> {
    buf: &'a [u8],
    frame: Frame,
}

impl<'a> BlobReader<'a> {
    /// Start reading at the beginning of `buf`
    pub fn new(buf: &'a [u8], frame: Frame) -> Self {
        BlobReader { buf, frame }
    }

    /// Bytes not yet consumed
    pub fn remaining_len(&self) -> usize {
        self.buf.len()
    }

    /// Consume exactly `n` bytes, or fail without consuming anything.
    pub fn take(&mut self, n: usize) -> ReplayResult<&'a [u8]> {
        if n > self.buf.len() {
            return Err(self.truncated(n as i64));
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    /// Read one little-endian `i32`
    pub fn read_i32(&mut self) -> ReplayResult<i32> {
        let bytes = self.take(LEN_PREFIX)?;
        Ok(LittleEndian::read_i32(bytes))
    }

    /// Read a length prefix and check it against the remaining bytes.
    ///
    /// The prefix itself is consumed first, so the payload is checked
    /// against what is left after it.
    pub fn read_len(&mut self) -> ReplayResult<usize> {
        let len = self.read_i32()?;
        if len < 0 || len as usize > self.buf.len() {
            return Err(self.truncated(len as i64));
        }
        Ok(len as usize)
    }

    /// Read a length-prefixed field and return its payload.
    pub fn read_field(&mut self) -> ReplayResult<&'a [u8]> {
        let len = self.read_len()?;
        self.take(len)
    }

    /// Validate an element count read earlier.
    ///
    /// Each element needs at least `min_entry_bytes` of framing, so a count
    /// that cannot fit in the remaining bytes is rejected here, before any
    /// container is sized by it.
    pub fn check_count(&self, count: i32, min_entry_bytes: usize) -> ReplayResult<usize> {
        if count < 0 {
            return Err(self.truncated(count as i64));
        }
        let needed = (count as usize).saturating_mul(min_entry_bytes);
        if needed > self.buf.len() {
            return Err(self.truncated(needed as i64));
        }
        Ok(count as usize)
    }

    /// Finish the parse, failing if any bytes were left unread.
    pub fn finish(self) -> ReplayResult<()> {
        if self.buf.is_empty() {
            Ok(())
        } else {
            Err(ReplayError::TrailingBytes {
                remaining: self.buf.len(),
            })
        }
    }

    fn truncated(&self, needed: i64) -> ReplayError {
        let remaining = self.buf.len();
        match self.frame {
            Frame::Sequence => ReplayError::TruncatedSequence { needed, remaining },
            Frame::Map => ReplayError::TruncatedMap { needed, remaining },
        }
    }
}
