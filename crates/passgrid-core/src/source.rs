//! Pull-based byte sources.
//!
//! [`ByteSource`] is the single seam between the randomness toolkit and
//! whatever supplies its material: one capability, "give me the next byte or
//! signal exhaustion". Two implementations exist — [`FixedByteSource`] over a
//! caller-supplied buffer, and [`crate::stream::HmacCounterSource`] over a
//! keyed counter-mode stream.

use crate::error::CoreError;

/// Supplies one byte at a time until exhausted.
///
/// Exhaustion is terminal: once `next_byte` returns
/// [`CoreError::SourceExhausted`], every subsequent call does too.
pub trait ByteSource {
    /// Return the next byte, or `CoreError::SourceExhausted` when no
    /// material remains.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SourceExhausted` once the source is drained.
    fn next_byte(&mut self) -> Result<u8, CoreError>;
}

/// A [`ByteSource`] over a fixed, owned buffer.
///
/// Consuming a byte advances an internal cursor; the buffer itself is never
/// mutated.
pub struct FixedByteSource {
    bytes: Vec<u8>,
    index: usize,
}

impl FixedByteSource {
    /// Create a source that yields `bytes` front to back.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            index: 0,
        }
    }

    /// Number of bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.index)
    }
}

impl ByteSource for FixedByteSource {
    fn next_byte(&mut self) -> Result<u8, CoreError> {
        let Some(&b) = self.bytes.get(self.index) else {
            return Err(CoreError::SourceExhausted);
        };
        self.index = self.index.saturating_add(1);
        Ok(b)
    }
}
