//! Keyed counter-mode pseudorandom byte stream.
//!
//! [`HmacCounterSource`] produces an effectively unbounded byte stream from a
//! secret key: block `c` is HMAC-SHA-256(key, `c` as 4-byte big-endian), and
//! each block yields its 32 bytes in order before the counter advances. The
//! block at a given counter is a pure function of (key, counter) — required
//! for reproducibility, and not a weakness since the key is never
//! attacker-controlled at rest.

use ring::hmac;
use zeroize::Zeroize;

use crate::error::CoreError;
use crate::source::ByteSource;

/// Bytes per HMAC-SHA-256 block.
pub const BLOCK_LEN: usize = 32;

/// A [`ByteSource`] over HMAC-SHA-256 in counter mode.
///
/// After `max_counter` blocks (`32 * max_counter` bytes) the source reports
/// [`CoreError::SourceExhausted`] — it never silently wraps. Superseded
/// blocks are zeroized before being replaced.
pub struct HmacCounterSource {
    key: hmac::Key,
    counter: u32,
    max_counter: u32,
    block: [u8; BLOCK_LEN],
    offset: usize,
}

impl HmacCounterSource {
    /// Create a stream keyed with `key` that yields `max_counter` blocks.
    #[must_use]
    pub fn new(key: &[u8], max_counter: u32) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, key),
            counter: 0,
            max_counter,
            block: [0u8; BLOCK_LEN],
            // Blocks are computed lazily; start exhausted so the first read
            // triggers block 0.
            offset: BLOCK_LEN,
        }
    }

    /// Compute the block for the current counter value and reset the offset.
    fn next_block(&mut self) {
        let counter_bytes = self.counter.to_be_bytes();
        let tag = hmac::sign(&self.key, &counter_bytes);

        self.block.zeroize();
        self.block.copy_from_slice(tag.as_ref());

        self.counter = self.counter.wrapping_add(1);
        self.offset = 0;
    }
}

impl ByteSource for HmacCounterSource {
    fn next_byte(&mut self) -> Result<u8, CoreError> {
        if self.offset >= BLOCK_LEN {
            if self.counter >= self.max_counter {
                return Err(CoreError::SourceExhausted);
            }
            self.next_block();
        }

        let b = self.block[self.offset];
        self.offset = self.offset.saturating_add(1);
        Ok(b)
    }
}

impl Drop for HmacCounterSource {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}
