//! Bit-level reads over a [`ByteSource`].
//!
//! [`BitReader`] serves 1–32 bits per call, most-significant-bit first,
//! keeping a sub-byte cursor across calls. Exhaustion mid-read is not a hard
//! failure: the remaining bits are zero-padded and flagged, and callers must
//! check the flag explicitly rather than infer it from the returned value.

use crate::error::CoreError;
use crate::source::ByteSource;

/// Reads integers of 1–32 bits from an underlying byte source, MSB first.
pub struct BitReader<S: ByteSource> {
    source: S,
    current_byte: u32,
    /// Bit position to read next, 7 down to 0. `None` means `current_byte`
    /// is used up and a fresh byte is needed.
    next_bit: Option<u8>,
}

impl<S: ByteSource> BitReader<S> {
    /// Wrap `source` with a fresh cursor.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            current_byte: 0,
            next_bit: None,
        }
    }

    /// Read `n_bits` bits (1–32), MSB first.
    ///
    /// Returns the value and an exhaustion flag. When the source drains
    /// mid-read the remaining requested bits are zero-padded on the right
    /// and the flag is `true`; the value is still meaningful and the flag
    /// stays `true` on every later call.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidBitCount` if `n_bits` is 0 or exceeds 32.
    #[allow(clippy::arithmetic_side_effects)] // shift amounts bounded by 7 and 32
    pub fn read_bits(&mut self, n_bits: usize) -> Result<(u32, bool), CoreError> {
        if n_bits == 0 || n_bits > 32 {
            return Err(CoreError::InvalidBitCount(n_bits));
        }

        let mut res: u32 = 0;
        let mut remaining = n_bits;

        while remaining > 0 {
            let pos = match self.next_bit {
                Some(pos) => pos,
                None => match self.source.next_byte() {
                    Ok(b) => {
                        self.current_byte = u32::from(b);
                        7
                    }
                    Err(CoreError::SourceExhausted) => {
                        // remaining <= 32, shift cannot overflow for
                        // remaining == 32 only when res == 0.
                        res = res.checked_shl(remaining as u32).unwrap_or(0);
                        return Ok((res, true));
                    }
                    Err(e) => return Err(e),
                },
            };

            // Branch-free extraction: no conditional on the bit value
            // itself, to keep secret-derived bits off the branch predictor.
            res <<= 1;
            res |= (self.current_byte >> u32::from(pos)) & 0x01;

            self.next_bit = pos.checked_sub(1);
            remaining = remaining.saturating_sub(1);
        }

        Ok((res, false))
    }
}
