//! Bias-free integer draws and permutations from a [`ByteSource`].
//!
//! [`unbiased_int`] rejection-samples a single byte against a fixed
//! threshold. The threshold formula is a compatibility contract: previously
//! generated outputs depend on exactly which byte values are rejected, so no
//! other bias-reduction strategy is acceptable.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::source::ByteSource;

/// Largest value a single drawn byte can take.
const RAND_MAX: usize = 255;

/// Largest buffer [`secure_shuffle`] accepts — ranks are 16-bit and must
/// stay collision-free in a reasonable number of redraws.
pub const MAX_SHUFFLE_LEN: usize = 0x7fff;

/// Draw an integer in `[0, n)` with exactly uniform probability.
///
/// One byte `b` is consumed per attempt; `b` is accepted iff
/// `b <= 255 - (256 % n)`, in which case the result is `b % n`. Rejected
/// bytes are discarded and a fresh byte is drawn.
///
/// # Errors
///
/// - `CoreError::InvalidBound` if `n` is outside `1..=256`
/// - `CoreError::SourceExhausted` if the source drains before an accepted draw
pub fn unbiased_int(source: &mut dyn ByteSource, n: usize) -> Result<usize, CoreError> {
    if n == 0 || n > RAND_MAX.wrapping_add(1) {
        return Err(CoreError::InvalidBound(n));
    }

    // n is validated non-zero above.
    #[allow(clippy::arithmetic_side_effects)]
    let limit = RAND_MAX - ((RAND_MAX + 1) % n);

    loop {
        let r = usize::from(source.next_byte()?);
        if r <= limit {
            #[allow(clippy::arithmetic_side_effects)]
            return Ok(r % n);
        }
    }
}

/// Shuffle `buffer` in place, uniformly, using bytes from `source`.
///
/// Every position is assigned a unique 16-bit rank (two bytes per draw,
/// big-endian, redrawn on collision); positions are then stably sorted by
/// rank. Distinct ranks keep the permutation purely determined by the drawn
/// ranks rather than by sort-implementation tie behavior.
///
/// # Errors
///
/// - `CoreError::BufferTooLarge` if the buffer exceeds [`MAX_SHUFFLE_LEN`]
/// - `CoreError::SourceExhausted` if the source drains mid-shuffle; the
///   buffer is left unpermuted in that case
pub fn secure_shuffle(buffer: &mut [u8], source: &mut dyn ByteSource) -> Result<(), CoreError> {
    let n = buffer.len();
    if n > MAX_SHUFFLE_LEN {
        return Err(CoreError::BufferTooLarge(n));
    }

    let mut ranks: Vec<u16> = Vec::with_capacity(n);
    let mut used: HashSet<u16> = HashSet::with_capacity(n);

    for _ in 0..n {
        loop {
            let hi = source.next_byte()?;
            let lo = source.next_byte()?;
            let rank = u16::from_be_bytes([hi, lo]);
            if used.insert(rank) {
                ranks.push(rank);
                break;
            }
        }
    }

    // Stable sort of positions by rank; ranks are distinct, so the result
    // is independent of the sort implementation.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| ranks[i]);

    let scratch: Vec<u8> = buffer.to_vec();
    for (dst, &src_idx) in buffer.iter_mut().zip(order.iter()) {
        *dst = scratch[src_idx];
    }

    Ok(())
}
