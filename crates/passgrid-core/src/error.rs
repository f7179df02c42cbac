//! Error types for `passgrid-core`.

use thiserror::Error;

/// Errors produced by derivation, mapping, and sampling operations.
///
/// Every variant is either caller-input validation, byte-source exhaustion,
/// or an underlying primitive failure. Nothing here is retried internally:
/// all operations are pure, so retrying cannot change the outcome.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The master secret is shorter than the required minimum.
    #[error("secret must be at least {min} bytes, got {actual}")]
    SecretTooShort {
        /// Required minimum length in bytes.
        min: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// The site name is empty after normalization.
    #[error("site name is empty after normalization")]
    EmptySiteName,

    /// A site hash of the wrong length was supplied.
    #[error("site hash must be exactly 32 bytes, got {0}")]
    InvalidHashLength(usize),

    /// The requested coordinate count is outside 1..=32.
    #[error("coordinate count must be between 1 and 32, got {0}")]
    InvalidCount(usize),

    /// The sampling bound is outside 1..=256.
    #[error("sampling bound must be between 1 and 256, got {0}")]
    InvalidBound(usize),

    /// The requested bit width is outside 1..=32.
    #[error("bit count must be between 1 and 32, got {0}")]
    InvalidBitCount(usize),

    /// The buffer handed to the shuffle exceeds the 16-bit rank space.
    #[error("buffer too large to shuffle: {0} bytes (maximum 32767)")]
    BufferTooLarge(usize),

    /// A word-grid asset did not match the fixed layout (wrong word count).
    #[error("word grid asset error: {0}")]
    WordGrid(String),

    /// A byte source ran out of material. Terminal — not recoverable by retry.
    #[error("byte source exhausted")]
    SourceExhausted,

    /// The key-stretching primitive failed (bcrypt parameter or execution error).
    #[error("key stretching failed: {0}")]
    KeyStretching(String),

    /// Secure memory allocation failure (mlock, rlimit).
    #[error("secure memory error: {0}")]
    SecureMemory(String),
}
