//! Three-letter checkword computation and verification.
//!
//! A checkword is a typo detector: a 3-letter English word appended to the
//! master secret as typed. It is selected by the first byte of the SHA-256
//! of the raw secret from a fixed 256-entry list embedded at compile time.
//! The list's content and ordering are part of the compatibility contract —
//! reordering it changes every checkword.

use std::sync::OnceLock;

use ring::digest;

use crate::normalize::to_lower_az;

/// Number of words in the checkword list — one per possible hash byte.
pub const CHECKWORD_LIST_SIZE: usize = 256;

/// Length of a checkword in characters.
pub const CHECKWORD_LEN: usize = 3;

const CHECKWORDS_RAW: &str = include_str!("wordlists/checkwords.txt");

static CHECKWORDS_LOCK: OnceLock<Box<[&'static str]>> = OnceLock::new();

/// Returns the parsed checkword list (256 words).
///
/// The list is parsed lazily on first access and cached for the lifetime of
/// the process.
///
/// # Panics
///
/// Panics if the embedded list does not contain exactly
/// [`CHECKWORD_LIST_SIZE`] words.
fn checkwords() -> &'static [&'static str] {
    CHECKWORDS_LOCK.get_or_init(|| {
        let words: Vec<&'static str> = CHECKWORDS_RAW.lines().collect();
        assert!(
            words.len() == CHECKWORD_LIST_SIZE,
            "checkword list must contain exactly {CHECKWORD_LIST_SIZE} words, got {}",
            words.len()
        );
        words.into_boxed_slice()
    })
}

/// Compute the checkword of a secret: the list entry at index
/// `SHA256(secret)[0]`.
#[must_use]
pub fn calc_checkword(secret: &str) -> &'static str {
    let hash = digest::digest(&digest::SHA256, secret.as_bytes());
    checkwords()[usize::from(hash.as_ref()[0])]
}

/// Split a typed secret into (secret, checkword).
///
/// The last three characters are the checkword candidate; inputs of three
/// characters or fewer have no room for one and come back whole with an
/// empty checkword. Splitting counts characters, not bytes, so a multibyte
/// secret is never cut on a non-boundary.
#[must_use]
pub fn split_checkword(secret_with_checkword: &str) -> (&str, &str) {
    let char_count = secret_with_checkword.chars().count();
    if char_count <= CHECKWORD_LEN {
        return (secret_with_checkword, "");
    }

    let split_at = secret_with_checkword
        .char_indices()
        .nth(char_count.saturating_sub(CHECKWORD_LEN))
        .map_or(secret_with_checkword.len(), |(i, _)| i);
    secret_with_checkword.split_at(split_at)
}

/// Whether `checkword` matches the secret's checkword, ignoring ASCII case.
#[must_use]
pub fn is_correct_checkword(secret: &str, checkword: &str) -> bool {
    calc_checkword(secret) == to_lower_az(checkword)
}
