//! Site-hash derivation.
//!
//! Turns (master secret, site name, personalization) into a 32-byte
//! [`SiteHash`], deterministically. The salt fed to the stretching step is a
//! SHA-256 of the normalized site context under a fixed domain-separation
//! label — deterministic by design, not random. A salt that depends only on
//! the site context trades away some rainbow-table protection, but an
//! adversary holding the physical word grid is a targeted attacker, and a
//! precomputed table would have to cover every candidate site and
//! personalization. The bcrypt work factor is the real defense.

use ring::digest;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CoreError;
use crate::memory::SecretBuffer;
use crate::normalize::normalize_field;
use crate::stretch::{stretch, SALT_LEN};

/// Minimum secret length in bytes, measured after any checkword is stripped.
pub const MIN_SECRET_LEN: usize = 10;

/// Fixed bcrypt cost per lane. Four lanes at cost 11 mirror an effective
/// single-bcrypt cost of 13. Changing this changes every derived output.
pub const BCRYPT_COST: u32 = 11;

/// Fixed number of bcrypt lanes. Part of the compatibility contract.
pub const STRETCH_LANES: usize = 4;

/// Domain-separation label for the site-id hash. Part of the wire-level
/// compatibility contract; never localized or renamed.
const SITE_ID_LABEL: &str = "passillion-type1";

/// The 32-byte output of the derivation.
///
/// Zeroed on drop and masked in `Debug`; recomputed on demand, never stored.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SiteHash([u8; 32]);

impl SiteHash {
    /// The raw 32 hash bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for SiteHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SiteHash(***)")
    }
}

/// Build the deterministic per-site salt: SHA-256 over the label and both
/// normalized context fields, each on its own line, truncated to 16 bytes.
fn make_site_id(sitename: &str, personalization: &str) -> [u8; SALT_LEN] {
    let mut ctx = digest::Context::new(&digest::SHA256);
    ctx.update(SITE_ID_LABEL.as_bytes());
    ctx.update(b"\n");
    ctx.update(normalize_field(sitename).as_bytes());
    ctx.update(b"\n");
    ctx.update(normalize_field(personalization).as_bytes());

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&ctx.finish().as_ref()[..SALT_LEN]);
    salt
}

/// Derive the 32-byte site hash for one (secret, site, personalization)
/// triple.
///
/// Both context fields are normalized before hashing, so whitespace and
/// ASCII-case variants of the same context yield the same hash. This is
/// deliberately the slowest operation in the crate — on the order of a
/// second — and the caller may parallelize independent derivations freely
/// since nothing here shares mutable state.
///
/// # Errors
///
/// - `CoreError::SecretTooShort` if the secret is under [`MIN_SECRET_LEN`] bytes
/// - `CoreError::EmptySiteName` if the site name normalizes to empty
/// - `CoreError::KeyStretching` if the bcrypt primitive fails
pub fn calc_site_hash(
    secret: &SecretBuffer,
    sitename: &str,
    personalization: &str,
) -> Result<SiteHash, CoreError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(CoreError::SecretTooShort {
            min: MIN_SECRET_LEN,
            actual: secret.len(),
        });
    }

    if normalize_field(sitename).is_empty() {
        return Err(CoreError::EmptySiteName);
    }

    let salt = make_site_id(sitename, personalization);
    let hash = stretch(secret.expose(), &salt, BCRYPT_COST, STRETCH_LANES)?;
    Ok(SiteHash(hash))
}
