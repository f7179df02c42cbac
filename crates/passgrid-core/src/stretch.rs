//! Multi-lane bcrypt key stretching.
//!
//! The slow step of the pipeline. The secret is stretched through several
//! independent bcrypt invocations ("lanes") whose outputs are combined with
//! SHA-256 into 32 bytes. Each lane hashes a distinct password and salt,
//! both derived by prefixing the lane number byte and hashing with SHA-256,
//! so lanes can never collide and may be computed in any order. Four lanes
//! at cost `c` carry the work of a single bcrypt at cost `c + 2`.
//!
//! Lane passwords are sent to bcrypt as 64-character lowercase hex rather
//! than raw digest bytes: some bcrypt implementations truncate at the first
//! NUL, and hex keeps every byte printable.

use bcrypt::Version;
use ring::digest;
use zeroize::{Zeroize, Zeroizing};

use crate::error::CoreError;

/// Salt length required by bcrypt.
pub const SALT_LEN: usize = 16;

/// Most lanes a single stretch may use.
pub const MAX_LANES: usize = 64;

/// Lowest bcrypt cost accepted.
pub const MIN_COST: u32 = 4;

/// Highest bcrypt cost accepted.
pub const MAX_COST: u32 = 31;

/// Characters of `$2a$NN$` plus the 22-character encoded salt — the prefix
/// stripped from bcrypt's output before combining.
const LANE_PREFIX_CHARS: usize = 29;

/// Characters of encoded hash kept per lane.
const LANE_HASH_CHARS: usize = 31;

fn hex_lower(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len().saturating_mul(2));
    for b in bytes {
        // String formatting cannot fail.
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// SHA-256 of the lane byte (`lane + 1`) followed by `data`.
fn lane_digest(lane: usize, data: &[u8]) -> [u8; 32] {
    let mut ctx = digest::Context::new(&digest::SHA256);
    ctx.update(&[(lane.wrapping_add(1) & 0xFF) as u8]);
    ctx.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(ctx.finish().as_ref());
    out
}

/// Derive the distinct 64-character hex password for one lane.
fn lane_password(lane: usize, secret: &[u8]) -> Zeroizing<String> {
    let mut d = lane_digest(lane, secret);
    let hex = Zeroizing::new(hex_lower(&d));
    d.zeroize();
    hex
}

/// Derive the distinct 16-byte salt for one lane.
fn lane_salt(lane: usize, salt: &[u8; SALT_LEN]) -> [u8; SALT_LEN] {
    let d = lane_digest(lane, salt);
    let mut out = [0u8; SALT_LEN];
    out.copy_from_slice(&d[..SALT_LEN]);
    out
}

/// Run bcrypt for one lane and return the 31-character encoded hash tail
/// (salt and cost prefix stripped).
fn bcrypt_lane(
    lane: usize,
    secret: &[u8],
    salt: &[u8; SALT_LEN],
    cost: u32,
) -> Result<Zeroizing<String>, CoreError> {
    let password = lane_password(lane, secret);
    let parts = bcrypt::hash_with_salt(password.as_bytes(), cost, lane_salt(lane, salt))
        .map_err(|e| CoreError::KeyStretching(format!("bcrypt lane {lane} failed: {e}")))?;

    let formatted = Zeroizing::new(parts.format_for_version(Version::TwoA));
    if formatted.len() != LANE_PREFIX_CHARS.saturating_add(LANE_HASH_CHARS) {
        return Err(CoreError::KeyStretching(format!(
            "bcrypt returned wrong size: {} chars",
            formatted.len()
        )));
    }

    Ok(Zeroizing::new(formatted[LANE_PREFIX_CHARS..].to_owned()))
}

/// Stretch `secret` under `salt` with `lanes` bcrypt invocations at `cost`,
/// combining the lane outputs with SHA-256 into 32 bytes.
///
/// Fully deterministic and single-threaded; lanes run sequentially. Callers
/// wanting bounded latency must impose limits externally.
///
/// # Errors
///
/// Returns `CoreError::KeyStretching` if the secret is empty, `lanes` is
/// outside `1..=64`, `cost` is outside `4..=31`, or bcrypt itself fails.
pub fn stretch(
    secret: &[u8],
    salt: &[u8; SALT_LEN],
    cost: u32,
    lanes: usize,
) -> Result<[u8; 32], CoreError> {
    if secret.is_empty() {
        return Err(CoreError::KeyStretching("empty secret".into()));
    }
    if lanes == 0 || lanes > MAX_LANES {
        return Err(CoreError::KeyStretching(format!(
            "lane count must be between 1 and {MAX_LANES}, got {lanes}"
        )));
    }
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(CoreError::KeyStretching(format!(
            "bcrypt cost must be between {MIN_COST} and {MAX_COST}, got {cost}"
        )));
    }

    let mut ctx = digest::Context::new(&digest::SHA256);
    for lane in 0..lanes {
        let tail = bcrypt_lane(lane, secret, salt, cost)?;
        ctx.update(tail.as_bytes());
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(ctx.finish().as_ref());
    Ok(out)
}
