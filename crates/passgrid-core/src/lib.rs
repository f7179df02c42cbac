//! `passgrid-core` — Deterministic word-grid coordinate derivation.
//!
//! This crate is the audit target: zero I/O, zero async, zero UI
//! dependencies. It derives a short, human-writable list of lookup
//! coordinates into a fixed offline word grid from a master secret plus
//! per-site context. The same inputs always reproduce the same coordinates,
//! the derivation is deliberately slow (multi-lane bcrypt), and the mapping
//! from derived bytes to grid cells is free of statistical bias.
//!
//! The randomness toolkit ([`source`], [`stream`], [`sampling`], [`bits`])
//! is a standalone layer with no dependency on the derivation logic; future
//! derivation variants build on it the same way [`derive`] does.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;

pub mod source;
pub mod stream;

pub mod sampling;
pub mod bits;

pub mod normalize;
pub mod stretch;
pub mod derive;

pub mod grid;
pub mod checkword;

pub use bits::BitReader;
pub use checkword::{calc_checkword, is_correct_checkword, split_checkword, CHECKWORD_LIST_SIZE};
pub use derive::{calc_site_hash, SiteHash, BCRYPT_COST, MIN_SECRET_LEN, STRETCH_LANES};
pub use error::CoreError;
pub use grid::{word_coordinates, Coordinate, GridLayout, WordCell, COLUMN_LETTERS, GRID_CELLS};
pub use memory::{disable_core_dumps, LockedRegion, SecretBuffer};
pub use normalize::{normalize_field, to_lower_az, trim_url};
pub use sampling::{secure_shuffle, unbiased_int, MAX_SHUFFLE_LEN};
pub use source::{ByteSource, FixedByteSource};
pub use stream::HmacCounterSource;
pub use stretch::stretch;
