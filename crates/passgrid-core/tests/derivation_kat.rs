#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Known-answer tests for the derivation pipeline.
//!
//! These vectors are the compatibility contract: coordinate lists generated
//! by earlier implementations must keep verifying, so the bcrypt primitive,
//! the lane composition, the site-hash derivation, and the full coordinate
//! table are each pinned to literal digests.

use passgrid_core::memory::SecretBuffer;
use passgrid_core::{calc_site_hash, stretch, word_coordinates};
use ring::digest;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn byte_sequence(start: u8, count: usize) -> Vec<u8> {
    (0..count).map(|i| start.wrapping_add(i as u8)).collect()
}

// "abcdefghijklmnopqrstuu" in bcrypt's base64 alphabet.
const TEST_SALT: [u8; 16] = [
    0x71, 0xd7, 0x9f, 0x82, 0x18, 0xa3, 0x92, 0x59, 0xa7, 0xa2, 0x9a, 0xab, 0xb2, 0xdb, 0xaf,
    0xc3,
];

/// The bcrypt crate must match the OpenBSD/PHP reference for non-printable
/// passwords. The lane composition avoids sending NUL bytes to bcrypt, but
/// the primitive itself still has to handle arbitrary bytes.
#[test]
fn bcrypt_primitive_handles_non_printable_bytes() {
    let pass: [u8; 10] = [0x01, 0x02, 0x03, 0x7f, 0x80, 0x81, 0xAB, 0xCD, 0xef, 0xff];
    let parts = bcrypt::hash_with_salt(pass, 5, TEST_SALT).expect("bcrypt should succeed");
    assert_eq!(
        parts.format_for_version(bcrypt::Version::TwoA),
        "$2a$05$abcdefghijklmnopqrstuuu18bGopDo9r1tDNZl2p2xd1YzcTrTp6"
    );
}

/// Lane passwords are 64 bytes of hex; the primitive must not truncate them.
#[test]
fn bcrypt_primitive_does_not_truncate_64_byte_passwords() {
    let parts = bcrypt::hash_with_salt([b'a'; 64], 5, TEST_SALT).expect("bcrypt should succeed");
    assert_eq!(
        parts.format_for_version(bcrypt::Version::TwoA),
        "$2a$05$abcdefghijklmnopqrstuusN64mi0Q3MHT4E2PLNsVMiw2Jh1hNE6"
    );

    let mut pass = [b'a'; 64];
    pass[63] = b'b';
    let parts = bcrypt::hash_with_salt(pass, 5, TEST_SALT).expect("bcrypt should succeed");
    assert_eq!(
        parts.format_for_version(bcrypt::Version::TwoA),
        "$2a$05$abcdefghijklmnopqrstuulBPHoU3/c65NkXOJMDkVnN3KklTvm1a"
    );
}

/// Four lanes at cost 5 over a known salt; verified against the reference
/// bcrypt in PHP.
#[test]
fn stretch_known_answer() {
    let hash =
        stretch(b"Super Secret Password", &TEST_SALT, 5, 4).expect("stretch should succeed");
    assert_eq!(
        to_hex(&hash),
        "50bec3b110e540afb4e35ee4fb657a7c7a7187916763a78851418605daa25f8a"
    );
}

#[test]
fn site_hash_known_answers() {
    let secret = SecretBuffer::new(b"Super Secret").expect("buffer");

    let hash = calc_site_hash(&secret, "example.com", "a").expect("derivation should succeed");
    assert_eq!(
        to_hex(hash.as_bytes()),
        "0d7d37b83abbf8e0ff1cd2e2e943c25207f13040167ce68a672e7eb1c9ca15a3"
    );

    // vary sitename
    let hash = calc_site_hash(&secret, "examplf.com", "a").expect("derivation should succeed");
    assert_eq!(
        to_hex(hash.as_bytes()),
        "acd8aa32fcd0fd7d4d924d2687d5cbf38ca9ae7174d6dddeb2cb2a79a1c6ac13"
    );

    // vary personalization
    let hash = calc_site_hash(&secret, "example.com", "b").expect("derivation should succeed");
    assert_eq!(
        to_hex(hash.as_bytes()),
        "b8e3f9874f9237d7913149929b529158e04686b1cd43d3c5aee5598081635eb8"
    );
}

#[test]
fn site_hash_varies_with_secret() {
    let secret = SecretBuffer::new(b"Super Secreu").expect("buffer");
    let hash = calc_site_hash(&secret, "example.com", "a").expect("derivation should succeed");
    assert_eq!(
        to_hex(hash.as_bytes()),
        "a6f4ef6b89910ffa0eb0c2e5385dc507197a828fb02ec1f04106618a16954f09"
    );
}

/// Context variants that normalize identically must derive identically.
#[test]
fn site_hash_normalizes_context() {
    let secret = SecretBuffer::new(b"Super Secret").expect("buffer");
    let hash =
        calc_site_hash(&secret, " eXamplE.cOm", " A\n").expect("derivation should succeed");
    assert_eq!(
        to_hex(hash.as_bytes()),
        "0d7d37b83abbf8e0ff1cd2e2e943c25207f13040167ce68a672e7eb1c9ca15a3"
    );
}

/// Generate all 256 possible coordinates and pin their joined digest.
/// Implementations in other languages use the same digest to verify their
/// full mapping.
#[test]
fn full_coordinate_table_digest() {
    let mut ctx = digest::Context::new(&digest::SHA256);
    let mut all = Vec::with_capacity(256);

    for i in (0..256usize).step_by(32) {
        let coords =
            word_coordinates(&byte_sequence(i as u8, 32), 32).expect("coordinates");
        let strings: Vec<String> = coords.iter().map(ToString::to_string).collect();
        ctx.update(strings.join(" ").as_bytes());
        all.extend(strings);
    }

    assert_eq!(all.len(), 256);
    assert_eq!(all[0], "A1");
    assert_eq!(all[19], "A20");
    assert_eq!(all[20], "B21");
    assert_eq!(all[59], "C60");
    assert_eq!(all[255], "Z64");

    assert_eq!(
        to_hex(ctx.finish().as_ref()),
        "09c017822998970604a28fe870753b90567f5b4731626d0fc7ca9137f2867b85"
    );
}
