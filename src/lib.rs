//! SHA-3 hash functions built on the Keccak sponge.
//!
//! This crate provides portable, pure Rust implementations of the four
//! fixed-length SHA-3 functions standardized in [FIPS 202]: the
//! Keccak-f[1600] permutation driven by the `pad10*1` sponge construction.
//!
//! # Limitations
//!
//! This software is intended as a learning exercise and not for
//! production use.
//!
//! Only one-shot hashing of a complete byte slice `&[u8]` is exposed.
//! There is no incremental `update` API, and the SHAKE extendable-output
//! functions of [FIPS 202] are not implemented.
//!
//! No attempt is made at constant-time execution; do not use this crate
//! where side channels matter.
//!
//! # Example Usage
//! ```
//! # use sha3_sponge::sha3_256;
//! #
//! let message = "The quick brown fox jumps over the lazy dog";
//! let digest: [u8; 32] = sha3_256(message.as_bytes());
//! let expected = "69070dda01975c8c120c3aada1b282394e7f032fa9cf32f4cb2259a0897dfc04";
//! assert_eq!(expected, hex::encode(digest));
//! ```
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

mod lane;
mod permute;
mod sponge;

use crate::permute::STATE_BYTES;
use crate::sponge::keccak;

/// SHA-3 Hash with 224 bits (28 bytes) output.
pub fn sha3_224(message: &[u8]) -> [u8; 28] {
    const CAPACITY: usize = 2 * 28;
    const RATE: usize = STATE_BYTES - CAPACITY;
    let mut digest = [0; 28];
    keccak(RATE, CAPACITY, message, &mut digest);
    digest
}

/// SHA-3 Hash with 256 bits (32 bytes) output.
pub fn sha3_256(message: &[u8]) -> [u8; 32] {
    const CAPACITY: usize = 2 * 32;
    const RATE: usize = STATE_BYTES - CAPACITY;
    let mut digest = [0; 32];
    keccak(RATE, CAPACITY, message, &mut digest);
    digest
}

/// SHA-3 Hash with 384 bits (48 bytes) output.
pub fn sha3_384(message: &[u8]) -> [u8; 48] {
    const CAPACITY: usize = 2 * 48;
    const RATE: usize = STATE_BYTES - CAPACITY;
    let mut digest = [0; 48];
    keccak(RATE, CAPACITY, message, &mut digest);
    digest
}

/// SHA-3 Hash with 512 bits (64 bytes) output.
pub fn sha3_512(message: &[u8]) -> [u8; 64] {
    const CAPACITY: usize = 2 * 64;
    const RATE: usize = STATE_BYTES - CAPACITY;
    let mut digest = [0; 64];
    keccak(RATE, CAPACITY, message, &mut digest);
    digest
}
