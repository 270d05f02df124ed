//! The sponge construction driving the permutation.
//!
//! Implements the padding, absorbing and squeezing phases of Sections 4
//! and 5 of [FIPS 202], instantiated with `pad10*1` and
//! `KECCAK-p[1600, 24]`.
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

use std::cmp;

use crate::lane::xor_bytes;
use crate::permute::{STATE_BYTES, State};

/// Bits appended to the end of the input for domain separation and
/// padding. For SHA-3, this is the bit pattern 0b10 + the first 1 bit of
/// the pad10*1 padding.
const DOMAIN_SUFFIX: u8 = 0b110;

/// One-shot sponge: absorb `message`, squeeze `output.len()` bytes.
///
/// `rate` and `capacity` are in bytes and must sum to the 200-byte state
/// size. With rate 136, capacity 64 and a 32-byte output this is SHA3-256;
/// the other fixed-width instances substitute their constants.
pub(crate) fn keccak(rate: usize, capacity: usize, message: &[u8], output: &mut [u8]) {
    assert_eq!(
        STATE_BYTES,
        rate + capacity,
        "rate + capacity must fill the state"
    );
    assert!(rate > 0, "rate must be non-zero");

    let padded = pad(message, rate);
    let mut state = State::new();

    // Absorbing phase. Each block is chained through the permutation of
    // the previous one, so this loop is inherently sequential.
    for block in padded.chunks_exact(rate) {
        xor_bytes(&mut state.bytes_mut()[..rate], block);
        state.permute();
    }

    // Squeezing phase. The fixed digest sizes all fit in a single block;
    // the loop still permutes between blocks for longer outputs.
    let mut squeezed = 0;
    loop {
        let block = cmp::min(output.len() - squeezed, rate);
        output[squeezed..squeezed + block].copy_from_slice(&state.bytes()[..block]);
        squeezed += block;
        if squeezed == output.len() {
            break;
        }
        state.permute();
    }
}

/// 5.1 Algorithm 9: pad10*1, combined with the SHA-3 domain suffix.
///
/// Extends `message` to the next multiple of `rate`, appending a full
/// extra block when the length already is one (the empty message
/// included). The domain suffix lands in the byte right after the message
/// and the final 1 bit in the last byte of the padded buffer; when a
/// single byte is appended the two markers share it.
fn pad(message: &[u8], rate: usize) -> Vec<u8> {
    let pad_len = rate - message.len() % rate;
    let mut padded = Vec::with_capacity(message.len() + pad_len);
    padded.extend_from_slice(message);
    padded.resize(message.len() + pad_len, 0);
    padded[message.len()] ^= DOMAIN_SUFFIX;
    let last = padded.len() - 1;
    padded[last] ^= 0b10000000;
    padded
}
