//! The Keccak-f[1600] permutation.
//!
//! Structured after the Keccak team's [readable and compact] reference
//! implementation: a flat byte state addressed through lane coordinates,
//! one function per step mapping, and the rho and pi steps fused into a
//! single pass. Section and algorithm numbers refer to [FIPS 202].
//!
//! [readable and compact]: https://github.com/XKCP/XKCP/blob/716f007dd73ef28d357b8162173646be574ad1b7/Standalone/CompactFIPS202/C/Keccak-readable-and-compact.c
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

use crate::lane::{self, LANE_BYTES, Lane};

/// Number of rounds of Keccak-f[1600].
const ROUNDS: usize = 24;

/// Size of the state array in bytes (b = 1600 bits).
pub(crate) const STATE_BYTES: usize = 200;

/// State array A of Keccak-f[1600].
///
/// Kept as the flat byte buffer the sponge absorbs into and squeezes out
/// of; the 5x5 lane grid is a view computed through [`idx`], never a
/// second structure to keep in sync.
#[derive(Clone, Copy)]
pub(crate) struct State {
    bytes: [u8; STATE_BYTES],
}

/// Lane index of coordinates (x, y) when viewing the state as 25 lanes.
///
/// This is the FIPS 202 ordering: lane (x, y) is lane number `x + 5y` of
/// the flat buffer. Every step mapping must address lanes through this one
/// mapping or the permutation computes the wrong result.
fn idx(x: usize, y: usize) -> usize {
    (x % 5) + 5 * (y % 5)
}

/// First byte of the [`Lane`] with coordinates (x, y) in the flat buffer.
fn lane_start_byte(x: usize, y: usize) -> usize {
    LANE_BYTES * idx(x, y)
}

impl State {
    /// The all-zero state a digest computation starts from.
    pub(crate) fn new() -> Self {
        Self {
            bytes: [0; STATE_BYTES],
        }
    }

    pub(crate) fn bytes(&self) -> &[u8; STATE_BYTES] {
        &self.bytes
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8; STATE_BYTES] {
        &mut self.bytes
    }

    /// Retrieve the [`Lane`] with coordinates `x` and `y`.
    fn lane(&self, x: usize, y: usize) -> Lane {
        let start = lane_start_byte(x, y);
        lane::read_lane(&self.bytes[start..start + LANE_BYTES])
    }

    /// Overwrite the [`Lane`] at coordinates `x` and `y`.
    fn write_lane(&mut self, x: usize, y: usize, lane: Lane) {
        let start = lane_start_byte(x, y);
        lane::write_lane(&mut self.bytes[start..start + LANE_BYTES], lane);
    }

    /// XOR the provided [`Lane`] into the lane at coordinates `x` and `y`.
    fn xor_lane(&mut self, x: usize, y: usize, lane: Lane) {
        let start = lane_start_byte(x, y);
        lane::xor_lane(&mut self.bytes[start..start + LANE_BYTES], lane);
    }

    /// 3.3 Algorithm 7: KECCAK-p[b, nr](S)
    ///
    /// Specialized to `b = 1600` and `nr = 24` (Section 3.4). The step
    /// order theta, rho-pi, chi, iota is fixed. The round-constant LFSR is
    /// created here and threaded through the round loop: it keeps
    /// advancing from round to round within one call and is reseeded only
    /// between calls.
    pub(crate) fn permute(&mut self) {
        let mut lfsr = RoundConstantLfsr::new();
        for _ in 0..ROUNDS {
            theta(self);
            rho_pi(self);
            chi(self);
            iota(self, &mut lfsr);
        }
    }
}

/// 3.2.1 Algorithm 1: θ(A)
///
/// Diffuses every lane with the parity of its two neighbouring columns.
fn theta(a: &mut State) {
    // The 5 * 64 column parities fit in 5 lanes, one per column of lanes
    let mut c: [Lane; 5] = Default::default();
    for (x, cx) in c.iter_mut().enumerate() {
        for y in 0..5 {
            *cx ^= a.lane(x, y);
        }
    }

    for x in 0..5 {
        // (x + 4) % 5 is (x - 1) % 5 without underflow
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a.xor_lane(x, y, d);
        }
    }
}

/// 3.2.2 and 3.2.3, Algorithms 2 and 3: ρ and π, fused.
///
/// ρ rotates each lane by an offset fixed per coordinate, π relocates the
/// lanes within the state. Composed back to back they collapse into one
/// trace along the cycle of the 24 moved lanes: starting at (1, 0) with
/// that lane in hand, each step advances to `(y, 2x + 3y)`, saves the lane
/// found there and replaces it with the carried lane rotated by the t-th
/// triangular number. Lane (0, 0) is a fixed point of both mappings.
fn rho_pi(a: &mut State) {
    let (mut x, mut y) = (1, 0);
    let mut current = a.lane(x, y);
    for t in 0..24 {
        (x, y) = (y, (2 * x + 3 * y) % 5);
        let offset = ((t + 1) * (t + 2) / 2) % 64;
        let saved = a.lane(x, y);
        a.write_lane(x, y, current.rotate_left(offset as u32));
        current = saved;
    }
}

/// 3.2.4 Algorithm 4: χ(A)
///
/// The only non-linear step: each lane is XORed with a function of the two
/// lanes following it in its row. Every row is snapshotted before any of
/// its lanes is rewritten, since the update for x reads x + 1 and x + 2.
fn chi(a: &mut State) {
    for y in 0..5 {
        let sheet: [Lane; 5] = std::array::from_fn(|x| a.lane(x, y));
        for x in 0..5 {
            a.write_lane(x, y, sheet[x] ^ (!sheet[(x + 1) % 5] & sheet[(x + 2) % 5]));
        }
    }
}

/// 8-bit LFSR behind the rc(t) function of 3.2.5 Algorithm 5.
///
/// Seeded to 1 at the start of a permutation call and advanced 7 times per
/// round; each advance yields one round-constant bit.
struct RoundConstantLfsr(u8);

impl RoundConstantLfsr {
    fn new() -> Self {
        Self(1)
    }

    /// Advance the register once and report the generated bit.
    fn step(&mut self) -> bool {
        self.0 = (self.0 << 1) ^ ((self.0 >> 7) * 0x71);
        self.0 & 2 != 0
    }
}

/// Generate the next round's constant from the LFSR.
///
/// The bit produced by the i-th advance (i = 0..7) lands at bit position
/// `2^i - 1` of the constant.
fn round_constant(lfsr: &mut RoundConstantLfsr) -> Lane {
    let mut rc: Lane = 0;
    for i in 0..7 {
        if lfsr.step() {
            rc |= 1 << ((1 << i) - 1);
        }
    }
    rc
}

/// 3.2.5 Algorithm 6: ι(A, ir)
///
/// Breaks the symmetry between rounds by XORing the round constant into
/// lane (0, 0); the other 24 lanes are untouched.
fn iota(a: &mut State, lfsr: &mut RoundConstantLfsr) {
    let rc = round_constant(lfsr);
    a.xor_lane(0, 0, rc);
}

#[cfg(test)]
mod tests {
    use super::{ROUNDS, RoundConstantLfsr, State, round_constant};
    use crate::lane::{Lane, read_lane};

    /// Round constants of Table 2, as published in the FIPS 202 reference
    /// code (XKCP KeccakP-1600-reference.c).
    const PUBLISHED_ROUND_CONSTANTS: [Lane; ROUNDS] = [
        0x0000000000000001,
        0x0000000000008082,
        0x800000000000808a,
        0x8000000080008000,
        0x000000000000808b,
        0x0000000080000001,
        0x8000000080008081,
        0x8000000000008009,
        0x000000000000008a,
        0x0000000000000088,
        0x0000000080008009,
        0x000000008000000a,
        0x000000008000808b,
        0x800000000000008b,
        0x8000000000008089,
        0x8000000000008003,
        0x8000000000008002,
        0x8000000000000080,
        0x000000000000800a,
        0x800000008000000a,
        0x8000000080008081,
        0x8000000000008080,
        0x0000000080000001,
        0x8000000080008008,
    ];

    #[test]
    fn lfsr_reproduces_published_round_constants() {
        let mut lfsr = RoundConstantLfsr::new();
        for (round, expected) in PUBLISHED_ROUND_CONSTANTS.into_iter().enumerate() {
            assert_eq!(expected, round_constant(&mut lfsr), "round {round}");
        }
    }

    #[test]
    fn permutation_of_zero_state_matches_reference() {
        // Keccak-f[1600] applied to the all-zero state, from the XKCP
        // TestSnP known-answer vectors
        let expected = hex::decode(concat!(
            "e7dde140798f25f18a47c033f9ccd584eea95aa61e2698d54d49806f304715bd",
            "57d05362054e288bd46f8e7f2da497ffc44746a4a0e5fe90762e19d60cda5b8c",
            "9c05191bf7a630ad64fc8fd0b75a933035d617233fa95aeb0321710d26e6a6a9",
            "5f55cfdb167ca58126c84703cd31b8439f56a5111a2ff20161aed9215a63e505",
            "f270c98cf2febe641166c47b95703661cb0ed04f555a7cb8c832cf1c8ae83e8c",
            "14263aae22790c94e409c5a224f94118c26504e72635f5163ba1307fe944f675",
            "49a2ec5c7bfff1ea",
        ))
        .unwrap();
        let mut state = State::new();
        state.permute();
        assert_eq!(expected, state.bytes().as_slice());
    }

    #[test]
    fn second_permutation_continues_the_reference_sequence() {
        let mut state = State::new();
        state.permute();
        let after_one = *state.bytes();
        state.permute();
        assert_ne!(after_one, *state.bytes());
        // first lane of the XKCP vector for two applications
        assert_eq!(
            0x2d5c954df96ecb3c,
            read_lane(&state.bytes()[..8]),
            "second application diverged from the reference sequence"
        );
    }
}
