//! Operations on single lanes of the Keccak state.
//!
//! A lane is one of the 25 64-bit words of the 1600-bit state. In the flat
//! state buffer a lane occupies 8 bytes in little-endian order; this module
//! provides the conversions between the two views and the byte-level XOR
//! used when absorbing message blocks.

/// Lane of the state array containing w = 64 bits.
pub(crate) type Lane = u64;

/// Size of a [`Lane`] in bytes.
pub(crate) const LANE_BYTES: usize = size_of::<Lane>();

/// Load the [`Lane`] stored little-endian in `bytes`.
///
/// Panics if `bytes` is not exactly 8 bytes long.
pub(crate) fn read_lane(bytes: &[u8]) -> Lane {
    let bytes = bytes.try_into().expect("lane slice has length 8");
    Lane::from_le_bytes(bytes)
}

/// Store `lane` little-endian into `bytes`.
///
/// Panics if `bytes` is not exactly 8 bytes long.
pub(crate) fn write_lane(bytes: &mut [u8], lane: Lane) {
    assert_eq!(LANE_BYTES, bytes.len(), "lane slice has length 8");
    bytes.copy_from_slice(&lane.to_le_bytes());
}

/// XOR `lane` into the lane stored little-endian in `bytes`.
pub(crate) fn xor_lane(bytes: &mut [u8], lane: Lane) {
    let current = read_lane(bytes);
    write_lane(bytes, current ^ lane);
}

/// Bytewise XOR of `other` into `dest`.
///
/// Both buffers must have the same length; absorbing a block into only the
/// bitrate-sized prefix of the state is done by slicing `dest` before the
/// call. Panics on a length mismatch.
pub(crate) fn xor_bytes(dest: &mut [u8], other: &[u8]) {
    assert_eq!(dest.len(), other.len(), "xor operands differ in length");
    // for_each combinator can lead to better codegen
    dest.iter_mut().zip(other).for_each(|(dest, other)| {
        *dest ^= other;
    });
}
