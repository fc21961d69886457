//! Hash-based weight function.
//!
//! A triple of chain values is ABI-encoded as three 256-bit words,
//! hashed with Keccak-256, and the digest is XOR-folded into a single
//! 128-bit weight.

use sha3::{Digest, Keccak256};

/// Inputs to the weight function. One triple per sample, drawn
/// independently; triples have no relationship to each other.
///
/// Field widths carry the value bounds: `beacon` spans `[0, 2^256)`,
/// `epoch` spans `[0, 2^64)`, `id` spans `[0, 2^160)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    /// Random beacon value (big-endian bytes).
    pub beacon: [u8; 32],
    /// Epoch number.
    pub epoch: u64,
    /// Candidate id (big-endian bytes, address-sized).
    pub id: [u8; 20],
}

/// ABI-encode a triple as three 32-byte big-endian words concatenated
/// in (beacon, epoch, id) order, matching Solidity
/// `abi.encode(uint256, uint256, uint256)` byte for byte.
pub fn abi_encode(triple: &Triple) -> [u8; 96] {
    let mut out = [0u8; 96];
    out[..32].copy_from_slice(&triple.beacon);
    out[56..64].copy_from_slice(&triple.epoch.to_be_bytes());
    out[76..].copy_from_slice(&triple.id);
    out
}

/// Compute the weight of a triple.
///
/// Keccak-256 of the ABI encoding, read as a big-endian 256-bit
/// integer `h`, split into low half `h1` and high half `h2`, folded
/// as `h1 ^ h2`. Pure function: the same triple always yields the
/// same weight, and the result covers `[0, 2^128)`.
///
/// `stake_amount` is accepted but does not enter the formula. The
/// quadratic stake scaling it once fed is disabled upstream, and
/// callers still pass a stake, so the parameter stays in the
/// signature as a no-op.
pub fn calculate_weight(triple: &Triple, _stake_amount: u128) -> u128 {
    let digest = Keccak256::digest(abi_encode(triple));

    let mut h2 = [0u8; 16];
    let mut h1 = [0u8; 16];
    h2.copy_from_slice(&digest[..16]);
    h1.copy_from_slice(&digest[16..]);

    u128::from_be_bytes(h1) ^ u128::from_be_bytes(h2)
}
