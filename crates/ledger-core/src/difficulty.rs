//! Fixed leading-zero difficulty predicate.

use crate::hash::proof_digest;
use crate::params::DIFFICULTY_PREFIX;

/// Check if a hex digest meets the difficulty requirement.
///
/// Returns true if the digest starts with `DIFFICULTY_PREFIX`.
#[inline]
pub fn meets_difficulty(hex_digest: &str) -> bool {
    hex_digest.starts_with(DIFFICULTY_PREFIX)
}

/// Count leading `'0'` characters of a hex digest.
pub fn leading_zero_hex_digits(hex_digest: &str) -> usize {
    hex_digest.bytes().take_while(|&b| b == b'0').count()
}

/// Check a proof against the previous block's proof.
#[inline]
pub fn valid_proof(proof: u64, previous_proof: u64) -> bool {
    meets_difficulty(&proof_digest(proof, previous_proof))
}

/// Average number of candidates needed to find a proof.
pub fn expected_attempts() -> u64 {
    16u64.pow(DIFFICULTY_PREFIX.len() as u32)
}
