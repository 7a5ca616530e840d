//! SHA256 hashing for blocks and proof candidates.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::block::Block;

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// SHA256 hash as 64 lowercase hex characters.
#[inline]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Serialize a block to compact JSON with its keys in ascending order.
///
/// Two blocks with equal field values always serialize to the same bytes,
/// whatever order their fields were assigned in.
pub fn canonical_json(block: &Block) -> String {
    let mut fields: [(&'static str, Value); 5] = [
        ("index", Value::from(block.index)),
        ("timestamp", Value::from(block.timestamp)),
        ("proof", Value::from(block.proof)),
        ("previous_hash", Value::from(block.previous_hash.as_str())),
        ("payload", Value::from(block.payload.as_str())),
    ];
    // Sort explicitly so the output does not depend on serde_json's map backend.
    fields.sort_unstable_by_key(|(name, _)| *name);

    let object: Map<String, Value> = fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    Value::Object(object).to_string()
}

/// Canonical digest of a block: SHA256 over its canonical JSON, hex-encoded.
pub fn block_hash(block: &Block) -> String {
    sha256_hex(canonical_json(block).as_bytes())
}

/// Digest of a proof candidate against the previous proof.
///
/// Hashes the decimal string of `proof^2 - 2 * previous_proof`. The
/// difference is computed exactly over the whole `u64` range; a negative
/// result keeps its leading minus sign.
pub fn proof_digest(proof: u64, previous_proof: u64) -> String {
    let square = (proof as u128) * (proof as u128);
    let doubled = (previous_proof as u128) * 2;

    let operand = if square >= doubled {
        (square - doubled).to_string()
    } else {
        format!("-{}", doubled - square)
    };
    sha256_hex(operand.as_bytes())
}
