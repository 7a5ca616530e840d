//! Ledger block model.

use serde::{Deserialize, Serialize};

use crate::hash::block_hash;
use crate::params::{GENESIS_INDEX, GENESIS_PREVIOUS_HASH, GENESIS_PROOF};

/// One entry of the ledger. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position in the chain.
    pub index: u64,
    /// Creation time (Unix seconds). Informational only.
    pub timestamp: u64,
    /// Proof-of-work nonce, checked against the previous block's proof.
    pub proof: u64,
    /// Hex digest of the preceding block, or `"0"` for genesis.
    pub previous_hash: String,
    /// Opaque caller data. Only affects this block's own hash.
    #[serde(default)]
    pub payload: String,
}

impl Block {
    /// Create the genesis block.
    pub fn genesis(timestamp: u64) -> Self {
        Block {
            index: GENESIS_INDEX,
            timestamp,
            proof: GENESIS_PROOF,
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
            payload: String::new(),
        }
    }

    /// Whether this block carries the genesis index and sentinel link.
    pub fn is_genesis(&self) -> bool {
        self.index == GENESIS_INDEX && self.previous_hash == GENESIS_PREVIOUS_HASH
    }

    /// Canonical digest of this block.
    pub fn hash(&self) -> String {
        block_hash(self)
    }
}

/// Get the current Unix timestamp.
pub(crate) fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
