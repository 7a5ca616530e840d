//! Chain integrity checks.
//!
//! The validator replays the link and proof checks over any candidate
//! chain, front to back, and stops at the first fault.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::Block;
use crate::difficulty::valid_proof;
use crate::params::GENESIS_INDEX;

/// Which check a block failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// `previous_hash` does not match the digest of the preceding block.
    PreviousHashMismatch,
    /// The proof does not satisfy the predicate against the previous proof.
    InvalidProof,
    /// The chain has no blocks at all.
    EmptyChain,
    /// The first block is not a genesis block.
    BadGenesis,
    /// The block's index is not its 1-based position.
    IndexGap,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::PreviousHashMismatch => write!(f, "previous hash mismatch"),
            FaultKind::InvalidProof => write!(f, "invalid proof of work"),
            FaultKind::EmptyChain => write!(f, "empty chain"),
            FaultKind::BadGenesis => write!(f, "bad genesis block"),
            FaultKind::IndexGap => write!(f, "index out of sequence"),
        }
    }
}

/// The first fault found in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("block at position {position}: {kind}")]
pub struct ChainFault {
    /// 0-based position of the offending block in the chain.
    pub position: usize,
    /// The check that failed.
    pub kind: FaultKind,
}

impl ChainFault {
    fn new(position: usize, kind: FaultKind) -> Self {
        ChainFault { position, kind }
    }
}

/// Check links and proofs of every adjacent pair.
///
/// Chains with fewer than two blocks have nothing to check and are valid.
pub fn validate_chain(chain: &[Block]) -> Result<(), ChainFault> {
    validate_chain_with(chain, |_| {})
}

/// Boolean form of [`validate_chain`].
pub fn is_chain_valid(chain: &[Block]) -> bool {
    validate_chain(chain).is_ok()
}

/// [`validate_chain`] with a hook called with each block's position just
/// before that block is checked against its predecessor.
pub fn validate_chain_with<F>(chain: &[Block], mut on_pair: F) -> Result<(), ChainFault>
where
    F: FnMut(usize),
{
    for (offset, pair) in chain.windows(2).enumerate() {
        let position = offset + 1;
        on_pair(position);
        check_link(position, &pair[0], &pair[1])?;
    }
    Ok(())
}

/// [`validate_chain`] plus the structural checks: the chain is non-empty,
/// starts with a genesis block and is indexed `1, 2, 3, ...`.
pub fn validate_chain_strict(chain: &[Block]) -> Result<(), ChainFault> {
    let genesis = chain
        .first()
        .ok_or(ChainFault::new(0, FaultKind::EmptyChain))?;
    if !genesis.is_genesis() {
        return Err(ChainFault::new(0, FaultKind::BadGenesis));
    }

    for (offset, pair) in chain.windows(2).enumerate() {
        let position = offset + 1;
        if pair[1].index != GENESIS_INDEX + position as u64 {
            return Err(ChainFault::new(position, FaultKind::IndexGap));
        }
        check_link(position, &pair[0], &pair[1])?;
    }
    Ok(())
}

fn check_link(position: usize, previous: &Block, block: &Block) -> Result<(), ChainFault> {
    if block.previous_hash != previous.hash() {
        return Err(ChainFault::new(position, FaultKind::PreviousHashMismatch));
    }
    if !valid_proof(block.proof, previous.proof) {
        return Err(ChainFault::new(position, FaultKind::InvalidProof));
    }
    Ok(())
}
