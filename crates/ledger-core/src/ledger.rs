//! The append-only block sequence.

use serde::{Deserialize, Serialize};

use crate::block::{current_timestamp, Block};
use crate::error::LedgerError;
use crate::params::MiningConfig;
use crate::pow::solve;
use crate::validate::{validate_chain, ChainFault};

/// A read-only copy of the chain with its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    /// Blocks in chain order, genesis first.
    pub chain: Vec<Block>,
    /// Number of blocks.
    pub length: usize,
}

/// Ordered, append-only sequence of blocks.
///
/// Construction always seeds the genesis block and mining is the only
/// mutation, so the sequence is never empty.
#[derive(Debug, Clone)]
pub struct Ledger {
    chain: Vec<Block>,
}

impl Ledger {
    /// Create a ledger whose genesis block is stamped with the current time.
    pub fn new() -> Self {
        Self::with_genesis_timestamp(current_timestamp())
    }

    /// Create a ledger with an explicit genesis timestamp.
    pub fn with_genesis_timestamp(timestamp: u64) -> Self {
        Ledger {
            chain: vec![Block::genesis(timestamp)],
        }
    }

    /// The most recently appended block.
    pub fn last_block(&self) -> Result<&Block, LedgerError> {
        self.chain.last().ok_or(LedgerError::EmptyChainAccess)
    }

    /// Mine and append a block with an empty payload, stamped now.
    pub fn mine(&mut self, config: &MiningConfig) -> Result<Block, LedgerError> {
        self.mine_at(current_timestamp(), config)
    }

    /// Mine and append a block with an empty payload.
    pub fn mine_at(&mut self, timestamp: u64, config: &MiningConfig) -> Result<Block, LedgerError> {
        self.mine_with_payload(String::new(), timestamp, config)
    }

    /// Mine and append a block carrying `payload`.
    ///
    /// Solves the proof against the last block's proof, links to the last
    /// block's digest and returns a copy of the appended block. Nothing is
    /// appended if the solver runs out of budget.
    pub fn mine_with_payload(
        &mut self,
        payload: impl Into<String>,
        timestamp: u64,
        config: &MiningConfig,
    ) -> Result<Block, LedgerError> {
        let previous = self.last_block()?;
        let proof = solve(previous.proof, config)?;

        let block = Block {
            index: self.chain.len() as u64 + 1,
            timestamp,
            proof,
            previous_hash: previous.hash(),
            payload: payload.into(),
        };

        self.chain.push(block.clone());
        Ok(block)
    }

    /// Copy of the full chain and its length.
    pub fn read(&self) -> ChainSnapshot {
        ChainSnapshot {
            chain: self.chain.clone(),
            length: self.chain.len(),
        }
    }

    /// Borrow the blocks in chain order.
    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always false for a constructed ledger.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Validate this ledger's own chain.
    pub fn validate(&self) -> Result<(), ChainFault> {
        validate_chain(&self.chain)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::valid_proof;

    #[test]
    fn test_new_ledger_has_genesis() {
        let ledger = Ledger::with_genesis_timestamp(0);

        assert_eq!(ledger.len(), 1);
        assert!(!ledger.is_empty());
        let genesis = ledger.last_block().unwrap();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.previous_hash, "0");
        assert_eq!(genesis.proof, 1);
    }

    #[test]
    fn test_new_uses_wall_clock() {
        let ledger = Ledger::new();
        assert!(ledger.blocks()[0].timestamp > 0);
    }

    #[test]
    fn test_mine_appends_linked_block() {
        let mut ledger = Ledger::with_genesis_timestamp(0);
        let genesis_hash = ledger.blocks()[0].hash();

        let block = ledger.mine_at(60, &MiningConfig::default()).unwrap();

        assert_eq!(block.index, 2);
        assert_eq!(block.timestamp, 60);
        assert_eq!(block.proof, 279_385);
        assert_eq!(block.previous_hash, genesis_hash);
        assert!(block.payload.is_empty());
        assert!(valid_proof(block.proof, 1));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.last_block().unwrap(), &block);
    }

    #[test]
    fn test_mine_with_payload() {
        let mut ledger = Ledger::with_genesis_timestamp(0);
        let block = ledger
            .mine_with_payload("receipt #1", 60, &MiningConfig::default())
            .unwrap();

        assert_eq!(block.payload, "receipt #1");
        assert_eq!(ledger.validate(), Ok(()));
    }

    #[test]
    fn test_exhausted_mine_leaves_chain_untouched() {
        let mut ledger = Ledger::with_genesis_timestamp(0);
        let config = MiningConfig::new().with_max_attempts(1_000);

        let err = ledger.mine_at(60, &config).unwrap_err();

        assert_eq!(err, LedgerError::SolverExhausted { attempts: 1_000 });
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_empty_chain_access() {
        let mut ledger = Ledger { chain: Vec::new() };

        assert_eq!(ledger.last_block(), Err(LedgerError::EmptyChainAccess));
        assert_eq!(
            ledger.mine_at(0, &MiningConfig::default()),
            Err(LedgerError::EmptyChainAccess)
        );
    }

    #[test]
    fn test_read_snapshot_is_detached() {
        let mut ledger = Ledger::with_genesis_timestamp(0);
        let mut snapshot = ledger.read();
        assert_eq!(snapshot.length, 1);

        snapshot.chain[0].payload = "edited".to_string();
        assert!(ledger.blocks()[0].payload.is_empty());

        ledger.mine_at(60, &MiningConfig::default()).unwrap();
        assert_eq!(snapshot.length, 1);
        assert_eq!(ledger.read().length, 2);
    }
}
