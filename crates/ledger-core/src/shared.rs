//! Lock-guarded ledger handle for concurrent callers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::block::{current_timestamp, Block};
use crate::error::LedgerError;
use crate::ledger::{ChainSnapshot, Ledger};
use crate::params::MiningConfig;
use crate::validate::{validate_chain, ChainFault};

/// Cloneable handle to one ledger shared between callers.
///
/// Each mine runs "read last block, solve, hash, append" under a single
/// lock, so concurrent mines are serialized and never build on the same
/// predecessor. Reads copy the chain under the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Wrap a freshly constructed ledger.
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    /// Wrap an existing ledger.
    pub fn from_ledger(ledger: Ledger) -> Self {
        SharedLedger {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // A panic while holding the lock cannot leave a torn chain: the only
    // mutation is the final push.
    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mine a block with an empty payload, stamped now.
    pub fn mine(&self, config: &MiningConfig) -> Result<Block, LedgerError> {
        self.mine_at(current_timestamp(), config)
    }

    /// Mine a block with an empty payload.
    pub fn mine_at(&self, timestamp: u64, config: &MiningConfig) -> Result<Block, LedgerError> {
        self.lock().mine_at(timestamp, config)
    }

    /// Mine a block carrying `payload`.
    pub fn mine_with_payload(
        &self,
        payload: impl Into<String>,
        timestamp: u64,
        config: &MiningConfig,
    ) -> Result<Block, LedgerError> {
        self.lock().mine_with_payload(payload, timestamp, config)
    }

    /// Consistent copy of the chain.
    pub fn read(&self) -> ChainSnapshot {
        self.lock().read()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Always false for a constructed ledger.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Validate a snapshot of the chain. The lock is released before the
    /// checks run.
    pub fn validate(&self) -> Result<(), ChainFault> {
        let chain = self.lock().blocks().to_vec();
        validate_chain(&chain)
    }
}
