//! Error types for ledger operations.

use thiserror::Error;

/// Errors surfaced by the ledger and the proof-of-work solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The chain holds no block to build on.
    #[error("ledger has no previous block")]
    EmptyChainAccess,
    /// The solver tried its whole budget without finding a proof.
    #[error("no proof found within {attempts} attempts")]
    SolverExhausted {
        /// Candidates tested before giving up.
        attempts: u64,
    },
}
