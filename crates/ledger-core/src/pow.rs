//! Brute-force proof-of-work search.

use crate::difficulty::valid_proof;
use crate::error::LedgerError;
use crate::params::MiningConfig;

/// Result of a proof search batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The first qualifying proof in the batch (if found).
    pub proof: Option<u64>,
    /// Number of candidates tested in this batch.
    pub attempts: u64,
}

impl SearchResult {
    /// Create a result indicating no proof in the batch.
    pub fn not_found(attempts: u64) -> Self {
        SearchResult {
            proof: None,
            attempts,
        }
    }

    /// Create a result indicating a proof was found.
    pub fn found(proof: u64, attempts: u64) -> Self {
        SearchResult {
            proof: Some(proof),
            attempts,
        }
    }
}

/// Test a range of proof candidates in ascending order.
///
/// # Arguments
/// * `previous_proof` - Proof of the block being built upon
/// * `start` - First candidate to test
/// * `count` - Maximum number of candidates to test
///
/// # Returns
/// The first qualifying candidate at or after `start`, if any lies in range.
pub fn search(previous_proof: u64, start: u64, count: u64) -> SearchResult {
    let end = start.saturating_add(count);

    for candidate in start..end {
        if valid_proof(candidate, previous_proof) {
            return SearchResult::found(candidate, candidate - start + 1);
        }
    }

    SearchResult::not_found(end - start)
}

/// Find the smallest positive proof for `previous_proof`.
///
/// Candidates are tested from 1 upward, so any two solvers agree on the
/// answer. Fails with `SolverExhausted` once `config.max_attempts`
/// candidates have been rejected.
pub fn solve(previous_proof: u64, config: &MiningConfig) -> Result<u64, LedgerError> {
    let result = search(previous_proof, 1, config.max_attempts);
    result.proof.ok_or(LedgerError::SolverExhausted {
        attempts: result.attempts,
    })
}
