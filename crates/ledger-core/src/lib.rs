//! Core engine for a hash-linked, proof-of-work secured ledger.
//!
//! This crate provides:
//! - A fixed-shape block model and its canonical SHA256 digest
//! - The leading-zero difficulty predicate
//! - A brute-force proof-of-work solver with an attempt budget
//! - The append-only ledger and a lock-guarded shared handle
//! - A fail-fast chain validator

pub mod block;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod ledger;
pub mod params;
pub mod pow;
pub mod shared;
pub mod validate;

pub use block::Block;
pub use difficulty::{meets_difficulty, valid_proof};
pub use error::LedgerError;
pub use hash::{block_hash, proof_digest};
pub use ledger::{ChainSnapshot, Ledger};
pub use params::MiningConfig;
pub use pow::{search, solve, SearchResult};
pub use shared::SharedLedger;
pub use validate::{
    is_chain_valid, validate_chain, validate_chain_strict, validate_chain_with, ChainFault,
    FaultKind,
};
