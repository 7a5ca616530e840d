//! Ledger rule constants and mining configuration.

/// Index carried by the genesis block.
pub const GENESIS_INDEX: u64 = 1;

/// Proof seeded into the genesis block. Never checked against a predecessor.
pub const GENESIS_PROOF: u64 = 1;

/// Sentinel `previous_hash` of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Required prefix of a qualifying proof digest (hex).
pub const DIFFICULTY_PREFIX: &str = "0000";

/// Default ceiling on proof candidates tried per mined block.
///
/// 2^24 candidates, 256 times the expected 16^4 attempts.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1 << 24;

/// Runtime knobs for mining a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningConfig {
    /// Maximum number of proof candidates the solver may test.
    pub max_attempts: u64,
}

impl MiningConfig {
    /// Create a config with the default attempt ceiling.
    pub fn new() -> Self {
        MiningConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set the attempt ceiling.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self::new()
    }
}
