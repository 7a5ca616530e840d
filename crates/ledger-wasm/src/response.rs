//! Response shapes handed back to JavaScript.

use ledger_core::{Block, ChainFault, ChainSnapshot, FaultKind};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Message returned with every freshly mined block.
pub const MINED_MESSAGE: &str = "Congratulations, you just mined a block!";

/// Message for a chain that passes validation.
pub const VALID_MESSAGE: &str = "All Good. The Blockchain is Valid.";

/// Message for a chain that fails validation.
pub const INVALID_MESSAGE: &str = "Houston, we have a problem. The Blockchain is not Valid.";

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}

/// Descriptor of a mined block. The payload is not echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinedBlockInfo {
    /// Fixed congratulation message.
    pub message: String,
    /// Index of the new block.
    pub index: u64,
    /// Block timestamp (Unix seconds).
    pub timestamp: u64,
    /// Proof found by the solver.
    pub proof: u64,
    /// Digest of the preceding block.
    pub previous_hash: String,
}

impl From<&Block> for MinedBlockInfo {
    fn from(block: &Block) -> Self {
        MinedBlockInfo {
            message: MINED_MESSAGE.to_string(),
            index: block.index,
            timestamp: block.timestamp,
            proof: block.proof,
            previous_hash: block.previous_hash.clone(),
        }
    }
}

impl MinedBlockInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        to_js(self)
    }
}

/// The full chain and its length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainInfo {
    /// Blocks in chain order.
    pub chain: Vec<Block>,
    /// Number of blocks.
    pub length: usize,
}

impl From<ChainSnapshot> for ChainInfo {
    fn from(snapshot: ChainSnapshot) -> Self {
        ChainInfo {
            chain: snapshot.chain,
            length: snapshot.length,
        }
    }
}

impl ChainInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        to_js(self)
    }
}

/// Where a chain first failed validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultInfo {
    /// 0-based position of the offending block.
    pub position: usize,
    /// Machine-readable fault kind.
    pub kind: FaultKind,
    /// Human-readable description.
    pub description: String,
}

impl From<&ChainFault> for FaultInfo {
    fn from(fault: &ChainFault) -> Self {
        FaultInfo {
            position: fault.position,
            kind: fault.kind,
            description: fault.to_string(),
        }
    }
}

/// Outcome of a validity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidityInfo {
    /// Message chosen solely by whether the chain is valid.
    pub message: String,
    /// The first fault, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<FaultInfo>,
}

impl From<Result<(), ChainFault>> for ValidityInfo {
    fn from(result: Result<(), ChainFault>) -> Self {
        match result {
            Ok(()) => ValidityInfo {
                message: VALID_MESSAGE.to_string(),
                fault: None,
            },
            Err(fault) => ValidityInfo {
                message: INVALID_MESSAGE.to_string(),
                fault: Some(FaultInfo::from(&fault)),
            },
        }
    }
}

impl ValidityInfo {
    /// Whether the checked chain was valid.
    pub fn is_valid(&self) -> bool {
        self.fault.is_none()
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        to_js(self)
    }
}
