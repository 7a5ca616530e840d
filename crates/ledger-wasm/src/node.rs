//! JavaScript-facing ledger node.

use ledger_core::{Ledger, LedgerError, MiningConfig, SharedLedger};
use wasm_bindgen::prelude::*;

use crate::log;
use crate::response::{ChainInfo, MinedBlockInfo, ValidityInfo};

/// A ledger owned by the page, mined on demand.
#[wasm_bindgen]
pub struct LedgerNode {
    /// The chain itself.
    ledger: SharedLedger,
    /// Solver budget applied to every mine.
    config: MiningConfig,
}

#[wasm_bindgen]
impl LedgerNode {
    /// Create a node with a fresh genesis block.
    ///
    /// # Arguments
    /// * `max_attempts` - Solver attempt ceiling per block (default if omitted)
    #[wasm_bindgen(constructor)]
    pub fn new(max_attempts: Option<u32>) -> LedgerNode {
        let mut config = MiningConfig::default();
        if let Some(max) = max_attempts {
            config = config.with_max_attempts(u64::from(max));
        }

        let ledger = Ledger::with_genesis_timestamp(now_secs());
        log::info(&format!(
            "ledger created, solver budget {} attempts",
            config.max_attempts
        ));

        LedgerNode {
            ledger: SharedLedger::from_ledger(ledger),
            config,
        }
    }

    /// Mine the next block and describe it.
    #[wasm_bindgen]
    pub fn mine_block(&self) -> Result<JsValue, JsValue> {
        self.mine_with(String::new())
    }

    /// Mine the next block carrying `data` as its payload.
    #[wasm_bindgen]
    pub fn mine_block_with_data(&self, data: String) -> Result<JsValue, JsValue> {
        self.mine_with(data)
    }

    /// Get the full chain and its length.
    #[wasm_bindgen]
    pub fn get_chain(&self) -> Result<JsValue, JsValue> {
        ChainInfo::from(self.ledger.read()).to_js()
    }

    /// Check the chain and report a human-readable verdict.
    #[wasm_bindgen]
    pub fn is_valid(&self) -> Result<JsValue, JsValue> {
        let info = ValidityInfo::from(self.ledger.validate());
        if let Some(fault) = &info.fault {
            log::warn(&format!("chain invalid: {}", fault.description));
        }
        info.to_js()
    }

    /// Number of blocks in the chain.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.ledger.len()
    }

    /// Solver attempt ceiling per block.
    #[wasm_bindgen(getter)]
    pub fn max_attempts(&self) -> f64 {
        self.config.max_attempts as f64
    }
}

impl LedgerNode {
    fn mine_with(&self, payload: String) -> Result<JsValue, JsValue> {
        let block = self
            .ledger
            .mine_with_payload(payload, now_secs(), &self.config)
            .map_err(mining_error)?;

        log::info(&format!(
            "mined block {} with proof {}",
            block.index, block.proof
        ));
        MinedBlockInfo::from(&block).to_js()
    }
}

fn mining_error(e: LedgerError) -> JsValue {
    log::error(&format!("mining failed: {}", e));
    JsValue::from_str(&format!("Mining failed: {}", e))
}

/// Current Unix time from the JS clock.
fn now_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}
