//! Browser tests for the JavaScript-facing node.

#![cfg(target_arch = "wasm32")]

use ledger_wasm::response::{ChainInfo, MinedBlockInfo, ValidityInfo, VALID_MESSAGE};
use ledger_wasm::LedgerNode;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn new_node_has_genesis() {
    let node = LedgerNode::new(None);
    assert_eq!(node.length(), 1);

    let chain: ChainInfo = serde_wasm_bindgen::from_value(node.get_chain().unwrap()).unwrap();
    assert_eq!(chain.length, 1);
    assert_eq!(chain.chain[0].previous_hash, "0");
}

#[wasm_bindgen_test]
fn mine_then_validate() {
    let node = LedgerNode::new(None);

    let mined: MinedBlockInfo =
        serde_wasm_bindgen::from_value(node.mine_block().unwrap()).unwrap();
    assert_eq!(mined.index, 2);
    assert_eq!(mined.proof, 279_385);
    assert_eq!(node.length(), 2);

    let validity: ValidityInfo =
        serde_wasm_bindgen::from_value(node.is_valid().unwrap()).unwrap();
    assert_eq!(validity.message, VALID_MESSAGE);
}

#[wasm_bindgen_test]
fn exhausted_budget_is_reported() {
    let node = LedgerNode::new(Some(10));
    assert!(node.mine_block().is_err());
    assert_eq!(node.length(), 1);
}
