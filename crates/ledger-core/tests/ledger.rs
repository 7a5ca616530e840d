use ledger_core::{
    is_chain_valid, solve, validate_chain, validate_chain_with, Block, ChainFault, FaultKind,
    Ledger, MiningConfig,
};

fn mined_ledger(blocks: usize) -> Ledger {
    let mut ledger = Ledger::with_genesis_timestamp(1_700_000_000);
    let config = MiningConfig::default();
    for i in 0..blocks {
        ledger.mine_at(1_700_000_000 + 60 * (i as u64 + 1), &config).unwrap();
    }
    ledger
}

#[test]
fn genesis_invariant() {
    let ledger = Ledger::new();
    let snapshot = ledger.read();

    assert_eq!(snapshot.length, 1);
    assert_eq!(snapshot.chain[0].index, 1);
    assert_eq!(snapshot.chain[0].previous_hash, "0");
}

#[test]
fn mined_twice_example() {
    let ledger = mined_ledger(2);
    let chain = ledger.read().chain;

    assert_eq!(chain.len(), 3);
    assert_eq!(chain[1].previous_hash, chain[0].hash());
    assert_eq!(chain[2].previous_hash, chain[1].hash());
    assert!(is_chain_valid(&chain));

    let mut tampered = chain.clone();
    let mut hash = tampered[1].previous_hash.clone().into_bytes();
    hash[0] = if hash[0] == b'f' { b'e' } else { b'f' };
    tampered[1].previous_hash = String::from_utf8(hash).unwrap();
    assert!(!is_chain_valid(&tampered));
}

#[test]
fn monotonic_growth() {
    let ledger = mined_ledger(3);
    let snapshot = ledger.read();

    assert_eq!(snapshot.length, 4);
    let indexes: Vec<u64> = snapshot.chain.iter().map(|b| b.index).collect();
    assert_eq!(indexes, vec![1, 2, 3, 4]);
}

#[test]
fn self_consistency() {
    let ledger = mined_ledger(3);
    assert_eq!(validate_chain(ledger.blocks()), Ok(()));
    assert_eq!(ledger.validate(), Ok(()));
}

#[test]
fn interior_tamper_detected() {
    let mut chain = mined_ledger(2).read().chain;
    chain[1].payload = "tampered".to_string();

    assert_eq!(
        validate_chain(&chain),
        Err(ChainFault {
            position: 2,
            kind: FaultKind::PreviousHashMismatch,
        })
    );
}

#[test]
fn last_block_tamper_is_a_known_blind_spot() {
    let mut chain = mined_ledger(2).read().chain;
    chain[2].payload = "tampered".to_string();

    // Nothing commits to the tip's hash yet.
    assert!(is_chain_valid(&chain));
}

#[test]
fn proof_search_is_minimal_and_repeatable() {
    let config = MiningConfig::default();
    let first = solve(279_385, &config).unwrap();
    let again = solve(279_385, &config).unwrap();

    assert_eq!(first, 79_394);
    assert_eq!(first, again);
    assert!((1..first).all(|n| !ledger_core::valid_proof(n, 279_385)));
}

#[test]
fn fail_fast_validator() {
    let mut chain = mined_ledger(3).read().chain;
    chain[1].payload = "first fault".to_string();
    chain[3].proof = 0;

    let mut checked = Vec::new();
    let result = validate_chain_with(&chain, |position| checked.push(position));

    assert_eq!(result.unwrap_err().position, 2);
    assert_eq!(checked, vec![1, 2]);
}

#[test]
fn validates_chain_received_as_json() {
    let json = serde_json::to_string(&mined_ledger(1).read()).unwrap();
    let snapshot: ledger_core::ChainSnapshot = serde_json::from_str(&json).unwrap();
    let chain: Vec<Block> = snapshot.chain;

    assert_eq!(snapshot.length, 2);
    assert!(is_chain_valid(&chain));
}
