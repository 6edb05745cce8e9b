//! Property tests for ABI payload compression

use proptest::prelude::*;
use serde_json::{json, Value};
use upgrade_deployer::{compress_abi, decompress_abi, Abi};

fn abi_param() -> impl Strategy<Value = Value> {
    (
        "[a-z_][a-zA-Z0-9_]{0,12}",
        prop::sample::select(vec!["address", "uint256", "bytes32", "string[]", "bool"]),
    )
        .prop_map(|(name, ty)| json!({"internalType": ty, "name": name, "type": ty}))
}

fn abi_entry() -> impl Strategy<Value = Value> {
    (
        "[a-zA-Z][a-zA-Z0-9]{0,20}",
        prop::sample::select(vec!["function", "event", "error"]),
        prop::collection::vec(abi_param(), 0..5),
        prop::collection::vec(abi_param(), 0..3),
        prop::sample::select(vec!["view", "pure", "nonpayable", "payable"]),
    )
        .prop_map(|(name, kind, inputs, outputs, mutability)| {
            json!({
                "inputs": inputs,
                "name": name,
                "outputs": outputs,
                "stateMutability": mutability,
                "type": kind
            })
        })
}

fn abi() -> impl Strategy<Value = Abi> {
    prop::collection::vec(abi_entry(), 0..40).prop_map(Abi::new)
}

proptest! {
    #[test]
    fn prop_round_trip_preserves_entries_and_order(abi in abi()) {
        let payload = compress_abi(&abi).unwrap();
        let decoded = decompress_abi(&payload).unwrap();

        prop_assert_eq!(decoded.len(), abi.len());
        // Compare serialized text so key order counts as well as content
        prop_assert_eq!(
            serde_json::to_string(&decoded).unwrap(),
            serde_json::to_string(&abi).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn prop_compression_is_deterministic(abi in abi()) {
        let first = compress_abi(&abi).unwrap();
        let second = compress_abi(&abi.clone()).unwrap();
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn prop_payload_is_standard_base64(abi in abi()) {
        let payload = compress_abi(&abi).unwrap();
        prop_assert!(payload.len() % 4 == 0);
        prop_assert!(payload
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }
}

#[test]
fn test_reordered_abi_gives_different_payload() {
    let first = json!({"type": "function", "name": "a", "inputs": []});
    let second = json!({"type": "function", "name": "b", "inputs": []});

    let forward = compress_abi(&Abi::new(vec![first.clone(), second.clone()])).unwrap();
    let reversed = compress_abi(&Abi::new(vec![second, first])).unwrap();
    assert_ne!(forward, reversed);
}
