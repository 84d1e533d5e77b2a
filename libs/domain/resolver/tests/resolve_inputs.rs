//! Resolution of the input shapes that don't require a live RPC endpoint:
//! raw geometry (hashed to its canonical reference) and the reserved
//! off-chain reference shape (§3.2, §4.3).

use alloy::primitives::address;
use astral_eas_client::EasClient;
use astral_models::DomainError;
use astral_resolver::{resolve, ChainEndpoint};
use geojson::{Geometry, Value};

fn endpoint() -> ChainEndpoint {
    ChainEndpoint {
        chain_id: 84532,
        rpc_url: "http://localhost:8545".to_string(),
        eas_contract: address!("4200000000000000000000000000000000000021"),
    }
}

#[tokio::test]
async fn raw_geometry_resolves_to_a_keccak_of_its_canonical_form() {
    let geometry = astral_models::Input::RawGeometry(Geometry::new(Value::Point(vec![
        -122.4194, 37.7749,
    ])));
    let client = EasClient::new();
    let resolved = resolve(&geometry, &endpoint(), &client).await.unwrap();

    assert!(resolved.reference.starts_with("0x"));
    assert_eq!(resolved.reference.len(), 66);
    assert!(resolved.proof_context.is_none());
}

#[tokio::test]
async fn raw_geometry_reference_is_stable_regardless_of_geojson_key_order() {
    let a = astral_models::Input::RawGeometry(Geometry::new(Value::Point(vec![1.0, 2.0])));
    let b = astral_models::Input::RawGeometry(Geometry::new(Value::Point(vec![1.0, 2.0])));
    let client = EasClient::new();
    let ep = endpoint();

    let ra = resolve(&a, &ep, &client).await.unwrap();
    let rb = resolve(&b, &ep, &client).await.unwrap();
    assert_eq!(ra.reference, rb.reference);
}

#[tokio::test]
async fn invalid_raw_geometry_is_rejected_before_hashing() {
    let bad = astral_models::Input::RawGeometry(Geometry::new(Value::Point(vec![200.0, 0.0])));
    let client = EasClient::new();
    let result = resolve(&bad, &endpoint(), &client).await;
    assert!(matches!(result, Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn offchain_ref_resolution_is_reserved_not_implemented() {
    let input = astral_models::Input::OffchainRef {
        uid: "0x".to_string() + &"ab".repeat(32),
        uri: "ipfs://example".to_string(),
    };
    let client = EasClient::new();
    let result = resolve(&input, &endpoint(), &client).await;
    assert!(matches!(result, Err(DomainError::NotImplemented(_))));
}
