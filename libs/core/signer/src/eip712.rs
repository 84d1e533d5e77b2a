//! The EAS "Attest by delegation" EIP-712 struct and domain (§3.4).
//!
//! Field order and types mirror `EAS.sol`'s `Attest` struct exactly — the
//! signing hash is only valid to an on-chain verifier if the layout matches
//! the contract's own `DelegatedAttestationRequest` encoding.

use alloy::primitives::{Address, B256, U256};
use alloy::sol;
use alloy::sol_types::Eip712Domain;

sol! {
    /// EAS's delegated-attestation struct (EIP-712 "Attest" type).
    struct Attest {
        bytes32 schema;
        address recipient;
        uint64 expirationTime;
        bool revocable;
        bytes32 refUID;
        bytes data;
        uint256 value;
        uint256 nonce;
        uint64 deadline;
    }
}

pub const EAS_DOMAIN_NAME: &str = "EAS";
pub const EAS_DOMAIN_VERSION: &str = "1.2.0";

/// The EIP-712 domain for a given chain's EAS deployment.
pub fn eas_domain(chain_id: u64, eas_contract: Address) -> Eip712Domain {
    Eip712Domain {
        name: Some(std::borrow::Cow::Borrowed(EAS_DOMAIN_NAME)),
        version: Some(std::borrow::Cow::Borrowed(EAS_DOMAIN_VERSION)),
        chain_id: Some(U256::from(chain_id)),
        verifying_contract: Some(eas_contract),
        salt: None,
    }
}

pub fn build_attest(
    schema: B256,
    recipient: Address,
    expiration_time: u64,
    revocable: bool,
    ref_uid: B256,
    data: Vec<u8>,
    value: U256,
    nonce: U256,
    deadline: u64,
) -> Attest {
    Attest {
        schema,
        recipient,
        expirationTime: expiration_time,
        revocable,
        refUID: ref_uid,
        data: data.into(),
        value,
        nonce,
        deadline,
    }
}
