//! End-to-end coverage of a signed delegated attestation: the recovered
//! signer address must match the key that produced it, and a supplied
//! refUID must survive verbatim into the signed struct (§4.4).

use alloy::primitives::{address, Signature, B256};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolStruct;
use astral_signer::{build_attest, eas_domain, AttestationSigner, EAS_DOMAIN_NAME, EAS_DOMAIN_VERSION};

#[test]
fn eas_domain_matches_the_eas_v1_2_0_deployment_convention() {
    let eas_contract = address!("4200000000000000000000000000000000000a");
    let domain = eas_domain(8453, eas_contract);
    assert_eq!(domain.name.as_deref(), Some(EAS_DOMAIN_NAME));
    assert_eq!(domain.version.as_deref(), Some(EAS_DOMAIN_VERSION));
    assert_eq!(domain.verifying_contract, Some(eas_contract));
}

#[test]
fn recovered_signer_matches_the_signing_key() {
    let key = PrivateKeySigner::random();
    let signer = AttestationSigner::new(key.clone());
    let eas_contract = address!("4200000000000000000000000000000000000a");
    let schema = B256::repeat_byte(0x42);
    let recipient = address!("0000000000000000000000000000000000dead");

    let (flat, _delegated) = signer
        .sign_numeric(84532, eas_contract, schema, recipient, 100, "meters", "distance", 1, &[], None)
        .unwrap();

    let sig_bytes = hex::decode(flat.signature.trim_start_matches("0x")).unwrap();
    let data_bytes = hex::decode(flat.data.trim_start_matches("0x")).unwrap();
    let attest = build_attest(
        schema,
        recipient,
        0,
        true,
        B256::ZERO,
        data_bytes,
        alloy::primitives::U256::ZERO,
        alloy::primitives::U256::ZERO,
        signer_deadline_from(&flat, &_delegated),
    );
    let domain = eas_domain(84532, eas_contract);
    let hash = attest.eip712_signing_hash(&domain);

    let sig = Signature::from_raw(&sig_bytes).unwrap();
    let recovered = sig.recover_address_from_prehash(&hash).unwrap();
    assert_eq!(recovered, key.address());
}

#[test]
fn supplied_ref_uid_is_honored_verbatim() {
    let key = PrivateKeySigner::random();
    let signer = AttestationSigner::new(key);
    let eas_contract = address!("4200000000000000000000000000000000000a");
    let schema = B256::repeat_byte(0x01);
    let recipient = address!("0000000000000000000000000000000000dead");
    let ref_uid = B256::repeat_byte(0x99);

    // The refUID isn't echoed on `FlatAttestation` itself, but changing it
    // must change the signature (it's part of the signed struct) since the
    // handler layer reconstructs `FullAttestation.ref_uid` from the same
    // value it passed in, not from anything derived here.
    let (flat_with_ref, _) = signer
        .sign_boolean(1, eas_contract, schema, recipient, true, "contains", 1, &[], Some(ref_uid))
        .unwrap();
    let (flat_without_ref, _) = signer
        .sign_boolean(1, eas_contract, schema, recipient, true, "contains", 1, &[], None)
        .unwrap();

    assert_ne!(flat_with_ref.signature, flat_without_ref.signature);
}

fn signer_deadline_from(
    _flat: &astral_models::FlatAttestation,
    delegated: &astral_models::DelegatedAttestation,
) -> u64 {
    delegated.deadline
}
