//! Delegated-attestation signing (§3.4, component C4).
//!
//! Produces both the flat, ready-to-relay attestation data and the
//! `DelegatedAttestation` envelope (attester, nonce, deadline) a relayer
//! submits to `EAS.attestByDelegation`.

use crate::eip712::{build_attest, eas_domain};
use crate::encoding::{encode_boolean, encode_numeric, encode_verify};
use crate::error::SignerError;
use crate::nonce::NonceTracker;
use alloy::primitives::{Address, B256, U256};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use alloy::sol_types::SolStruct;
use astral_models::{DelegatedAttestation, FlatAttestation};
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_DEADLINE_TTL_SECS: u64 = 3600;

pub struct AttestationSigner {
    key: PrivateKeySigner,
    nonces: NonceTracker,
}

impl AttestationSigner {
    pub fn new(key: PrivateKeySigner) -> Self {
        Self {
            key,
            nonces: NonceTracker::new(),
        }
    }

    pub fn address(&self) -> Address {
        self.key.address()
    }

    pub fn nonces(&self) -> &NonceTracker {
        &self.nonces
    }

    fn sign(
        &self,
        chain_id: u64,
        eas_contract: Address,
        schema: B256,
        recipient: Address,
        ref_uid: Option<B256>,
        data: Vec<u8>,
    ) -> Result<(FlatAttestation, DelegatedAttestation), SignerError> {
        let nonce = self.nonces.next(chain_id);
        let deadline = now_secs() + DEFAULT_DEADLINE_TTL_SECS;

        let attest = build_attest(
            schema,
            recipient,
            0,
            true,
            ref_uid.unwrap_or(B256::ZERO),
            data.clone(),
            U256::ZERO,
            U256::from(nonce),
            deadline,
        );
        let domain = eas_domain(chain_id, eas_contract);
        let hash = attest.eip712_signing_hash(&domain);
        let signature = self
            .key
            .sign_hash_sync(&hash)
            .map_err(|e| SignerError::Signing(e.to_string()))?;

        let flat = FlatAttestation {
            schema: format!("{schema:#x}"),
            recipient: format!("{recipient:#x}"),
            attester: format!("{:#x}", self.address()),
            data: format!("0x{}", hex::encode(&data)),
            signature: format!("0x{}", hex::encode(signature.as_bytes())),
        };
        let delegated = DelegatedAttestation {
            attester: format!("{:#x}", self.address()),
            deadline,
            nonce,
        };
        Ok((flat, delegated))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sign_numeric(
        &self,
        chain_id: u64,
        eas_contract: Address,
        schema: B256,
        recipient: Address,
        result_scaled: i128,
        units: &str,
        operation: &str,
        timestamp: u64,
        input_refs: &[B256],
        ref_uid: Option<B256>,
    ) -> Result<(FlatAttestation, DelegatedAttestation), SignerError> {
        let data = encode_numeric(result_scaled, units, operation, timestamp, input_refs).to_vec();
        self.sign(chain_id, eas_contract, schema, recipient, ref_uid, data)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sign_boolean(
        &self,
        chain_id: u64,
        eas_contract: Address,
        schema: B256,
        recipient: Address,
        result: bool,
        operation: &str,
        timestamp: u64,
        input_refs: &[B256],
        ref_uid: Option<B256>,
    ) -> Result<(FlatAttestation, DelegatedAttestation), SignerError> {
        let data = encode_boolean(result, operation, timestamp, input_refs).to_vec();
        self.sign(chain_id, eas_contract, schema, recipient, ref_uid, data)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sign_verify(
        &self,
        chain_id: u64,
        eas_contract: Address,
        schema: B256,
        recipient: Address,
        proof_hash: B256,
        mean_distance_meters: u32,
        max_distance_meters: u32,
        within_radius_bp: u16,
        mean_overlap_bp: u16,
        min_overlap_bp: u16,
        signatures_valid_bp: u16,
        structure_valid_bp: u16,
        signals_consistent_bp: u16,
        unique_plugin_ratio_bp: u16,
        stamp_count: u8,
        ref_uid: Option<B256>,
    ) -> Result<(FlatAttestation, DelegatedAttestation), SignerError> {
        let data = encode_verify(
            proof_hash,
            mean_distance_meters,
            max_distance_meters,
            within_radius_bp,
            mean_overlap_bp,
            min_overlap_bp,
            signatures_valid_bp,
            structure_valid_bp,
            signals_consistent_bp,
            unique_plugin_ratio_bp,
            stamp_count,
        )
        .to_vec();
        self.sign(chain_id, eas_contract, schema, recipient, ref_uid, data)
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is after the unix epoch")
        .as_secs()
}
