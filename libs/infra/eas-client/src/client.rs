//! Per-chain EAS reads (§3.2, component C2).
//!
//! Providers are built lazily from a caller-supplied `rpc_url` and cached per
//! chain id, so repeated lookups against the same chain reuse one HTTP
//! connection pool rather than re-resolving the URL and re-handshaking.

use crate::contract::IEAS::{self, IEASInstance};
use crate::error::EasClientError;
use alloy::primitives::{Address, B256};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use dashmap::DashMap;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{instrument, warn};

#[derive(Debug, Clone)]
pub struct FetchedAttestation {
    pub uid: B256,
    pub schema: B256,
    pub attester: Address,
    pub recipient: Address,
    pub revocable: bool,
    pub ref_uid: B256,
    pub data: Vec<u8>,
    pub time: u64,
    pub expiration_time: u64,
    pub revocation_time: u64,
}

pub struct EasClient {
    providers: DashMap<u64, RootProvider>,
}

impl Default for EasClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EasClient {
    pub fn new() -> Self {
        Self {
            providers: DashMap::new(),
        }
    }

    fn provider_for(&self, chain_id: u64, rpc_url: &str) -> Result<RootProvider, EasClientError> {
        if let Some(existing) = self.providers.get(&chain_id) {
            return Ok(existing.clone());
        }
        let url = rpc_url
            .parse()
            .map_err(|_| EasClientError::Transport(format!("invalid RPC url for chain {chain_id}")))?;
        let provider = ProviderBuilder::new().on_http(url);
        self.providers.insert(chain_id, provider.clone());
        Ok(provider)
    }

    #[instrument(skip(self, rpc_url))]
    pub async fn get_attestation(
        &self,
        chain_id: u64,
        rpc_url: &str,
        eas_contract: Address,
        uid_hex: &str,
    ) -> Result<FetchedAttestation, EasClientError> {
        let uid = parse_uid(uid_hex)?;
        let provider = self.provider_for(chain_id, rpc_url)?;
        let contract = IEAS::new(eas_contract, provider);

        let attestation = fetch_with_retry(&contract, uid).await?;

        if attestation.uid == B256::ZERO {
            return Err(EasClientError::NotFound(uid_hex.to_string()));
        }
        if attestation.revocationTime != 0 {
            return Err(EasClientError::Revoked(uid_hex.to_string()));
        }
        if attestation.expirationTime != 0 && attestation.expirationTime < now_secs() {
            return Err(EasClientError::Expired(uid_hex.to_string()));
        }

        Ok(FetchedAttestation {
            uid: attestation.uid,
            schema: attestation.schema,
            attester: attestation.attester,
            recipient: attestation.recipient,
            revocable: attestation.revocable,
            ref_uid: attestation.refUID,
            data: attestation.data.to_vec(),
            time: attestation.time,
            expiration_time: attestation.expirationTime,
            revocation_time: attestation.revocationTime,
        })
    }
}

async fn fetch_with_retry(
    contract: &IEASInstance<RootProvider>,
    uid: B256,
) -> Result<IEAS::Attestation, EasClientError> {
    match contract.getAttestation(uid).call().await {
        Ok(attestation) => Ok(attestation),
        Err(first_err) => {
            warn!(error = %first_err, "eas getAttestation failed, retrying once");
            tokio::time::sleep(Duration::from_millis(250)).await;
            contract
                .getAttestation(uid)
                .call()
                .await
                .map_err(|e| EasClientError::Transport(e.to_string()))
        }
    }
}

fn parse_uid(uid_hex: &str) -> Result<B256, EasClientError> {
    let stripped = uid_hex.strip_prefix("0x").unwrap_or(uid_hex);
    if stripped.len() != 64 {
        return Err(EasClientError::InvalidUid(uid_hex.to_string()));
    }
    B256::from_str(uid_hex).map_err(|_| EasClientError::InvalidUid(uid_hex.to_string()))
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is after the unix epoch")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uid_rejects_wrong_length() {
        assert!(matches!(parse_uid("0xabc"), Err(EasClientError::InvalidUid(_))));
    }

    #[test]
    fn parse_uid_accepts_well_formed_hex() {
        let uid = format!("0x{}", "ab".repeat(32));
        assert!(parse_uid(&uid).is_ok());
    }
}
