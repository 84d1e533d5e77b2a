//! Response bodies returned by the HTTP surface (§6.2), plus the
//! `VerifiedLocationProofResponse` which can itself become a subsequent
//! compute `Input::VerifiedProof` (§3.2, §3.7).

use crate::attestation::{DelegatedAttestation, FlatAttestation, FullAttestation};
use crate::claim::LocationClaim;
use crate::credibility::CredibilityVector;
use crate::stamp::LocationProof;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofInputEcho {
    #[serde(rename = "ref")]
    pub reference: String,
    pub credibility: CredibilityVector,
    pub claim: LocationClaim,
    pub evaluated_at: i64,
    pub evaluation_method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericComputeResponse {
    pub result: f64,
    pub units: String,
    pub operation: String,
    pub timestamp: i64,
    pub input_refs: Vec<String>,
    pub attestation: FlatAttestation,
    pub delegated_attestation: DelegatedAttestation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_inputs: Option<Vec<ProofInputEcho>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanComputeResponse {
    pub result: bool,
    pub operation: String,
    pub timestamp: i64,
    pub input_refs: Vec<String>,
    pub attestation: FlatAttestation,
    pub delegated_attestation: DelegatedAttestation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_inputs: Option<Vec<ProofInputEcho>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedLocationProofResponse {
    pub proof: LocationProof,
    pub credibility: CredibilityVector,
    pub attestation: FullAttestation,
    pub delegated_attestation: DelegatedAttestation,
    pub chain_id: u64,
    pub evaluation_method: String,
    pub evaluated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampVerificationResponse {
    pub valid: bool,
    pub signatures_valid: bool,
    pub structure_valid: bool,
    pub signals_consistent: bool,
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub name: String,
    pub version: String,
    pub environments: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginListResponse {
    pub plugins: Vec<PluginDescriptor>,
}
