//! `ResolvedInput` — the output of input resolution (§3.3).

use crate::claim::LocationClaim;
use crate::credibility::CredibilityVector;
use geojson::Geometry;

/// Context carried forward when an `Input` resolved from a verified proof,
/// surfaced to the response as `proofInputs[]` (§4.3, §4.5).
#[derive(Debug, Clone)]
pub struct ProofContext {
    /// The verified proof's attestation UID.
    pub reference: String,
    pub credibility: CredibilityVector,
    pub claim: LocationClaim,
    pub evaluated_at: i64,
    pub evaluation_method: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub geometry: Geometry,
    /// 32-byte hex reference: the attestation UID, or a keccak256 over the
    /// canonical form of raw geometry.
    pub reference: String,
    pub proof_context: Option<ProofContext>,
}
