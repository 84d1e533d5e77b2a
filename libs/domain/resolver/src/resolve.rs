//! Input resolution (§3.2, §3.3, component C3): turns the four `Input`
//! shapes a client may submit into a common `ResolvedInput` the compute
//! pipeline can operate on uniformly.

use crate::claim_data::decode_location_attestation;
use astral_eas_client::EasClient;
use astral_models::{DomainError, Input, ProofContext, ResolvedInput};
use futures::future::try_join_all;

/// Where to fetch on-chain attestations for a given chain, supplied by the
/// caller (the oracle's per-chain configuration) rather than baked in here.
#[derive(Debug, Clone)]
pub struct ChainEndpoint {
    pub chain_id: u64,
    pub rpc_url: String,
    pub eas_contract: alloy::primitives::Address,
}

pub async fn resolve(
    input: &Input,
    endpoint: &ChainEndpoint,
    eas_client: &EasClient,
) -> Result<ResolvedInput, DomainError> {
    match input {
        Input::RawGeometry(geometry) => {
            astral_models::geometry::validate(geometry)
                .map_err(|e| DomainError::invalid(e.to_string()))?;
            let json = serde_json::to_value(geometry)
                .map_err(|e| DomainError::Internal(format!("geometry serialisation failed: {e}")))?;
            let canonical = astral_models::canon::canonicalize(&json);
            let hash = alloy::primitives::keccak256(canonical.as_bytes());
            Ok(ResolvedInput {
                geometry: geometry.clone(),
                reference: format!("{hash:#x}"),
                proof_context: None,
            })
        }

        Input::OnchainRef { uid } => {
            let fetched = eas_client
                .get_attestation(
                    endpoint.chain_id,
                    &endpoint.rpc_url,
                    endpoint.eas_contract,
                    uid,
                )
                .await
                .map_err(|e| DomainError::NotFound(e.to_string()))?;

            let decoded = decode_location_attestation(&fetched.data)
                .map_err(|e| DomainError::invalid(format!("attestation data is not a location claim: {e}")))?;

            if decoded.location.trim().is_empty() {
                return Err(DomainError::invalid("attestation location is empty"));
            }
            let parsed: geojson::GeoJson = decoded
                .location
                .parse()
                .map_err(|e| DomainError::invalid(format!("attestation location is not valid GeoJSON: {e}")))?;

            // §4.3: accept either a bare geometry or a GeoJSON Feature,
            // extracting Feature.geometry in the latter case.
            let geometry = match parsed {
                geojson::GeoJson::Geometry(g) => g,
                geojson::GeoJson::Feature(f) => f.geometry.ok_or_else(|| {
                    DomainError::invalid("attestation location feature has no geometry")
                })?,
                geojson::GeoJson::FeatureCollection(_) => {
                    return Err(DomainError::invalid(
                        "attestation location must be a geometry or a single feature, not a feature collection",
                    ))
                }
            };
            astral_models::geometry::validate(&geometry)
                .map_err(|e| DomainError::invalid(e.to_string()))?;

            Ok(ResolvedInput {
                geometry,
                reference: format!("{:#x}", fetched.uid),
                proof_context: None,
            })
        }

        Input::OffchainRef { .. } => Err(DomainError::NotImplemented(
            "off-chain reference resolution is not implemented".to_string(),
        )),

        Input::VerifiedProof(proof) => {
            let geometry = proof
                .proof
                .claim
                .location
                .as_geometry()
                .ok_or_else(|| {
                    DomainError::invalid("verified proof's claim location is not a geometry")
                })?
                .clone();
            astral_models::geometry::validate(&geometry)
                .map_err(|e| DomainError::invalid(e.to_string()))?;

            Ok(ResolvedInput {
                geometry,
                reference: proof.attestation.uid.clone(),
                proof_context: Some(ProofContext {
                    reference: proof.attestation.uid.clone(),
                    credibility: proof.credibility.clone(),
                    claim: proof.proof.claim.clone(),
                    evaluated_at: proof.evaluated_at,
                    evaluation_method: proof.evaluation_method.clone(),
                }),
            })
        }
    }
}

/// Resolves many inputs concurrently; fails fast on the first error, which
/// is appropriate here since a multi-geometry compute request is only ever
/// as valid as its weakest input.
pub async fn resolve_many(
    inputs: &[Input],
    endpoint: &ChainEndpoint,
    eas_client: &EasClient,
) -> Result<Vec<ResolvedInput>, DomainError> {
    try_join_all(inputs.iter().map(|i| resolve(i, endpoint, eas_client))).await
}
