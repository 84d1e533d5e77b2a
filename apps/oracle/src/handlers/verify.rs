//! `/verify/v0/*` handlers (§4.6–§4.7, §6.1, components C6+C7).

use crate::handlers::{now_secs, parse_address, parse_b256, problem_response};
use crate::state::AppState;
use alloy::primitives::{keccak256, B256};
use astral_models::{
    CredibilityVector, DomainError, EvaluationMode, LocationProof, LocationStamp,
    StampVerificationResponse, VerifiedLocationProofResponse,
};
use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StampVerifyRequest {
    pub stamp: LocationStamp,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProofVerifyOptions {
    #[serde(default)]
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    /// Reserved (§5 non-goals: no on-chain submission in this service).
    #[serde(default)]
    pub submit_onchain: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ProofVerifyRequest {
    pub proof: LocationProof,
    #[serde(default)]
    pub options: ProofVerifyOptions,
}

pub async fn stamp(State(state): State<AppState>, Json(body): Json<StampVerifyRequest>) -> Response {
    let instance = "/verify/v0/stamp";
    if let Err(e) = body.stamp.validate() {
        return problem_response(&DomainError::invalid(e), instance);
    }
    let plugin = match state.plugins.get(&body.stamp.plugin) {
        Some(p) => p,
        None => {
            return problem_response(
                &DomainError::invalid(format!("unsupported plugin: {}", body.stamp.plugin)),
                instance,
            )
        }
    };
    let result = plugin.verify(&body.stamp);
    let response = StampVerificationResponse {
        valid: result.all_valid(),
        signatures_valid: result.signatures_valid,
        structure_valid: result.structure_valid,
        signals_consistent: result.signals_consistent,
        details: result.details,
    };
    Json(response).into_response()
}

/// The eleven fields of the verify attestation payload, derived directly
/// from the credibility vector's own measurements (§3.8, §4.7): two
/// distances clamped to `uint32`, seven fractions encoded as basis points,
/// and the stamp count clamped to `uint8`.
#[allow(clippy::type_complexity)]
fn verify_payload_fields(
    vector: &CredibilityVector,
) -> (u32, u32, u16, u16, u16, u16, u16, u16, u16, u8) {
    use astral_models::{clamp_distance_u32, to_basis_points};

    (
        clamp_distance_u32(vector.spatial.mean_distance_meters),
        clamp_distance_u32(vector.spatial.max_distance_meters),
        to_basis_points(vector.spatial.within_radius_fraction),
        to_basis_points(vector.temporal.mean_overlap),
        to_basis_points(vector.temporal.min_overlap),
        to_basis_points(vector.validity.signatures_valid_fraction),
        to_basis_points(vector.validity.structure_valid_fraction),
        to_basis_points(vector.validity.signals_consistent_fraction),
        to_basis_points(vector.independence.unique_plugin_ratio),
        vector.meta.stamp_count.min(u8::MAX as usize) as u8,
    )
}

pub async fn proof(State(state): State<AppState>, Json(body): Json<ProofVerifyRequest>) -> Response {
    let instance = "/verify/v0/proof";

    if let Err(e) = body.proof.validate() {
        return problem_response(&DomainError::invalid(e), instance);
    }

    let outcome = async {
        let chain_id = body
            .options
            .chain_id
            .ok_or_else(|| DomainError::invalid("options.chainId is required"))?;
        let endpoint = state.endpoint(chain_id)?;

        let schema_default = state
            .config
            .chains
            .get(&chain_id)
            .and_then(|c| c.schemas.verify);
        let schema = match &body.options.schema {
            Some(s) => parse_b256(s, "options.schema")?,
            None => schema_default
                .ok_or_else(|| DomainError::invalid("no schema configured for verify on this chain"))?,
        };
        let recipient = match &body.options.recipient {
            Some(r) => parse_address(r, "options.recipient")?,
            None => alloy::primitives::Address::ZERO,
        };

        let evaluated_at = now_secs();
        let credibility = astral_verification::evaluate_proof(
            &body.proof,
            &state.plugins,
            state.config.evaluation_mode,
            evaluated_at,
        )
        .await;

        let proof_json =
            serde_json::to_vec(&body.proof).map_err(|e| DomainError::Internal(e.to_string()))?;
        let proof_hash = keccak256(&proof_json);
        let synthetic_uid = keccak256(format!("{proof_hash:#x}:{evaluated_at}").as_bytes());

        let (
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
        ) = verify_payload_fields(&credibility);
        let evaluation_method = evaluation_method_label(state.config.evaluation_mode);

        let (flat, delegated) = state.signer.sign_verify(
            chain_id,
            endpoint.eas_contract,
            schema,
            recipient,
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
            None,
        )?;

        let attestation = astral_models::FullAttestation {
            uid: format!("{synthetic_uid:#x}"),
            schema: flat.schema,
            attester: flat.attester,
            recipient: flat.recipient,
            revocable: true,
            ref_uid: format!("{:#x}", B256::ZERO),
            data: flat.data,
            time: evaluated_at,
            expiration_time: 0,
            revocation_time: 0,
            signature: flat.signature,
        };

        Ok::<VerifiedLocationProofResponse, DomainError>(VerifiedLocationProofResponse {
            proof: body.proof.clone(),
            credibility,
            attestation,
            delegated_attestation: delegated,
            chain_id,
            evaluation_method: evaluation_method.to_string(),
            evaluated_at,
        })
    }
    .await;

    match outcome {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => problem_response(&err, instance),
    }
}

fn evaluation_method_label(mode: EvaluationMode) -> &'static str {
    match mode {
        EvaluationMode::Local => "local",
        EvaluationMode::Tee => "tee",
        EvaluationMode::Zk => "zk",
    }
}
