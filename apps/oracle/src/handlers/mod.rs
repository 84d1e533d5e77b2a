//! HTTP handlers (§6): one module per route family, sharing the request
//! plumbing (schema/recipient defaulting, proof-metadata extraction, RFC
//! 7807 error rendering) defined here.

pub mod compute;
pub mod health;
pub mod plugins;
pub mod verify;

use alloy::primitives::{Address, B256};
use astral_models::{DomainError, ProblemDetails, ProofInputEcho, ResolvedInput};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use std::str::FromStr;

/// Renders a `DomainError` as an RFC 7807 problem response (§6.4).
pub fn problem_response(err: &DomainError, instance: &str) -> Response {
    let problem = err.to_problem(instance);
    let status =
        StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(problem)).into_response()
}

pub fn parse_b256(s: &str, field: &str) -> Result<B256, DomainError> {
    B256::from_str(s).map_err(|_| DomainError::invalid(format!("{field} must be 0x + 64 hex characters")))
}

pub fn parse_address(s: &str, field: &str) -> Result<Address, DomainError> {
    Address::from_str(s).map_err(|_| DomainError::invalid(format!("{field} must be 0x + 40 hex characters")))
}

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Resolves the schema to sign with: the request's explicit override, or
/// the chain's configured default for that operation family (§4.9).
/// Absent and unoverridden is *invalid input*.
pub fn resolve_schema(
    requested: &Option<String>,
    default: Option<B256>,
    field: &str,
) -> Result<B256, DomainError> {
    match requested {
        Some(s) => parse_b256(s, field),
        None => default.ok_or_else(|| {
            DomainError::invalid(format!(
                "no schema supplied and no chain default configured for {field}"
            ))
        }),
    }
}

pub fn resolve_recipient(requested: &Option<String>) -> Result<Address, DomainError> {
    match requested {
        Some(s) => parse_address(s, "recipient"),
        None => Ok(Address::ZERO),
    }
}

pub fn now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock is after the unix epoch")
        .as_secs() as i64
}

/// Extracts `{inputRefs, proofInputs?, refUid?}` from a set of resolved
/// inputs (§4.3's `extractProofMetadata`): the first proof's attestation
/// UID becomes the response attestation's `refUID` (EAS supports only
/// one); every proof context is surfaced via `proofInputs`.
pub struct ProofMetadata {
    pub input_refs: Vec<B256>,
    pub proof_inputs: Option<Vec<ProofInputEcho>>,
    pub ref_uid: Option<B256>,
}

pub fn extract_proof_metadata(resolved: &[ResolvedInput]) -> Result<ProofMetadata, DomainError> {
    let mut input_refs = Vec::with_capacity(resolved.len());
    let mut proof_inputs = Vec::new();
    let mut ref_uid = None;

    for r in resolved {
        input_refs.push(parse_b256(&r.reference, "ref")?);
        if let Some(ctx) = &r.proof_context {
            if ref_uid.is_none() {
                ref_uid = Some(parse_b256(&ctx.reference, "verifiedProof.attestation.uid")?);
            }
            proof_inputs.push(ProofInputEcho {
                reference: ctx.reference.clone(),
                credibility: ctx.credibility.clone(),
                claim: ctx.claim.clone(),
                evaluated_at: ctx.evaluated_at,
                evaluation_method: ctx.evaluation_method.clone(),
            });
        }
    }

    Ok(ProofMetadata {
        input_refs,
        proof_inputs: if proof_inputs.is_empty() {
            None
        } else {
            Some(proof_inputs)
        },
        ref_uid,
    })
}

/// Fields common to every `/compute/v0/*` request body (§6.1).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonComputeFields {
    pub chain_id: u64,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
}
