//! `/compute/v0/*` handlers (§4.5, §6.1, component C5): each follows the
//! same seven-step pipeline — validate, resolve, type-check, compute,
//! scale, sign, assemble.

use crate::handlers::{
    extract_proof_metadata, now_secs, problem_response, resolve_recipient, resolve_schema,
    CommonComputeFields,
};
use crate::state::AppState;
use astral_models::{
    BooleanComputeResponse, DomainError, Input, NumericComputeResponse, NumericOperation,
    ResolvedInput,
};
use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceRequest {
    #[serde(flatten)]
    pub common: CommonComputeFields,
    pub from: Input,
    pub to: Input,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthRequest {
    #[serde(flatten)]
    pub common: CommonComputeFields,
    pub geometry: Input,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRequest {
    #[serde(flatten)]
    pub common: CommonComputeFields,
    pub geometry: Input,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainsRequest {
    #[serde(flatten)]
    pub common: CommonComputeFields,
    pub container: Input,
    pub containee: Input,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithinRequest {
    #[serde(flatten)]
    pub common: CommonComputeFields,
    /// Older callers may send `point` instead of `geometry` (§9).
    #[serde(default)]
    pub geometry: Option<Input>,
    #[serde(default)]
    pub point: Option<Input>,
    pub target: Input,
    pub radius: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectsRequest {
    #[serde(flatten)]
    pub common: CommonComputeFields,
    pub geometry1: Input,
    pub geometry2: Input,
}

async fn resolve_inputs(
    state: &AppState,
    common: &CommonComputeFields,
    inputs: &[Input],
) -> Result<(astral_resolver::ChainEndpoint, Vec<ResolvedInput>), DomainError> {
    let endpoint = state.endpoint(common.chain_id)?;
    let resolved = astral_resolver::resolve_many(inputs, &endpoint, &state.eas_client).await?;
    Ok((endpoint, resolved))
}

async fn numeric_response(
    state: &AppState,
    common: &CommonComputeFields,
    endpoint: &astral_resolver::ChainEndpoint,
    resolved: &[ResolvedInput],
    operation: NumericOperation,
    value: f64,
) -> Result<NumericComputeResponse, DomainError> {
    let metadata = extract_proof_metadata(resolved)?;

    let schema_default = state
        .config
        .chains
        .get(&common.chain_id)
        .and_then(|c| c.schemas.numeric);
    let schema = resolve_schema(&common.schema, schema_default, "schema")?;
    let recipient = resolve_recipient(&common.recipient)?;
    let timestamp = now_secs();
    let scaled = astral_compute::scale_for_attestation(operation, value);

    let (attestation, delegated) = state.signer.sign_numeric(
        common.chain_id,
        endpoint.eas_contract,
        schema,
        recipient,
        scaled,
        operation.encoded_units(),
        operation.as_str(),
        timestamp as u64,
        &metadata.input_refs,
        metadata.ref_uid,
    )?;

    Ok(NumericComputeResponse {
        result: value,
        units: operation.units().to_string(),
        operation: operation.as_str().to_string(),
        timestamp,
        input_refs: metadata.input_refs.iter().map(|r| format!("{r:#x}")).collect(),
        attestation,
        delegated_attestation: delegated,
        proof_inputs: metadata.proof_inputs,
    })
}

async fn boolean_response(
    state: &AppState,
    common: &CommonComputeFields,
    endpoint: &astral_resolver::ChainEndpoint,
    resolved: &[ResolvedInput],
    operation: String,
    value: bool,
) -> Result<BooleanComputeResponse, DomainError> {
    let metadata = extract_proof_metadata(resolved)?;

    let schema_default = state
        .config
        .chains
        .get(&common.chain_id)
        .and_then(|c| c.schemas.boolean);
    let schema = resolve_schema(&common.schema, schema_default, "schema")?;
    let recipient = resolve_recipient(&common.recipient)?;
    let timestamp = now_secs();

    let (attestation, delegated) = state.signer.sign_boolean(
        common.chain_id,
        endpoint.eas_contract,
        schema,
        recipient,
        value,
        &operation,
        timestamp as u64,
        &metadata.input_refs,
        metadata.ref_uid,
    )?;

    Ok(BooleanComputeResponse {
        result: value,
        operation,
        timestamp,
        input_refs: metadata.input_refs.iter().map(|r| format!("{r:#x}")).collect(),
        attestation,
        delegated_attestation: delegated,
        proof_inputs: metadata.proof_inputs,
    })
}

pub async fn distance(State(state): State<AppState>, Json(body): Json<DistanceRequest>) -> Response {
    let instance = "/compute/v0/distance";
    let inputs = [body.from, body.to];
    let outcome = async {
        let (endpoint, resolved) = resolve_inputs(&state, &body.common, &inputs).await?;
        let value = astral_compute::compute_distance(&resolved)?;
        numeric_response(&state, &body.common, &endpoint, &resolved, NumericOperation::Distance, value).await
    }
    .await;
    match outcome {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => problem_response(&err, instance),
    }
}

pub async fn length(State(state): State<AppState>, Json(body): Json<LengthRequest>) -> Response {
    let instance = "/compute/v0/length";
    let inputs = [body.geometry];
    let outcome = async {
        let (endpoint, resolved) = resolve_inputs(&state, &body.common, &inputs).await?;
        let value = astral_compute::compute_length(&resolved)?;
        numeric_response(&state, &body.common, &endpoint, &resolved, NumericOperation::Length, value).await
    }
    .await;
    match outcome {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => problem_response(&err, instance),
    }
}

pub async fn area(State(state): State<AppState>, Json(body): Json<AreaRequest>) -> Response {
    let instance = "/compute/v0/area";
    let inputs = [body.geometry];
    let outcome = async {
        let (endpoint, resolved) = resolve_inputs(&state, &body.common, &inputs).await?;
        let value = astral_compute::compute_area(&resolved)?;
        numeric_response(&state, &body.common, &endpoint, &resolved, NumericOperation::Area, value).await
    }
    .await;
    match outcome {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => problem_response(&err, instance),
    }
}

pub async fn contains(State(state): State<AppState>, Json(body): Json<ContainsRequest>) -> Response {
    let instance = "/compute/v0/contains";
    let inputs = [body.container, body.containee];
    let outcome = async {
        let (endpoint, resolved) = resolve_inputs(&state, &body.common, &inputs).await?;
        let value = astral_compute::compute_contains(&resolved)?;
        boolean_response(&state, &body.common, &endpoint, &resolved, "contains".to_string(), value).await
    }
    .await;
    match outcome {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => problem_response(&err, instance),
    }
}

pub async fn within(State(state): State<AppState>, Json(body): Json<WithinRequest>) -> Response {
    let instance = "/compute/v0/within";
    let geometry = match body.geometry.or(body.point) {
        Some(g) => g,
        None => {
            return problem_response(
                &DomainError::invalid("within requires a geometry (or legacy point) field"),
                instance,
            )
        }
    };
    if !(body.radius > 0.0) {
        return problem_response(&DomainError::invalid("radius must be > 0"), instance);
    }
    let inputs = [geometry, body.target];
    let operation = format!("within:{}", body.radius);
    let outcome = async {
        let (endpoint, resolved) = resolve_inputs(&state, &body.common, &inputs).await?;
        let value = astral_compute::compute_within(&resolved, body.radius)?;
        boolean_response(&state, &body.common, &endpoint, &resolved, operation, value).await
    }
    .await;
    match outcome {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => problem_response(&err, instance),
    }
}

pub async fn intersects(State(state): State<AppState>, Json(body): Json<IntersectsRequest>) -> Response {
    let instance = "/compute/v0/intersects";
    let inputs = [body.geometry1, body.geometry2];
    let outcome = async {
        let (endpoint, resolved) = resolve_inputs(&state, &body.common, &inputs).await?;
        let value = astral_compute::compute_intersects(&resolved)?;
        boolean_response(&state, &body.common, &endpoint, &resolved, "intersects".to_string(), value).await
    }
    .await;
    match outcome {
        Ok(resp) => Json(resp).into_response(),
        Err(err) => problem_response(&err, instance),
    }
}
