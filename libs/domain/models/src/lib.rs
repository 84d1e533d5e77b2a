//! Wire and domain types shared across Astral's resolver, compute, and
//! verification pipelines. Framework-agnostic: no HTTP or signing
//! dependencies live here.

pub mod attestation;
pub mod canon;
pub mod claim;
pub mod credibility;
pub mod geometry;
pub mod input;
pub mod problem;
pub mod resolved;
pub mod response;
pub mod stamp;

pub use attestation::{
    DelegatedAttestation, FlatAttestation, FullAttestation, NumericOperation,
    CENTIMETERS_PER_METER, SQUARE_CENTIMETERS_PER_SQUARE_METER,
};
pub use claim::{LocationClaim, LocationValue, Subject, TimeRange};
pub use credibility::{
    clamp_distance_u32, to_basis_points, CredibilityMeta, CredibilityVector, EvaluationMode,
    IndependenceDimension, SpatialDimension, StampResult, TemporalDimension, ValidityDimension,
    DISTANCE_SENTINEL_METERS,
};
pub use input::{is_address_hex, is_bytes32_hex, Input};
pub use problem::{DomainError, ProblemDetails};
pub use resolved::{ProofContext, ResolvedInput};
pub use response::{
    BooleanComputeResponse, NumericComputeResponse, PluginDescriptor, PluginListResponse,
    ProofInputEcho, StampVerificationResponse, VerifiedLocationProofResponse,
};
pub use stamp::{LocationProof, LocationStamp, StampSignature};
