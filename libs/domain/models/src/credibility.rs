//! `CredibilityVector` — the four-dimensional output of proof verification
//! (§3.6). Never collapsed into a single score.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Sentinel for "no finite distance observed" / non-point geometry: 2^32 - 1.
pub const DISTANCE_SENTINEL_METERS: f64 = 4_294_967_295.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialDimension {
    pub mean_distance_meters: f64,
    pub max_distance_meters: f64,
    pub within_radius_fraction: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalDimension {
    pub mean_overlap: f64,
    pub min_overlap: f64,
    pub fully_overlapping_fraction: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidityDimension {
    pub signatures_valid_fraction: f64,
    pub structure_valid_fraction: f64,
    pub signals_consistent_fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndependenceDimension {
    pub unique_plugin_ratio: f64,
    pub spatial_agreement: f64,
    pub plugin_names: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    Local,
    Tee,
    Zk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityMeta {
    pub stamp_count: usize,
    pub evaluated_at: i64,
    pub evaluation_mode: EvaluationMode,
}

/// Per-stamp verify+evaluate outcome, one entry per stamp in request order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampResult {
    pub stamp_index: usize,
    pub plugin: String,
    pub signatures_valid: bool,
    pub structure_valid: bool,
    pub signals_consistent: bool,
    pub distance_meters: Option<f64>,
    pub temporal_overlap: f64,
    pub within_radius: bool,
    pub details: JsonValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityVector {
    pub spatial: SpatialDimension,
    pub temporal: TemporalDimension,
    pub validity: ValidityDimension,
    pub independence: IndependenceDimension,
    pub stamp_results: Vec<StampResult>,
    pub meta: CredibilityMeta,
}

/// Encode a fraction in [0, 1] as basis points (0..=10000), per §4.7.
pub fn to_basis_points(fraction: f64) -> u16 {
    (fraction.clamp(0.0, 1.0) * 10_000.0).round() as u16
}

/// Clamp a metre distance into the `uint32` range used by the verify
/// attestation payload.
pub fn clamp_distance_u32(meters: f64) -> u32 {
    meters.clamp(0.0, u32::MAX as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_points_round_trip_bounds() {
        assert_eq!(to_basis_points(0.0), 0);
        assert_eq!(to_basis_points(1.0), 10_000);
        assert_eq!(to_basis_points(0.5), 5_000);
        assert_eq!(to_basis_points(-1.0), 0);
        assert_eq!(to_basis_points(2.0), 10_000);
    }

    #[test]
    fn distance_clamp_saturates_at_u32_max() {
        assert_eq!(clamp_distance_u32(DISTANCE_SENTINEL_METERS), u32::MAX);
        assert_eq!(clamp_distance_u32(-5.0), 0);
    }
}
