//! Credibility aggregation (§3.5–§3.7, §4.7): runs every stamp in a
//! `LocationProof` through its declared plugin, then folds the per-stamp
//! results into the four credibility dimensions the oracle attests to.

use crate::registry::PluginRegistry;
use astral_models::{
    CredibilityMeta, CredibilityVector, EvaluationMode, IndependenceDimension, LocationClaim,
    LocationProof, LocationStamp, SpatialDimension, StampResult, TemporalDimension,
    ValidityDimension, DISTANCE_SENTINEL_METERS,
};
use futures::future::join;
use futures::future::join_all;
use serde_json::Value as JsonValue;

/// Runs one stamp's `verify` and `evaluate` concurrently against its
/// declared plugin (§4.7 point 1). An unrecognised plugin fails every
/// dimension rather than panicking.
async fn verify_stamp(
    index: usize,
    stamp: &LocationStamp,
    claim: &LocationClaim,
    registry: &PluginRegistry,
) -> StampResult {
    let (signatures_valid, structure_valid, signals_consistent, distance_meters, temporal_overlap, within_radius, details) =
        match registry.get(&stamp.plugin) {
            Some(plugin) => {
                let verifier = plugin.clone();
                let evaluator = plugin;
                let (verification, evaluation) = join(
                    async move { verifier.verify(stamp) },
                    async move { evaluator.evaluate(stamp, claim) },
                )
                .await;
                (
                    verification.signatures_valid,
                    verification.structure_valid,
                    verification.signals_consistent,
                    evaluation.distance_meters,
                    evaluation.temporal_overlap,
                    evaluation.within_radius,
                    merge_details(verification.details, evaluation.details),
                )
            }
            None => (
                false,
                false,
                false,
                None,
                0.0,
                false,
                serde_json::json!({"error": format!("unknown plugin: {}", stamp.plugin)}),
            ),
        };

    StampResult {
        stamp_index: index,
        plugin: stamp.plugin.clone(),
        signatures_valid,
        structure_valid,
        signals_consistent,
        distance_meters,
        temporal_overlap,
        within_radius,
        details,
    }
}

fn merge_details(verify: JsonValue, evaluate: JsonValue) -> JsonValue {
    serde_json::json!({ "verify": verify, "evaluate": evaluate })
}

/// Aggregates a full `LocationProof` into a `CredibilityVector`.
///
/// `evaluated_at` is a unix timestamp supplied by the caller rather than
/// read from the clock here, so the pipeline stays pure and testable.
/// Every stamp's `verify`/`evaluate` pair runs concurrently with every
/// other stamp's (§4.7 point 1).
pub async fn evaluate_proof(
    proof: &LocationProof,
    registry: &PluginRegistry,
    mode: EvaluationMode,
    evaluated_at: i64,
) -> CredibilityVector {
    let claim = &proof.claim;

    let stamp_results: Vec<StampResult> = join_all(
        proof
            .stamps
            .iter()
            .enumerate()
            .map(|(index, stamp)| verify_stamp(index, stamp, claim, registry)),
    )
    .await;

    let mut distances = Vec::new();
    let mut within_flags = Vec::new();
    let mut overlaps = Vec::new();
    let mut sig_valid_count = 0usize;
    let mut struct_valid_count = 0usize;
    let mut consistent_count = 0usize;
    // Insertion order from the stamp array (§4.7 point 2), not sorted.
    let mut plugin_names: Vec<String> = Vec::new();

    for result in &stamp_results {
        if !plugin_names.contains(&result.plugin) {
            plugin_names.push(result.plugin.clone());
        }
        if result.signatures_valid {
            sig_valid_count += 1;
        }
        if result.structure_valid {
            struct_valid_count += 1;
        }
        if result.signals_consistent {
            consistent_count += 1;
        }
        if let Some(d) = result.distance_meters {
            distances.push(d);
        }
        within_flags.push(result.within_radius);
        overlaps.push(result.temporal_overlap);
    }

    let stamp_count = proof.stamps.len().max(1) as f64;

    // §4.7: mean/max distance are taken over stamps with a finite distance
    // only; with none, both collapse to the u32 sentinel ceiling.
    let (mean_distance_meters, max_distance_meters) = if distances.is_empty() {
        (DISTANCE_SENTINEL_METERS, DISTANCE_SENTINEL_METERS)
    } else {
        (
            mean(&distances).min(DISTANCE_SENTINEL_METERS),
            distances
                .iter()
                .cloned()
                .fold(0.0_f64, f64::max)
                .min(DISTANCE_SENTINEL_METERS),
        )
    };

    let spatial = SpatialDimension {
        mean_distance_meters,
        max_distance_meters,
        within_radius_fraction: fraction_true(&within_flags),
    };

    let temporal = TemporalDimension {
        mean_overlap: mean(&overlaps),
        min_overlap: overlaps.iter().cloned().fold(1.0_f64, f64::min),
        fully_overlapping_fraction: overlaps.iter().filter(|&&o| o >= 0.999).count() as f64
            / stamp_count,
    };

    let validity = ValidityDimension {
        signatures_valid_fraction: sig_valid_count as f64 / stamp_count,
        structure_valid_fraction: struct_valid_count as f64 / stamp_count,
        signals_consistent_fraction: consistent_count as f64 / stamp_count,
    };

    // §4.7: spatialAgreement = max(count(within), count(outside)) / n.
    let within_count = within_flags.iter().filter(|f| **f).count();
    let outside_count = within_flags.len() - within_count;
    let spatial_agreement = within_count.max(outside_count) as f64 / stamp_count;

    let independence = IndependenceDimension {
        unique_plugin_ratio: plugin_names.len() as f64 / stamp_count,
        spatial_agreement,
        plugin_names,
    };

    CredibilityVector {
        spatial,
        temporal,
        validity,
        independence,
        stamp_results,
        meta: CredibilityMeta {
            stamp_count: proof.stamps.len(),
            evaluated_at,
            evaluation_mode: mode,
        },
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn fraction_true(flags: &[bool]) -> f64 {
    if flags.is_empty() {
        0.0
    } else {
        flags.iter().filter(|f| **f).count() as f64 / flags.len() as f64
    }
}
