//! The `LocationPlugin` trait (§3.5, component C6): one implementation per
//! location-proof mechanism (device attestation, network triangulation,
//! ...). Plugins are synchronous — verification is pure signature/structure
//! checking, never I/O.

use astral_geometry::distance as geodesic_distance;
use astral_models::{LocationClaim, LocationStamp, PluginDescriptor};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone)]
pub struct StampVerificationResult {
    pub signatures_valid: bool,
    pub structure_valid: bool,
    pub signals_consistent: bool,
    pub details: JsonValue,
}

impl StampVerificationResult {
    pub fn all_valid(&self) -> bool {
        self.signatures_valid && self.structure_valid && self.signals_consistent
    }
}

/// A plugin's spatial/temporal read on how well a stamp supports a claim
/// (§4.6). `distance_meters` is `None` when the stamp's location isn't a
/// geometry the plugin can measure against (e.g. an opaque location value).
#[derive(Debug, Clone)]
pub struct StampEvaluationResult {
    pub distance_meters: Option<f64>,
    pub temporal_overlap: f64,
    pub within_radius: bool,
    pub details: JsonValue,
}

pub trait LocationPlugin: Send + Sync {
    fn name(&self) -> &'static str;
    fn version(&self) -> &'static str;
    fn environments(&self) -> &'static [&'static str];
    fn description(&self) -> &'static str;

    fn verify(&self, stamp: &LocationStamp) -> StampVerificationResult;

    /// Measures a stamp's location and temporal footprint against the
    /// claim it's meant to support (§4.6).
    fn evaluate(&self, stamp: &LocationStamp, claim: &LocationClaim) -> StampEvaluationResult;

    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor {
            name: self.name().to_string(),
            version: self.version().to_string(),
            environments: self.environments().iter().map(|s| s.to_string()).collect(),
            description: self.description().to_string(),
        }
    }
}

/// Shared spatial/temporal measurement every built-in plugin's `evaluate`
/// delegates to: the mechanism-specific checks live in each plugin, but the
/// geometry and overlap math is the same regardless of which one is asked.
pub fn geometric_evaluation(stamp: &LocationStamp, claim: &LocationClaim) -> StampEvaluationResult {
    let distance_meters = claim.location.as_geometry().and_then(|claim_geometry| {
        let stamp_geometry = stamp.location.as_geometry()?;
        let a = astral_geometry::to_geo(claim_geometry).ok()?;
        let b = astral_geometry::to_geo(stamp_geometry).ok()?;
        geodesic_distance(&a, &b).ok()
    });
    let within_radius = distance_meters.map(|d| d <= claim.radius).unwrap_or(false);
    let temporal_overlap = claim.time.overlap_fraction(&stamp.temporal_footprint);

    StampEvaluationResult {
        distance_meters,
        temporal_overlap,
        within_radius,
        details: serde_json::json!({
            "distanceMeters": distance_meters,
            "withinRadius": within_radius,
        }),
    }
}
