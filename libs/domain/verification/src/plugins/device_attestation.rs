//! Device-attestation plugin. v0 only checks stamp structure — it does not
//! verify the device attestation chain (TPM/SafetyNet/App Attest quote)
//! against a hardware root of trust, since that requires a per-vendor
//! attestation service this oracle does not operate. Treat
//! `signatures_valid` here as "well-formed", not "cryptographically proven".

use crate::plugin::{LocationPlugin, StampEvaluationResult, StampVerificationResult};
use astral_models::{LocationClaim, LocationStamp};
use serde_json::json;

pub struct DeviceAttestationPlugin;

impl LocationPlugin for DeviceAttestationPlugin {
    fn name(&self) -> &'static str {
        "device-attestation"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn environments(&self) -> &'static [&'static str] {
        &["ios", "android"]
    }

    fn description(&self) -> &'static str {
        "Structural validation of mobile device location stamps; does not verify the hardware attestation chain."
    }

    fn verify(&self, stamp: &LocationStamp) -> StampVerificationResult {
        let structure_valid = stamp.validate().is_ok() && !stamp.signals.is_empty();

        let signatures_valid = !stamp.signatures.is_empty()
            && stamp
                .signatures
                .iter()
                .all(|s| !s.value.is_empty() && !s.signer.value.is_empty());

        let signals_consistent = stamp.signals.contains_key("accuracyMeters")
            || stamp.signals.contains_key("provider");

        StampVerificationResult {
            signatures_valid,
            structure_valid,
            signals_consistent,
            details: json!({
                "method": "structural-only",
                "note": "device attestation chain not cryptographically verified in v0",
            }),
        }
    }

    fn evaluate(&self, stamp: &LocationStamp, claim: &LocationClaim) -> StampEvaluationResult {
        crate::plugin::geometric_evaluation(stamp, claim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astral_models::claim::{LocationValue, Subject, TimeRange};
    use astral_models::StampSignature;
    use geojson::{Geometry, Value};
    use serde_json::Map;

    fn sample_stamp(signatures: Vec<StampSignature>) -> LocationStamp {
        let mut signals = Map::new();
        signals.insert("provider".to_string(), json!("gps"));
        LocationStamp {
            lp_version: "0.2".to_string(),
            location_type: "Point".to_string(),
            location: LocationValue::Geometry(Geometry::new(Value::Point(vec![0.0, 0.0]))),
            srs: "EPSG:4326".to_string(),
            temporal_footprint: TimeRange {
                start: 1_700_000_000,
                end: 1_700_000_000,
            },
            plugin: "device-attestation".to_string(),
            plugin_version: "0.1.0".to_string(),
            signals,
            signatures,
        }
    }

    #[test]
    fn rejects_stamp_with_no_signatures() {
        let plugin = DeviceAttestationPlugin;
        let result = plugin.verify(&sample_stamp(vec![]));
        assert!(!result.signatures_valid);
    }

    #[test]
    fn accepts_well_formed_stamp() {
        let plugin = DeviceAttestationPlugin;
        let sig = StampSignature {
            signer: Subject {
                scheme: "eth-address".to_string(),
                value: "0xabc".to_string(),
            },
            algorithm: "ecdsa".to_string(),
            value: "0xdeadbeef".to_string(),
            timestamp: 1_700_000_000,
        };
        let result = plugin.verify(&sample_stamp(vec![sig]));
        assert!(result.all_valid());
    }
}
