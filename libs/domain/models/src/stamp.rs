//! `LocationStamp` / `LocationProof` — evidence from a proof-of-location
//! system and the claim+stamps bundle it supports (§3.5).

use crate::claim::{LocationClaim, LocationValue, Subject, TimeRange};
use serde::{Deserialize, Serialize};
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampSignature {
    pub signer: Subject,
    pub algorithm: String,
    pub value: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStamp {
    pub lp_version: String,
    pub location_type: String,
    pub location: LocationValue,
    pub srs: String,
    pub temporal_footprint: TimeRange,
    pub plugin: String,
    pub plugin_version: String,
    #[serde(default)]
    pub signals: JsonMap<String, JsonValue>,
    pub signatures: Vec<StampSignature>,
}

impl LocationStamp {
    pub fn validate(&self) -> Result<(), String> {
        if self.signatures.is_empty() {
            return Err("stamp must carry at least one signature".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationProof {
    pub claim: LocationClaim,
    pub stamps: Vec<LocationStamp>,
}

impl LocationProof {
    /// Invariants checked upstream by request validation (§4.7): claim is
    /// well-formed, at least one stamp, and every stamp has a signature.
    pub fn validate(&self) -> Result<(), String> {
        self.claim.validate()?;
        if self.stamps.is_empty() {
            return Err("proof must carry at least one stamp".to_string());
        }
        self.stamps.iter().try_for_each(LocationStamp::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::Subject;

    fn claim() -> LocationClaim {
        LocationClaim {
            lp_version: "0.2".to_string(),
            location_type: "geojson-point".to_string(),
            location: LocationValue::Opaque("8928308280fffff".to_string()),
            srs: "EPSG:4326".to_string(),
            subject: Subject {
                scheme: "eth-address".to_string(),
                value: "0x0".to_string(),
            },
            radius: 50.0,
            time: TimeRange { start: 0, end: 10 },
            event_type: None,
        }
    }

    #[test]
    fn rejects_proof_with_no_stamps() {
        let proof = LocationProof {
            claim: claim(),
            stamps: vec![],
        };
        assert!(proof.validate().is_err());
    }
}
