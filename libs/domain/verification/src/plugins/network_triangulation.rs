//! Network-triangulation plugin: each signature is a real ECDSA signature
//! over the canonical JSON of the stamp's signals, produced by a
//! triangulating network node. Unlike device attestation, this plugin
//! cryptographically recovers and checks the signer.

use crate::plugin::{LocationPlugin, StampEvaluationResult, StampVerificationResult};
use alloy::primitives::{keccak256, Signature};
use astral_models::{LocationClaim, LocationStamp};
use serde_json::json;

pub struct NetworkTriangulationPlugin;

impl LocationPlugin for NetworkTriangulationPlugin {
    fn name(&self) -> &'static str {
        "network-triangulation"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn environments(&self) -> &'static [&'static str] {
        &["cellular", "wifi"]
    }

    fn description(&self) -> &'static str {
        "Verifies ECDSA signatures from triangulating network nodes over the stamp's signal set."
    }

    fn verify(&self, stamp: &LocationStamp) -> StampVerificationResult {
        let structure_valid = stamp.validate().is_ok()
            && stamp.signals.contains_key("nodes")
            && stamp
                .signals
                .get("nodes")
                .and_then(|n| n.as_array())
                .map(|a| a.len() >= 3)
                .unwrap_or(false);

        let signals_json = serde_json::Value::Object(stamp.signals.clone());
        let canonical = astral_models::canon::canonicalize(&signals_json);
        let message_hash = keccak256(canonical.as_bytes());

        let mut recovered_count = 0usize;
        for sig in &stamp.signatures {
            if sig.algorithm != "secp256k1" && sig.algorithm != "ecdsa" {
                continue;
            }
            let Some(sig_bytes) = sig.value.strip_prefix("0x").and_then(|h| hex::decode(h).ok())
            else {
                continue;
            };
            let Ok(signature) = Signature::from_raw(&sig_bytes) else {
                continue;
            };
            let Ok(recovered) = signature.recover_address_from_prehash(&message_hash) else {
                continue;
            };
            if format!("{recovered:#x}").eq_ignore_ascii_case(&sig.signer.value) {
                recovered_count += 1;
            }
        }

        let signatures_valid = !stamp.signatures.is_empty() && recovered_count == stamp.signatures.len();
        let signals_consistent = recovered_count >= 3;

        StampVerificationResult {
            signatures_valid,
            structure_valid,
            signals_consistent,
            details: json!({
                "method": "ecdsa-recovery",
                "recovered_signatures": recovered_count,
                "total_signatures": stamp.signatures.len(),
            }),
        }
    }

    fn evaluate(&self, stamp: &LocationStamp, claim: &LocationClaim) -> StampEvaluationResult {
        crate::plugin::geometric_evaluation(stamp, claim)
    }
}
