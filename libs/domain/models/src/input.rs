//! `Input` — the tagged union clients submit (§3.2, §9). Discriminated on
//! the presence of `type`/`coordinates` (or `geometries`) vs `uid` vs
//! `verifiedProof` keys, since the wire shape is a plain JSON object rather
//! than an externally tagged enum.

use crate::response::VerifiedLocationProofResponse;
use geojson::Geometry;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Input {
    RawGeometry(Geometry),
    OnchainRef { uid: String },
    /// Reserved: off-chain fetch is not implemented (§3.2, §4.3).
    OffchainRef { uid: String, uri: String },
    VerifiedProof(Box<VerifiedLocationProofResponse>),
}

impl<'de> Deserialize<'de> for Input {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        let obj = value
            .as_object()
            .ok_or_else(|| DeError::custom("input must be a JSON object"))?;

        if let Some(verified) = obj.get("verifiedProof") {
            let resp: VerifiedLocationProofResponse =
                serde_json::from_value(verified.clone()).map_err(DeError::custom)?;
            return Ok(Input::VerifiedProof(Box::new(resp)));
        }

        let looks_like_geometry = obj.contains_key("type")
            && (obj.contains_key("coordinates") || obj.contains_key("geometries"));
        if looks_like_geometry {
            let geometry: Geometry = serde_json::from_value(value).map_err(DeError::custom)?;
            return Ok(Input::RawGeometry(geometry));
        }

        if let Some(uid) = obj.get("uid").and_then(JsonValue::as_str) {
            return Ok(match obj.get("uri").and_then(JsonValue::as_str) {
                Some(uri) => Input::OffchainRef {
                    uid: uid.to_string(),
                    uri: uri.to_string(),
                },
                None => Input::OnchainRef {
                    uid: uid.to_string(),
                },
            });
        }

        Err(DeError::custom(
            "unrecognised input: expected a GeoJSON geometry, {uid}, {uid,uri}, or {verifiedProof}",
        ))
    }
}

/// A 32-byte hex string, `0x` + 64 hex characters.
pub fn is_bytes32_hex(s: &str) -> bool {
    s.len() == 66 && s.starts_with("0x") && s[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// A 20-byte hex address, `0x` + 40 hex characters.
pub fn is_address_hex(s: &str) -> bool {
    s.len() == 42 && s.starts_with("0x") && s[2..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_raw_point_geometry() {
        let v = serde_json::json!({"type": "Point", "coordinates": [1.0, 2.0]});
        let input: Input = serde_json::from_value(v).unwrap();
        assert!(matches!(input, Input::RawGeometry(_)));
    }

    #[test]
    fn parses_onchain_ref() {
        let v = serde_json::json!({"uid": "0x".to_string() + &"ab".repeat(32)});
        let input: Input = serde_json::from_value(v).unwrap();
        assert!(matches!(input, Input::OnchainRef { .. }));
    }

    #[test]
    fn parses_offchain_ref() {
        let v = serde_json::json!({"uid": "0xabc", "uri": "ipfs://x"});
        let input: Input = serde_json::from_value(v).unwrap();
        assert!(matches!(input, Input::OffchainRef { .. }));
    }

    #[test]
    fn rejects_unrecognised_shape() {
        let v = serde_json::json!({"nonsense": true});
        let result: Result<Input, _> = serde_json::from_value(v);
        assert!(result.is_err());
    }

    #[test]
    fn bytes32_hex_validation() {
        assert!(is_bytes32_hex(&("0x".to_string() + &"a".repeat(64))));
        assert!(!is_bytes32_hex("0xabc"));
        assert!(!is_address_hex(&("0x".to_string() + &"a".repeat(64))));
        assert!(is_address_hex(&("0x".to_string() + &"a".repeat(40))));
    }
}
