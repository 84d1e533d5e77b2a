//! The on-chain encoding of a Location Protocol v0.2 claim attestation: four
//! ABI strings — `lpVersion`, `srs`, `locationType`, `location` — registered
//! once per deployment as the schema a client references by UID instead of
//! inlining a geometry on every compute call (§3.2, §4.2).

use alloy::sol;
use alloy::sol_types::SolValue;

sol! {
    struct LocationAttestationData {
        string lpVersion;
        string srs;
        string locationType;
        string location;
    }
}

#[derive(Debug, Clone)]
pub struct DecodedLocationAttestation {
    pub lp_version: String,
    pub srs: String,
    pub location_type: String,
    pub location: String,
}

pub fn encode_location_attestation(
    lp_version: &str,
    srs: &str,
    location_type: &str,
    location: &str,
) -> Vec<u8> {
    LocationAttestationData {
        lpVersion: lp_version.to_string(),
        srs: srs.to_string(),
        locationType: location_type.to_string(),
        location: location.to_string(),
    }
    .abi_encode()
}

/// ABI-decodes the four-string LP v0.2 schema (§4.2). Fails with a decode
/// error for anything else — there is no fallback schema.
pub fn decode_location_attestation(data: &[u8]) -> Result<DecodedLocationAttestation, String> {
    LocationAttestationData::abi_decode(data, true)
        .map(|d| DecodedLocationAttestation {
            lp_version: d.lpVersion,
            srs: d.srs,
            location_type: d.locationType,
            location: d.location,
        })
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_and_decodes_the_four_string_schema() {
        let encoded = encode_location_attestation("0.2", "EPSG:4326", "Point", "{\"type\":\"Point\",\"coordinates\":[1,2]}");
        let decoded = decode_location_attestation(&encoded).unwrap();
        assert_eq!(decoded.lp_version, "0.2");
        assert_eq!(decoded.srs, "EPSG:4326");
        assert_eq!(decoded.location_type, "Point");
        assert_eq!(decoded.location, "{\"type\":\"Point\",\"coordinates\":[1,2]}");
    }

    #[test]
    fn rejects_data_that_is_not_the_four_string_schema() {
        assert!(decode_location_attestation(&[0x01, 0x02, 0x03]).is_err());
    }
}
