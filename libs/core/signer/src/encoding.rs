//! ABI encoding of the three Location Protocol attestation payload shapes
//! (§3.4, §4.4–§4.6). Each maps to a schema registered once per deployment;
//! the oracle only needs to encode `data` consistently with that schema.

use alloy::primitives::{Bytes, FixedBytes, B256, U256};
use alloy::sol;
use alloy::sol_types::SolValue;

sol! {
    struct NumericAttestationData {
        uint256 result;
        string units;
        bytes32[] inputRefs;
        uint256 timestamp;
        string operation;
    }

    struct BooleanAttestationData {
        bool result;
        bytes32[] inputRefs;
        uint256 timestamp;
        string operation;
    }

    struct VerifyAttestationData {
        bytes32 proofHash;
        uint32 meanDistanceMeters;
        uint32 maxDistanceMeters;
        uint16 withinRadiusBp;
        uint16 meanOverlapBp;
        uint16 minOverlapBp;
        uint16 signaturesValidBp;
        uint16 structureValidBp;
        uint16 signalsConsistentBp;
        uint16 uniquePluginRatioBp;
        uint8 stampCount;
    }
}

pub fn encode_numeric(
    result_scaled: i128,
    units: &str,
    operation: &str,
    timestamp: u64,
    input_refs: &[B256],
) -> Bytes {
    let payload = NumericAttestationData {
        result: U256::try_from(result_scaled).expect("scaled numeric result fits in uint256"),
        units: units.to_string(),
        inputRefs: input_refs.iter().map(|r| FixedBytes::from(*r)).collect(),
        timestamp: U256::from(timestamp),
        operation: operation.to_string(),
    };
    Bytes::from(payload.abi_encode())
}

pub fn encode_boolean(
    result: bool,
    operation: &str,
    timestamp: u64,
    input_refs: &[B256],
) -> Bytes {
    let payload = BooleanAttestationData {
        result,
        inputRefs: input_refs.iter().map(|r| FixedBytes::from(*r)).collect(),
        timestamp: U256::from(timestamp),
        operation: operation.to_string(),
    };
    Bytes::from(payload.abi_encode())
}

#[allow(clippy::too_many_arguments)]
pub fn encode_verify(
    proof_hash: B256,
    mean_distance_meters: u32,
    max_distance_meters: u32,
    within_radius_bp: u16,
    mean_overlap_bp: u16,
    min_overlap_bp: u16,
    signatures_valid_bp: u16,
    structure_valid_bp: u16,
    signals_consistent_bp: u16,
    unique_plugin_ratio_bp: u16,
    stamp_count: u8,
) -> Bytes {
    let payload = VerifyAttestationData {
        proofHash: proof_hash,
        meanDistanceMeters: mean_distance_meters,
        maxDistanceMeters: max_distance_meters,
        withinRadiusBp: within_radius_bp,
        meanOverlapBp: mean_overlap_bp,
        minOverlapBp: min_overlap_bp,
        signaturesValidBp: signatures_valid_bp,
        structureValidBp: structure_valid_bp,
        signalsConsistentBp: signals_consistent_bp,
        uniquePluginRatioBp: unique_plugin_ratio_bp,
        stampCount: stamp_count,
    };
    Bytes::from(payload.abi_encode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_encoding_round_trips_through_abi_decode() {
        let refs = vec![B256::repeat_byte(0xAB)];
        let encoded = encode_numeric(123_450, "meters", "distance", 1_700_000_000, &refs);
        let decoded = NumericAttestationData::abi_decode(&encoded, true).unwrap();
        assert_eq!(decoded.result, U256::from(123_450u64));
        assert_eq!(decoded.units, "meters");
        assert_eq!(decoded.operation, "distance");
        assert_eq!(decoded.timestamp, U256::from(1_700_000_000u64));
        assert_eq!(decoded.inputRefs.len(), 1);
    }

    #[test]
    fn boolean_encoding_round_trips() {
        let refs = vec![B256::repeat_byte(0x01), B256::repeat_byte(0x02)];
        let encoded = encode_boolean(true, "contains", 1_700_000_000, &refs);
        let decoded = BooleanAttestationData::abi_decode(&encoded, true).unwrap();
        assert!(decoded.result);
        assert_eq!(decoded.operation, "contains");
        assert_eq!(decoded.inputRefs.len(), 2);
    }

    #[test]
    fn verify_encoding_round_trips_all_eleven_fields() {
        let proof_hash = B256::repeat_byte(0x07);
        let encoded = encode_verify(proof_hash, 12, 45, 9_500, 8_000, 7_500, 10_000, 10_000, 6_000, 5_000, 3);
        let decoded = VerifyAttestationData::abi_decode(&encoded, true).unwrap();
        assert_eq!(decoded.proofHash, proof_hash);
        assert_eq!(decoded.meanDistanceMeters, 12);
        assert_eq!(decoded.maxDistanceMeters, 45);
        assert_eq!(decoded.withinRadiusBp, 9_500);
        assert_eq!(decoded.meanOverlapBp, 8_000);
        assert_eq!(decoded.minOverlapBp, 7_500);
        assert_eq!(decoded.signaturesValidBp, 10_000);
        assert_eq!(decoded.structureValidBp, 10_000);
        assert_eq!(decoded.signalsConsistentBp, 6_000);
        assert_eq!(decoded.uniquePluginRatioBp, 5_000);
        assert_eq!(decoded.stampCount, 3);
    }
}
