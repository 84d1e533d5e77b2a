//! Converts a pipeline's floating-point result into the fixed-point integer
//! the attestation signer encodes on-chain (§3.4, §4.4).

use astral_models::NumericOperation;

/// Scales `value` by the operation's on-chain fixed-point factor and rounds
/// to the nearest integer. Distance/length scale to centimeters; area scales
/// to square centimeters.
pub fn scale_for_attestation(operation: NumericOperation, value: f64) -> i128 {
    (value * operation.scale()).round() as i128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_scales_to_centimeters() {
        assert_eq!(scale_for_attestation(NumericOperation::Distance, 123.45), 12345);
    }

    #[test]
    fn area_scales_to_square_centimeters() {
        assert_eq!(scale_for_attestation(NumericOperation::Area, 1.0), 10_000);
    }
}
