//! Attestation payload shapes (§3.8): the flat EAS-submittable object, its
//! delegated companion, and the full on-chain-shaped record used when a
//! verified proof is echoed back.

use serde::{Deserialize, Serialize};

/// Integer centimetres per metre — the scale for distance/length payloads.
pub const CENTIMETERS_PER_METER: f64 = 100.0;
/// Integer square centimetres per square metre — the scale for area payloads.
pub const SQUARE_CENTIMETERS_PER_SQUARE_METER: f64 = 10_000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatAttestation {
    pub schema: String,
    pub recipient: String,
    pub attester: String,
    /// 0x-prefixed hex of the ABI-encoded payload.
    pub data: String,
    /// 0x-prefixed hex, 65 bytes (132 hex chars including the prefix).
    pub signature: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatedAttestation {
    /// 0x-prefixed hex address of the attester.
    pub attester: String,
    pub deadline: u64,
    pub nonce: u64,
}

/// The full EAS on-chain attestation shape, used only in verify responses
/// where `uid`/`time`/`expirationTime`/`revocationTime` are meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAttestation {
    pub uid: String,
    pub schema: String,
    pub attester: String,
    pub recipient: String,
    pub revocable: bool,
    pub ref_uid: String,
    pub data: String,
    pub time: i64,
    pub expiration_time: u64,
    pub revocation_time: u64,
    pub signature: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOperation {
    Distance,
    Length,
    Area,
}

impl NumericOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            NumericOperation::Distance => "distance",
            NumericOperation::Length => "length",
            NumericOperation::Area => "area",
        }
    }

    pub fn units(self) -> &'static str {
        match self {
            NumericOperation::Distance | NumericOperation::Length => "meters",
            NumericOperation::Area => "square_meters",
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            NumericOperation::Distance | NumericOperation::Length => CENTIMETERS_PER_METER,
            NumericOperation::Area => SQUARE_CENTIMETERS_PER_SQUARE_METER,
        }
    }

    pub fn encoded_units(self) -> &'static str {
        match self {
            NumericOperation::Distance | NumericOperation::Length => "centimeters",
            NumericOperation::Area => "square_centimeters",
        }
    }
}
