//! Input resolution (§3.2–§3.3, component C3).

mod claim_data;
mod resolve;

pub use claim_data::{decode_location_attestation, encode_location_attestation, DecodedLocationAttestation};
pub use resolve::{resolve, resolve_many, ChainEndpoint};
