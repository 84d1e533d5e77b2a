//! EIP-712 delegated attestation signing for EAS (§3.4, component C4).

mod eip712;
mod encoding;
mod error;
mod nonce;
mod signer;

pub use eip712::{build_attest, eas_domain, Attest, EAS_DOMAIN_NAME, EAS_DOMAIN_VERSION};
pub use encoding::{
    encode_boolean, encode_numeric, encode_verify, BooleanAttestationData,
    NumericAttestationData, VerifyAttestationData,
};
pub use error::SignerError;
pub use nonce::NonceTracker;
pub use signer::{AttestationSigner, DEFAULT_DEADLINE_TTL_SECS};
