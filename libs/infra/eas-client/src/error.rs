use thiserror::Error;

#[derive(Debug, Error)]
pub enum EasClientError {
    #[error("unsupported chain id {0}")]
    UnsupportedChain(u64),
    #[error("{0} is not a valid 32-byte attestation uid")]
    InvalidUid(String),
    #[error("attestation {0} not found")]
    NotFound(String),
    #[error("attestation {0} has been revoked")]
    Revoked(String),
    #[error("attestation {0} has expired")]
    Expired(String),
    #[error("failed to decode attestation data: {0}")]
    Decode(String),
    #[error("RPC transport error: {0}")]
    Transport(String),
}
