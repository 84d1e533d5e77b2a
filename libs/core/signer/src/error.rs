use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("failed to sign EIP-712 payload: {0}")]
    Signing(String),
    #[error("invalid schema UID: {0}")]
    InvalidSchema(String),
}
