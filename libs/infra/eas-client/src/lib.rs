//! EAS on-chain attestation reads (§3.2, component C2).

mod client;
mod contract;
mod error;

pub use client::{EasClient, FetchedAttestation};
pub use contract::IEAS;
pub use error::EasClientError;
