//! Built-in location plugins (§3.5). One module per verification mechanism.

pub mod device_attestation;
pub mod network_triangulation;
