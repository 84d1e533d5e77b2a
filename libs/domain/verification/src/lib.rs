//! Location proof verification (§3.5–§3.7, components C6+C7): plugins, the
//! registry that looks them up, and the pipeline that aggregates their
//! per-stamp results into a `CredibilityVector`.

mod pipeline;
mod plugin;
mod plugins;
mod registry;

pub use pipeline::evaluate_proof;
pub use plugin::{LocationPlugin, StampEvaluationResult, StampVerificationResult};
pub use plugins::device_attestation::DeviceAttestationPlugin;
pub use plugins::network_triangulation::NetworkTriangulationPlugin;
pub use registry::PluginRegistry;
