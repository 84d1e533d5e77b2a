//! The numeric and boolean compute pipelines (§3.1, component C5).

mod pipelines;
mod scaling;

pub use pipelines::{
    compute_area, compute_contains, compute_distance, compute_intersects, compute_length,
    compute_within,
};
pub use scaling::scale_for_attestation;
