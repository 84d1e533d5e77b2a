//! Per-chain delegated-attestation nonce tracking (§3.4, §9 open question).
//!
//! The oracle is stateless by design, so it cannot authoritatively track the
//! EAS contract's on-chain nonce for its own signing key. Instead each chain
//! gets an in-memory counter seeded at zero on process start and incremented
//! for every attestation signed; callers that need a durable nonce should
//! seed it from `EAS.getNonce(attester)` on startup. See DESIGN.md for the
//! full rationale.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct NonceTracker {
    per_chain: DashMap<u64, AtomicU64>,
}

impl NonceTracker {
    pub fn new() -> Self {
        Self {
            per_chain: DashMap::new(),
        }
    }

    /// Seed (or reseed) a chain's counter, e.g. from an on-chain read at startup.
    pub fn seed(&self, chain_id: u64, starting_at: u64) {
        self.per_chain.insert(chain_id, AtomicU64::new(starting_at));
    }

    /// Returns the next nonce to use for `chain_id`, incrementing the counter.
    pub fn next(&self, chain_id: u64) -> u64 {
        let counter = self
            .per_chain
            .entry(chain_id)
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonces_are_monotonic_per_chain() {
        let tracker = NonceTracker::new();
        assert_eq!(tracker.next(1), 0);
        assert_eq!(tracker.next(1), 1);
        assert_eq!(tracker.next(2), 0);
        assert_eq!(tracker.next(1), 2);
    }

    #[test]
    fn seeding_resumes_from_a_durable_value() {
        let tracker = NonceTracker::new();
        tracker.seed(1, 50);
        assert_eq!(tracker.next(1), 50);
        assert_eq!(tracker.next(1), 51);
    }
}
