//! `AppState` — the composition root (§4.9, §5): wires configuration, the
//! signer, the EAS client, and the plugin registry into the single value
//! every handler receives via `State<AppState>`.

use crate::config::Config;
use astral_eas_client::EasClient;
use astral_resolver::ChainEndpoint;
use astral_signer::AttestationSigner;
use astral_verification::PluginRegistry;
use dashmap::DashMap;
use std::sync::Arc;

/// Fixed one-hour-window counter (§4.8, §5): process-local, never evicted
/// proactively — stale entries are replaced in place once their window
/// rolls over, so memory is bounded by the number of distinct keys seen.
pub struct RateLimiter {
    window_secs: u64,
    counters: DashMap<String, (u64, u32)>,
}

pub struct RateLimitOutcome {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: u64,
}

impl RateLimiter {
    pub fn new(window_secs: u64) -> Self {
        Self {
            window_secs,
            counters: DashMap::new(),
        }
    }

    /// Checks and increments the counter for `key` at time `now` against
    /// `cap`. Always increments, even when the request is ultimately denied,
    /// matching the "100+1th request is rejected" property in §8.
    pub fn check(&self, key: &str, cap: u32, now: u64) -> RateLimitOutcome {
        let mut entry = self
            .counters
            .entry(key.to_string())
            .or_insert((now, 0));

        if now.saturating_sub(entry.0) >= self.window_secs {
            entry.0 = now;
            entry.1 = 0;
        }

        entry.1 += 1;
        let count = entry.1;
        let reset_at = entry.0 + self.window_secs;

        RateLimitOutcome {
            allowed: count <= cap,
            limit: cap,
            remaining: cap.saturating_sub(count),
            reset_at,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub signer: Arc<AttestationSigner>,
    pub eas_client: Arc<EasClient>,
    pub plugins: Arc<PluginRegistry>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let signer = Arc::new(AttestationSigner::new(config.signing_key.clone()));
        let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit.window_secs));
        Self {
            signer,
            eas_client: Arc::new(EasClient::new()),
            plugins: Arc::new(PluginRegistry::with_builtins()),
            rate_limiter,
            config,
        }
    }

    /// Looks up the chain endpoint for `chain_id`, failing with
    /// *invalid input* (an unsupported chain is a request-shape error, not
    /// a server fault) when it isn't configured.
    pub fn endpoint(&self, chain_id: u64) -> Result<ChainEndpoint, astral_models::DomainError> {
        let chain = self.config.chains.get(&chain_id).ok_or_else(|| {
            astral_models::DomainError::invalid(format!("unsupported chainId: {chain_id}"))
        })?;
        Ok(ChainEndpoint {
            chain_id: chain.chain_id,
            rpc_url: chain.rpc_url.clone(),
            eas_contract: chain.eas_contract,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limiter_allows_up_to_cap_then_denies() {
        let limiter = RateLimiter::new(3600);
        for i in 1..=100 {
            let outcome = limiter.check("ip:1.2.3.4", 100, 1_000);
            assert_eq!(outcome.allowed, true, "request {i} should be allowed");
        }
        let outcome = limiter.check("ip:1.2.3.4", 100, 1_000);
        assert!(!outcome.allowed);
    }

    #[test]
    fn rate_limiter_resets_after_window() {
        let limiter = RateLimiter::new(60);
        for _ in 0..5 {
            limiter.check("k", 5, 0);
        }
        assert!(!limiter.check("k", 5, 10).allowed);
        assert!(limiter.check("k", 5, 100).allowed);
    }
}
