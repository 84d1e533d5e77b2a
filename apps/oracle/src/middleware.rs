//! Perimeter guards (§4.8): API-key tiering and fixed-window rate limiting.
//! Composed in `routes.rs` the same way the grounding repo chains its
//! health/auth guards. The request body size limit is enforced by
//! `tower_http::limit::RequestBodyLimitLayer` directly in `routes.rs`
//! rather than here, since it must run ahead of axum's `Json` extractor
//! buffering the body.

use crate::state::AppState;
use astral_models::DomainError;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

use crate::handlers::problem_response;

#[derive(Debug, Clone)]
pub struct ApiKeyContext {
    pub tier: crate::config::ApiTier,
    pub rate_key: String,
}

fn extract_api_key(req: &Request) -> Option<String> {
    if let Some(value) = req.headers().get("X-API-Key").and_then(|v| v.to_str().ok()) {
        return Some(value.to_string());
    }
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Resolves the caller's tier from an API key (§4.8). An absent key always
/// falls through to the public tier; a present-but-unknown key is
/// *unauthorised*.
pub async fn auth_tier_guard(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    let context = match extract_api_key(&req) {
        None => ApiKeyContext {
            tier: crate::config::ApiTier::Public,
            rate_key: format!("ip:{}", remote.ip()),
        },
        Some(key) => match state.config.api_keys.get(&key) {
            Some(entry) => {
                debug!(tier = entry.tier.as_str(), "authenticated API key");
                ApiKeyContext {
                    tier: entry.tier,
                    rate_key: format!("key:{key}"),
                }
            }
            None => {
                warn!("rejected unknown API key");
                return problem_response(&DomainError::Unauthorized("unknown API key".to_string()), &path);
            }
        },
    };

    req.extensions_mut().insert(context);
    next.run(req).await
}

/// Fixed one-hour-window rate limit, keyed by API key (if present) or
/// remote IP (§4.8, §5). Must run after `auth_tier_guard` so the
/// `ApiKeyContext` extension is already present.
pub async fn rate_limit_guard(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let context = req
        .extensions()
        .get::<ApiKeyContext>()
        .cloned()
        .unwrap_or(ApiKeyContext {
            tier: crate::config::ApiTier::Public,
            rate_key: "ip:unknown".to_string(),
        });

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is after the unix epoch")
        .as_secs();
    let cap = state.config.rate_limit.cap_for(context.tier);
    let outcome = state.rate_limiter.check(&context.rate_key, cap, now);

    if !outcome.allowed {
        let mut response = problem_response(&DomainError::RateLimited, &path);
        insert_rate_limit_headers(&mut response, &outcome);
        return response;
    }

    let mut response = next.run(req).await;
    insert_rate_limit_headers(&mut response, &outcome);
    response
}

fn insert_rate_limit_headers(response: &mut Response, outcome: &crate::state::RateLimitOutcome) {
    let headers = response.headers_mut();
    if let Ok(v) = HeaderValue::from_str(&outcome.limit.to_string()) {
        headers.insert("RateLimit-Limit", v);
    }
    if let Ok(v) = HeaderValue::from_str(&outcome.remaining.to_string()) {
        headers.insert("RateLimit-Remaining", v);
    }
    if let Ok(v) = HeaderValue::from_str(&outcome.reset_at.to_string()) {
        headers.insert("RateLimit-Reset", v);
    }
}
