//! Router composition (§4.8, component C8): CORS, perimeter guards, and
//! the route table, composed the way the grounding repo's
//! `create_sovereign_router` layers its own guards over nested routers.

use crate::handlers::{compute, health, plugins, verify};
use crate::middleware::{auth_tier_guard, rate_limit_guard};
use crate::state::AppState;
use axum::{
    http::{header, HeaderName, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-api-key"),
        ])
        .max_age(Duration::from_secs(3600));

    let compute_routes = Router::new()
        .route("/distance", post(compute::distance))
        .route("/area", post(compute::area))
        .route("/length", post(compute::length))
        .route("/contains", post(compute::contains))
        .route("/within", post(compute::within))
        .route("/intersects", post(compute::intersects));

    let verify_routes = Router::new()
        .route("/stamp", post(verify::stamp))
        .route("/proof", post(verify::proof))
        .route("/plugins", get(plugins::list));

    let guarded = Router::new()
        .nest("/compute/v0", compute_routes)
        .nest("/verify/v0", verify_routes)
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit_guard))
        .layer(middleware::from_fn_with_state(state.clone(), auth_tier_guard))
        .layer(RequestBodyLimitLayer::new(state.config.body_limit_bytes));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .merge(guarded)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
