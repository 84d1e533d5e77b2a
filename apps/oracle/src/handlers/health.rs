//! `GET /health` and `GET /` (§4.8, exempt from auth/rate-limit per the
//! routing composition in `routes.rs`).

use axum::response::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "astral-oracle",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
