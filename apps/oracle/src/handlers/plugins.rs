//! `GET /verify/v0/plugins` (§4.6, §6.2).

use crate::state::AppState;
use astral_models::PluginListResponse;
use axum::extract::State;
use axum::response::Json;

pub async fn list(State(state): State<AppState>) -> Json<PluginListResponse> {
    Json(PluginListResponse {
        plugins: state.plugins.list(),
    })
}
