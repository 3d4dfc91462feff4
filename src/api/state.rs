//! Whole-store API endpoints.

use axum::extract::State;
use serde::Serialize;

use super::{error, success, ApiResult};
use crate::models::{ProjectStats, StoreSnapshot, SUGGESTED_ROLES};
use crate::AppState;

/// Store behavior as configured for this server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    pub storage_key: String,
    pub persist_all: bool,
    pub clear_current_on_delete: bool,
    pub suggested_roles: Vec<&'static str>,
}

/// GET /api/state - Every collection in the store.
pub async fn get_state(State(state): State<AppState>) -> ApiResult<StoreSnapshot> {
    success(state.store.snapshot().await, state.store.revision())
}

/// DELETE /api/state - Clear the persisted slot and return to the seed data.
pub async fn reset_state(State(state): State<AppState>) -> ApiResult<StoreSnapshot> {
    let revision_id = state.store.revision();

    if let Err(e) = state.store.reset().await {
        return error(e, revision_id);
    }

    let snapshot = state.store.snapshot().await;
    if let Err(e) = state.search.rebuild(&snapshot.projects).await {
        return error(e, state.store.revision());
    }
    success(snapshot, state.store.revision())
}

/// GET /api/stats - Dashboard counters.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<ProjectStats> {
    success(state.store.read(|s| s.stats()).await, state.store.revision())
}

/// GET /api/settings - Store settings and roster role suggestions.
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<StoreSettings> {
    let settings = StoreSettings {
        storage_key: state.config.storage_key.clone(),
        persist_all: state.config.persist_all,
        clear_current_on_delete: state.config.clear_current_on_delete,
        suggested_roles: SUGGESTED_ROLES.to_vec(),
    };
    success(settings, state.store.revision())
}
