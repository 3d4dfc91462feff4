//! Whole-store shapes: the persisted envelope, full snapshots and dashboard stats.

use serde::{Deserialize, Serialize};

use super::{Asset, Comment, Project};

/// Version written alongside the persisted state.
pub const PERSIST_VERSION: u32 = 0;

/// The subset of store state written to the durable slot.
///
/// Assets and comments are only present when full persistence is enabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub current_project: Option<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

/// Serialized form stored under the slot key: `{"state": ..., "version": 0}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedEnvelope {
    pub state: PersistedState,
    #[serde(default)]
    pub version: u32,
}

/// Every collection the store holds, as returned to readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub projects: Vec<Project>,
    pub current_project: Option<Project>,
    pub assets: Vec<Asset>,
    pub comments: Vec<Comment>,
}

/// Dashboard counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_projects: usize,
    pub draft: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub team_members: usize,
    pub assets: usize,
    pub comments: usize,
}
