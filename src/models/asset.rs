//! Asset model matching the frontend Asset interface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Model,
    Texture,
    Image,
}

/// A named file reference shown in a project's file list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub url: String,
    /// Human-readable size, e.g. "2.4 MB".
    pub size: String,
    /// Owning project. Unscoped assets belong to every project's file list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Asset {
    pub fn visible_in(&self, project_id: &str) -> bool {
        self.project_id.as_deref().map_or(true, |id| id == project_id)
    }
}
