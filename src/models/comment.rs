//! Comment model matching the frontend Comment interface.

use serde::{Deserialize, Serialize};

/// Avatar attached to comments posted through the store.
pub const DEFAULT_COMMENT_AVATAR: &str = "https://randomuser.me/api/portraits/women/3.jpg";

/// A timestamped note in the discussion feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Display name, not a user id.
    pub author: String,
    pub content: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Comment {
    pub fn visible_in(&self, project_id: &str) -> bool {
        self.project_id.as_deref().map_or(true, |id| id == project_id)
    }
}

/// Request body for posting a comment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub author: String,
    /// Scope the comment to a project; omitted means the global feed.
    #[serde(default)]
    pub project_id: Option<String>,
}
