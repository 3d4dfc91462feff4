//! Project model matching the frontend Project interface.

use serde::{Deserialize, Serialize};

use super::TeamMember;

/// Lifecycle status of an event design project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }
}

/// A named event-design workspace with its embedded team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    pub created_at: String,
    pub updated_at: String,
}

impl Project {
    /// Case-insensitive substring match on title or description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }

    pub fn member(&self, member_id: &str) -> Option<&TeamMember> {
        self.team.iter().find(|m| m.id == member_id)
    }
}

/// Request body for creating a new project.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl NewProject {
    /// Build the stored project. The team always starts empty.
    pub fn into_project(self, id: String, now: String) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            thumbnail: self.thumbnail,
            status: self.status,
            team: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Partial update for a project.
///
/// `id`, `createdAt` and `updatedAt` are not part of the merge; any such
/// field in an incoming payload is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub team: Option<Vec<TeamMember>>,
}

impl ProjectUpdate {
    /// Produce the merged copy of `project`. Explicit update fields win.
    pub fn apply_to(&self, project: &Project, now: String) -> Project {
        let team = match &self.team {
            Some(team) => dedup_members(team),
            None => project.team.clone(),
        };

        Project {
            id: project.id.clone(),
            title: self.title.clone().unwrap_or_else(|| project.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| project.description.clone()),
            thumbnail: self
                .thumbnail
                .clone()
                .unwrap_or_else(|| project.thumbnail.clone()),
            status: self.status.unwrap_or(project.status),
            team,
            created_at: project.created_at.clone(),
            updated_at: now,
        }
    }
}

/// Keep the first member for each id so team ids stay unique.
pub(crate) fn dedup_members(team: &[TeamMember]) -> Vec<TeamMember> {
    let mut seen = std::collections::HashSet::new();
    team.iter()
        .filter(|m| seen.insert(m.id.as_str()))
        .cloned()
        .collect()
}
