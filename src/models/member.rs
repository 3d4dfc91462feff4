//! Team member model matching the frontend TeamMember interface.

use serde::{Deserialize, Serialize};

/// Role labels the roster editor suggests. Roles are free-form; these are
/// offered, never enforced.
pub const SUGGESTED_ROLES: &[&str] = &[
    "Project Manager",
    "Designer",
    "Developer",
    "Event Planner",
    "Tech Lead",
];

/// A person on a project's team. Owned by exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub join_date: String,
}

impl TeamMember {
    /// Case-insensitive substring match on name, email or role.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.role.to_lowercase().contains(&term)
    }
}

/// Request body for adding a member to a project's team.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMember {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl NewTeamMember {
    pub fn into_member(self, id: String, join_date: String) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            avatar: self.avatar.filter(|a| !a.is_empty()),
            join_date,
        }
    }

    /// Name, email and role must all be non-blank.
    pub fn missing_required(&self) -> bool {
        self.name.trim().is_empty() || self.email.trim().is_empty() || self.role.trim().is_empty()
    }
}

/// Partial update for a team member. `id` and `joinDate` never merge.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl TeamMemberUpdate {
    pub fn apply_to(&self, member: &TeamMember) -> TeamMember {
        TeamMember {
            id: member.id.clone(),
            name: self.name.clone().unwrap_or_else(|| member.name.clone()),
            email: self.email.clone().unwrap_or_else(|| member.email.clone()),
            role: self.role.clone().unwrap_or_else(|| member.role.clone()),
            avatar: match &self.avatar {
                Some(a) if a.is_empty() => None,
                Some(a) => Some(a.clone()),
                None => member.avatar.clone(),
            },
            join_date: member.join_date.clone(),
        }
    }

    /// Fields that are present must not be blank.
    pub fn blanks_required(&self) -> bool {
        [&self.name, &self.email, &self.role]
            .iter()
            .any(|f| f.as_deref().is_some_and(|v| v.trim().is_empty()))
    }
}
