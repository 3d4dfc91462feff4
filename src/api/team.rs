//! Team roster API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{error, reindex, success, ApiResult};
use crate::errors::AppError;
use crate::models::{NewTeamMember, TeamMember, TeamMemberUpdate};
use crate::AppState;

const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

#[derive(Debug, Deserialize)]
pub struct TeamQuery {
    /// Substring match on name, email or role.
    #[serde(default)]
    pub q: Option<String>,
}

fn project_not_found(project_id: &str) -> AppError {
    AppError::NotFound(format!("Project {} not found", project_id))
}

/// GET /api/projects/:id/team - List (and filter) a project's team.
pub async fn list_team(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Query(params): Query<TeamQuery>,
) -> ApiResult<Vec<TeamMember>> {
    let revision_id = state.store.revision();

    let team = state
        .store
        .read(|s| {
            s.team(&project_id).map(|team| {
                team.iter()
                    .filter(|m| params.q.as_deref().map_or(true, |q| m.matches(q)))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
        .await;

    match team {
        Some(team) => success(team, revision_id),
        None => error(project_not_found(&project_id), revision_id),
    }
}

/// POST /api/projects/:id/team - Add a member.
pub async fn add_team_member(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(request): Json<NewTeamMember>,
) -> ApiResult<TeamMember> {
    let revision_id = state.store.revision();

    if request.missing_required() {
        return error(
            AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()),
            revision_id,
        );
    }

    let Some((project, member_id)) = state.store.add_team_member(&project_id, request).await else {
        return error(project_not_found(&project_id), revision_id);
    };
    reindex(&state, &project.id).await;

    match project.member(&member_id) {
        Some(member) => success(member.clone(), state.store.revision()),
        None => error(
            AppError::Internal(format!("Member {} missing after insert", member_id)),
            revision_id,
        ),
    }
}

/// PUT /api/projects/:id/team/:member_id - Update a member.
pub async fn update_team_member(
    State(state): State<AppState>,
    Path((project_id, member_id)): Path<(String, String)>,
    Json(request): Json<TeamMemberUpdate>,
) -> ApiResult<TeamMember> {
    let revision_id = state.store.revision();

    if request.blanks_required() {
        return error(
            AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()),
            revision_id,
        );
    }

    let Some(project) = state
        .store
        .update_team_member(&project_id, &member_id, request)
        .await
    else {
        return error(
            AppError::NotFound(format!(
                "Member {} not found in project {}",
                member_id, project_id
            )),
            revision_id,
        );
    };
    reindex(&state, &project.id).await;

    match project.member(&member_id) {
        Some(member) => success(member.clone(), state.store.revision()),
        None => error(
            AppError::Internal(format!("Member {} missing after update", member_id)),
            revision_id,
        ),
    }
}

/// DELETE /api/projects/:id/team/:member_id - Remove a member.
pub async fn remove_team_member(
    State(state): State<AppState>,
    Path((project_id, member_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let revision_id = state.store.revision();

    match state.store.remove_team_member(&project_id, &member_id).await {
        Some(project) => {
            reindex(&state, &project.id).await;
            success((), state.store.revision())
        }
        None => error(
            AppError::NotFound(format!(
                "Member {} not found in project {}",
                member_id, project_id
            )),
            revision_id,
        ),
    }
}
