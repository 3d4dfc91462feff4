//! Project API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{error, reindex, success, ApiResult};
use crate::errors::AppError;
use crate::models::{NewProject, Project, ProjectStatus, ProjectUpdate};
use crate::AppState;

/// Filters for the project list.
#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    /// Substring match on title or description.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

/// GET /api/projects - List projects, optionally filtered.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListQuery>,
) -> ApiResult<Vec<Project>> {
    let revision_id = state.store.revision();

    let projects: Vec<Project> = state
        .store
        .read(|s| {
            let candidates = match params.q.as_deref() {
                Some(q) => s.search_projects(q),
                None => s.projects().iter().collect(),
            };
            candidates
                .into_iter()
                .filter(|p| params.status.map_or(true, |status| p.status == status))
                .cloned()
                .collect()
        })
        .await;

    success(projects, revision_id)
}

/// GET /api/projects/:id - Get a single project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    let revision_id = state.store.revision();

    match state.store.project(&id).await {
        Some(project) => success(project, revision_id),
        None => error(
            AppError::NotFound(format!("Project {} not found", id)),
            revision_id,
        ),
    }
}

/// POST /api/projects - Create a new project.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<NewProject>,
) -> ApiResult<Project> {
    let revision_id = state.store.revision();

    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            revision_id,
        );
    }

    match state.store.add_project(request).await {
        Ok(project) => {
            reindex(&state, &project.id).await;
            success(project, state.store.revision())
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/projects/:id - Merge fields into a project.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ProjectUpdate>,
) -> ApiResult<Project> {
    let revision_id = state.store.revision();

    if request.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return error(
            AppError::Validation("Title cannot be blank".to_string()),
            revision_id,
        );
    }

    match state.store.update_project(&id, request).await {
        Some(project) => {
            reindex(&state, &project.id).await;
            success(project, state.store.revision())
        }
        None => error(
            AppError::NotFound(format!("Project {} not found", id)),
            revision_id,
        ),
    }
}

/// DELETE /api/projects/:id - Delete a project.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let revision_id = state.store.revision();

    if !state.store.delete_project(&id).await {
        return error(
            AppError::NotFound(format!("Project {} not found", id)),
            revision_id,
        );
    }

    reindex(&state, &id).await;
    success((), state.store.revision())
}

/// Body for selecting the current project.
///
/// `projectId` selects a stored project; `project` stores the given snapshot
/// as-is. With neither, the selection is cleared.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCurrentProjectRequest {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub project: Option<Project>,
}

/// GET /api/current-project - Get the selected project snapshot.
pub async fn get_current_project(State(state): State<AppState>) -> ApiResult<Option<Project>> {
    success(state.store.current_project().await, state.store.revision())
}

/// PUT /api/current-project - Replace or clear the selection.
pub async fn set_current_project(
    State(state): State<AppState>,
    Json(request): Json<SetCurrentProjectRequest>,
) -> ApiResult<Option<Project>> {
    let revision_id = state.store.revision();

    let selection = match (request.project_id, request.project) {
        (Some(id), _) => match state.store.select_project(&id).await {
            Some(project) => Some(project),
            None => {
                return error(
                    AppError::NotFound(format!("Project {} not found", id)),
                    revision_id,
                )
            }
        },
        (None, project) => {
            state.store.set_current_project(project.clone()).await;
            project
        }
    };

    success(selection, state.store.revision())
}
