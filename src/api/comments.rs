//! Asset and comment API endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Asset, Comment, NewComment};
use crate::AppState;

/// Optional project scope for asset and comment listings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeQuery {
    #[serde(default)]
    pub project_id: Option<String>,
}

/// GET /api/assets - List assets, optionally for one project.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(params): Query<ScopeQuery>,
) -> ApiResult<Vec<Asset>> {
    let assets: Vec<Asset> = state
        .store
        .read(|s| match params.project_id.as_deref() {
            Some(project_id) => s.assets_for(project_id).into_iter().cloned().collect(),
            None => s.assets().to_vec(),
        })
        .await;

    success(assets, state.store.revision())
}

/// GET /api/comments - List comments, optionally for one project.
pub async fn list_comments(
    State(state): State<AppState>,
    Query(params): Query<ScopeQuery>,
) -> ApiResult<Vec<Comment>> {
    let comments: Vec<Comment> = state
        .store
        .read(|s| match params.project_id.as_deref() {
            Some(project_id) => s.comments_for(project_id).into_iter().cloned().collect(),
            None => s.comments().to_vec(),
        })
        .await;

    success(comments, state.store.revision())
}

/// POST /api/comments - Post a comment to the global feed or a project.
pub async fn create_comment(
    State(state): State<AppState>,
    Json(request): Json<NewComment>,
) -> ApiResult<Comment> {
    let revision_id = state.store.revision();

    if request.content.trim().is_empty() || request.author.trim().is_empty() {
        return error(
            AppError::Validation("Comment content and author are required".to_string()),
            revision_id,
        );
    }

    match request.project_id {
        Some(project_id) => match state
            .store
            .add_project_comment(&project_id, request.content, request.author)
            .await
        {
            Some(comment) => success(comment, state.store.revision()),
            None => error(
                AppError::NotFound(format!("Project {} not found", project_id)),
                revision_id,
            ),
        },
        None => match state.store.add_comment(request.content, request.author).await {
            Ok(comment) => success(comment, state.store.revision()),
            Err(e) => error(e, revision_id),
        },
    }
}
