//! The project store wired to its durable slot.

use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use super::{ProjectStore, StoreOptions};
use crate::db::StateSlot;
use crate::errors::AppError;
use crate::models::{
    Comment, NewProject, NewTeamMember, Project, ProjectUpdate, StoreSnapshot, TeamMemberUpdate,
};

/// Shared handle over a [`ProjectStore`].
///
/// Each mutation runs under the write lock and writes the persisted snapshot
/// to the slot before the lock is released, so slot writes land in mutation
/// order. A failed slot write is logged; the in-memory mutation stands.
pub struct PersistentStore {
    state: RwLock<ProjectStore>,
    slot: StateSlot,
    key: String,
    revision: AtomicI64,
}

impl PersistentStore {
    /// Rehydrate from `key` in the slot, or start from the seed.
    pub async fn open(
        slot: StateSlot,
        key: impl Into<String>,
        options: StoreOptions,
    ) -> Result<Self, AppError> {
        let key = key.into();
        let raw = slot.get_item(&key).await?;
        let store = ProjectStore::rehydrate(raw.as_deref(), options);

        Ok(Self {
            state: RwLock::new(store),
            slot,
            key,
            revision: AtomicI64::new(0),
        })
    }

    /// Mutation counter for this session.
    pub fn revision(&self) -> i64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Run `f` against a consistent view of the store.
    pub async fn read<R>(&self, f: impl FnOnce(&ProjectStore) -> R) -> R {
        let store = self.state.read().await;
        f(&store)
    }

    /// Apply `f`. A `Some` result means the store changed, so the revision is
    /// bumped and the snapshot persisted; `None` leaves both untouched.
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut ProjectStore) -> Option<R>) -> Option<R> {
        let mut store = self.state.write().await;
        let result = f(&mut store)?;
        self.revision.fetch_add(1, Ordering::SeqCst);

        if let Err(e) = self.persist(&store).await {
            tracing::error!("Failed to persist store to slot {}: {}", self.key, e);
        }
        Some(result)
    }

    /// Write the current snapshot to the slot, returning any failure.
    pub async fn flush(&self) -> Result<(), AppError> {
        let store = self.state.read().await;
        self.persist(&store).await
    }

    /// Drop the persisted slot and go back to the seed dataset.
    pub async fn reset(&self) -> Result<(), AppError> {
        let mut store = self.state.write().await;
        self.slot.remove_item(&self.key).await?;
        *store = ProjectStore::new(store.options());
        self.revision.fetch_add(1, Ordering::SeqCst);
        tracing::info!("Store reset to seed data");
        Ok(())
    }

    async fn persist(&self, store: &ProjectStore) -> Result<(), AppError> {
        let raw = store.to_persisted_json()?;
        self.slot.set_item(&self.key, &raw).await
    }

    // ==================== READS ====================

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.read(|s| s.snapshot()).await
    }

    pub async fn project(&self, id: &str) -> Option<Project> {
        self.read(|s| s.project(id).cloned()).await
    }

    pub async fn current_project(&self) -> Option<Project> {
        self.read(|s| s.current_project().cloned()).await
    }

    // ==================== MUTATIONS ====================

    pub async fn set_current_project(&self, project: Option<Project>) {
        self.mutate(|s| {
            s.set_current_project(project);
            Some(())
        })
        .await;
    }

    /// Select a stored project by id; the lookup and the assignment happen
    /// under one write lock.
    pub async fn select_project(&self, id: &str) -> Option<Project> {
        self.mutate(|s| {
            if !s.select_project(id) {
                return None;
            }
            s.current_project().cloned()
        })
        .await
    }

    /// Returns the created project.
    pub async fn add_project(&self, new: NewProject) -> Result<Project, AppError> {
        self.mutate(|s| {
            let id = s.add_project(new);
            s.project(&id).cloned()
        })
        .await
        .ok_or_else(|| AppError::Internal("Created project not found".to_string()))
    }

    /// Returns the merged project, or `None` when the id matched nothing.
    pub async fn update_project(&self, id: &str, updates: ProjectUpdate) -> Option<Project> {
        self.mutate(|s| {
            if !s.update_project(id, updates) {
                return None;
            }
            s.project(id).cloned()
        })
        .await
    }

    pub async fn delete_project(&self, id: &str) -> bool {
        self.mutate(|s| s.delete_project(id).then_some(()))
            .await
            .is_some()
    }

    /// Returns the new comment.
    pub async fn add_comment(&self, content: String, author: String) -> Result<Comment, AppError> {
        self.mutate(|s| {
            let id = s.add_comment(content, author);
            s.comment(&id).cloned()
        })
        .await
        .ok_or_else(|| AppError::Internal("Created comment not found".to_string()))
    }

    /// Returns the new comment, or `None` when the project is unknown.
    pub async fn add_project_comment(
        &self,
        project_id: &str,
        content: String,
        author: String,
    ) -> Option<Comment> {
        self.mutate(|s| {
            let id = s.add_project_comment(project_id, content, author)?;
            s.comment(&id).cloned()
        })
        .await
    }

    /// Returns the updated project and the new member's id.
    pub async fn add_team_member(
        &self,
        project_id: &str,
        new: NewTeamMember,
    ) -> Option<(Project, String)> {
        self.mutate(|s| {
            let member_id = s.add_team_member(project_id, new)?;
            s.project(project_id).cloned().map(|p| (p, member_id))
        })
        .await
    }

    pub async fn update_team_member(
        &self,
        project_id: &str,
        member_id: &str,
        updates: TeamMemberUpdate,
    ) -> Option<Project> {
        self.mutate(|s| {
            if !s.update_team_member(project_id, member_id, updates) {
                return None;
            }
            s.project(project_id).cloned()
        })
        .await
    }

    pub async fn remove_team_member(&self, project_id: &str, member_id: &str) -> Option<Project> {
        self.mutate(|s| {
            if !s.remove_team_member(project_id, member_id) {
                return None;
            }
            s.project(project_id).cloned()
        })
        .await
    }
}
