//! The project store: single source of truth for projects, the current
//! project selection, assets and comments.
//!
//! `ProjectStore` is a plain value with synchronous mutations. Lookups that
//! match nothing are silent no-ops; the return value only tells the caller
//! whether anything changed. Every mutation that replaces a project builds
//! the new value first and swaps it in whole, so clones held by readers are
//! never partially updated.

pub mod clock;
pub mod ids;
mod persistent;
pub mod seed;

pub use persistent::PersistentStore;

use std::collections::HashSet;

use crate::models::{
    dedup_members, Asset, Comment, NewProject, NewTeamMember, PersistedEnvelope, PersistedState,
    Project, ProjectStats, ProjectStatus, ProjectUpdate, StoreSnapshot, TeamMember, TeamMemberUpdate,
    DEFAULT_COMMENT_AVATAR, PERSIST_VERSION,
};

use clock::Clock;

/// Behavior switches for the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Clear `current_project` when the project it points at is deleted.
    /// Off by default: the selection is left dangling.
    pub clear_current_on_delete: bool,
    /// Persist assets and comments as well as projects and the selection.
    pub persist_all_collections: bool,
}

#[derive(Debug, Clone)]
pub struct ProjectStore {
    projects: Vec<Project>,
    current_project: Option<Project>,
    assets: Vec<Asset>,
    comments: Vec<Comment>,
    options: StoreOptions,
    clock: Clock,
}

impl ProjectStore {
    /// A store holding the seed dataset.
    pub fn new(options: StoreOptions) -> Self {
        Self {
            projects: seed::projects(),
            current_project: None,
            assets: seed::assets(),
            comments: seed::comments(),
            options,
            clock: Clock::new(),
        }
    }

    /// Restore from a serialized envelope, falling back to the seed when the
    /// slot is empty, unreadable or written by another version.
    pub fn rehydrate(raw: Option<&str>, options: StoreOptions) -> Self {
        let mut store = Self::new(options);

        let Some(raw) = raw else {
            tracing::info!("No persisted state found, starting from seed data");
            return store;
        };

        match serde_json::from_str::<PersistedEnvelope>(raw) {
            Ok(envelope) if envelope.version == PERSIST_VERSION => {
                store.merge_persisted(envelope.state);
                tracing::info!(
                    "Rehydrated {} projects from persisted state",
                    store.projects.len()
                );
            }
            Ok(envelope) => {
                tracing::warn!(
                    "Persisted state has version {}, expected {}; using seed data",
                    envelope.version,
                    PERSIST_VERSION
                );
            }
            Err(e) => {
                tracing::warn!("Persisted state is corrupt ({}); using seed data", e);
            }
        }

        store
    }

    /// Shallow merge: persisted collections replace the seed ones. Duplicate
    /// project ids, and duplicate member ids within a team, keep the first entry.
    fn merge_persisted(&mut self, state: PersistedState) {
        let mut seen = HashSet::new();
        self.projects = state
            .projects
            .into_iter()
            .filter(|p| seen.insert(p.id.clone()))
            .map(|p| Project {
                team: dedup_members(&p.team),
                ..p
            })
            .collect();
        self.current_project = state.current_project;
        if let Some(assets) = state.assets {
            self.assets = assets;
        }
        if let Some(comments) = state.comments {
            self.comments = comments;
        }

        for project in &self.projects {
            self.clock.observe(&project.created_at);
            self.clock.observe(&project.updated_at);
        }
        for comment in &self.comments {
            self.clock.observe(&comment.timestamp);
        }
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    // ==================== READS ====================

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current_project.as_ref()
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment(&self, id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn team(&self, project_id: &str) -> Option<&[TeamMember]> {
        self.project(project_id).map(|p| p.team.as_slice())
    }

    /// Projects whose title or description contains `term`, case-insensitively.
    pub fn search_projects(&self, term: &str) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.matches(term)).collect()
    }

    /// Assets scoped to `project_id` plus unscoped ones.
    pub fn assets_for(&self, project_id: &str) -> Vec<&Asset> {
        self.assets.iter().filter(|a| a.visible_in(project_id)).collect()
    }

    /// Comments scoped to `project_id` plus the global feed.
    pub fn comments_for(&self, project_id: &str) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.visible_in(project_id))
            .collect()
    }

    pub fn stats(&self) -> ProjectStats {
        let count = |status: ProjectStatus| self.projects.iter().filter(|p| p.status == status).count();

        ProjectStats {
            total_projects: self.projects.len(),
            draft: count(ProjectStatus::Draft),
            in_progress: count(ProjectStatus::InProgress),
            completed: count(ProjectStatus::Completed),
            team_members: self.projects.iter().map(|p| p.team.len()).sum(),
            assets: self.assets.len(),
            comments: self.comments.len(),
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            projects: self.projects.clone(),
            current_project: self.current_project.clone(),
            assets: self.assets.clone(),
            comments: self.comments.clone(),
        }
    }

    /// The subset written to the durable slot.
    pub fn partialize(&self) -> PersistedState {
        let all = self.options.persist_all_collections;
        PersistedState {
            projects: self.projects.clone(),
            current_project: self.current_project.clone(),
            assets: all.then(|| self.assets.clone()),
            comments: all.then(|| self.comments.clone()),
        }
    }

    pub fn to_persisted_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&PersistedEnvelope {
            state: self.partialize(),
            version: PERSIST_VERSION,
        })
    }

    // ==================== MUTATIONS ====================

    /// Replace the selection with a snapshot of `project`, or clear it.
    pub fn set_current_project(&mut self, project: Option<Project>) {
        tracing::debug!(
            "Current project set to {:?}",
            project.as_ref().map(|p| p.id.as_str())
        );
        self.current_project = project;
    }

    /// Select the stored project `id` as a snapshot. No-op if it is missing.
    pub fn select_project(&mut self, id: &str) -> bool {
        let Some(project) = self.project(id).cloned() else {
            return false;
        };
        self.set_current_project(Some(project));
        true
    }

    /// Append a new project and return its id.
    pub fn add_project(&mut self, new: NewProject) -> String {
        let id = ids::unique_id("", |candidate| self.project(candidate).is_some());
        let now = self.clock.now();
        let project = new.into_project(id.clone(), now);

        tracing::debug!("Adding project {} ({})", id, project.status.as_str());
        self.projects.push(project);
        id
    }

    /// Merge `updates` into the matching project and refresh `updated_at`.
    pub fn update_project(&mut self, id: &str, updates: ProjectUpdate) -> bool {
        let now = self.clock.now();
        let Some(slot) = self.projects.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        *slot = updates.apply_to(slot, now);
        tracing::debug!("Updated project {}", id);
        true
    }

    /// Remove the matching project. Assets and comments are left in place.
    pub fn delete_project(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return false;
        }

        if self.options.clear_current_on_delete
            && self.current_project.as_ref().is_some_and(|p| p.id == id)
        {
            self.current_project = None;
        }

        tracing::debug!("Deleted project {}", id);
        true
    }

    /// Append an unscoped comment to the global feed.
    pub fn add_comment(&mut self, content: String, author: String) -> String {
        self.push_comment(content, author, None)
    }

    /// Append a comment scoped to an existing project.
    pub fn add_project_comment(
        &mut self,
        project_id: &str,
        content: String,
        author: String,
    ) -> Option<String> {
        self.project(project_id)?;
        Some(self.push_comment(content, author, Some(project_id.to_string())))
    }

    fn push_comment(&mut self, content: String, author: String, project_id: Option<String>) -> String {
        let id = ids::unique_id("", |candidate| self.comments.iter().any(|c| c.id == candidate));
        let timestamp = self.clock.now();

        tracing::debug!("Adding comment {} by {}", id, author);
        self.comments.push(Comment {
            id: id.clone(),
            author,
            content,
            timestamp,
            avatar: Some(DEFAULT_COMMENT_AVATAR.to_string()),
            project_id,
        });
        id
    }

    /// Append a member to the project's team; returns the new member id.
    pub fn add_team_member(&mut self, project_id: &str, new: NewTeamMember) -> Option<String> {
        let now = self.clock.now();
        let slot = self.projects.iter_mut().find(|p| p.id == project_id)?;

        let member_id = ids::unique_id("tm", |candidate| slot.member(candidate).is_some());
        let mut team = slot.team.clone();
        team.push(new.into_member(member_id.clone(), now.clone()));

        *slot = Project {
            team,
            updated_at: now,
            ..slot.clone()
        };
        tracing::debug!("Added member {} to project {}", member_id, project_id);
        Some(member_id)
    }

    /// Merge `updates` into one member. The member id never changes.
    pub fn update_team_member(
        &mut self,
        project_id: &str,
        member_id: &str,
        updates: TeamMemberUpdate,
    ) -> bool {
        let now = self.clock.now();
        let Some(slot) = self.projects.iter_mut().find(|p| p.id == project_id) else {
            return false;
        };
        if slot.member(member_id).is_none() {
            return false;
        }

        let team = slot
            .team
            .iter()
            .map(|m| if m.id == member_id { updates.apply_to(m) } else { m.clone() })
            .collect();

        *slot = Project {
            team,
            updated_at: now,
            ..slot.clone()
        };
        tracing::debug!("Updated member {} in project {}", member_id, project_id);
        true
    }

    /// Filter one member out of the project's team.
    pub fn remove_team_member(&mut self, project_id: &str, member_id: &str) -> bool {
        let now = self.clock.now();
        let Some(slot) = self.projects.iter_mut().find(|p| p.id == project_id) else {
            return false;
        };
        if slot.member(member_id).is_none() {
            return false;
        }

        let team = slot
            .team
            .iter()
            .filter(|m| m.id != member_id)
            .cloned()
            .collect();

        *slot = Project {
            team,
            updated_at: now,
            ..slot.clone()
        };
        tracing::debug!("Removed member {} from project {}", member_id, project_id);
        true
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new(StoreOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_project(title: &str) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: "New event design project".to_string(),
            thumbnail: "thumb.jpg".to_string(),
            status: ProjectStatus::Draft,
        }
    }

    fn new_member(name: &str) -> NewTeamMember {
        NewTeamMember {
            name: name.to_string(),
            email: "x@y.com".to_string(),
            role: "Designer".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_seed_contents() {
        let store = ProjectStore::default();
        let ids: Vec<_> = store.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(store.team("1").unwrap().len(), 3);
        assert_eq!(store.assets().len(), 3);
        assert_eq!(store.comments().len(), 2);
        assert!(store.current_project().is_none());
    }

    #[test]
    fn test_add_project_ids_are_distinct() {
        let mut store = ProjectStore::default();
        let mut ids = HashSet::new();
        for i in 0..500 {
            assert!(ids.insert(store.add_project(new_project(&format!("P{}", i)))));
        }
        let all: HashSet<_> = store.projects().iter().map(|p| p.id.clone()).collect();
        assert_eq!(all.len(), store.projects().len());
    }

    #[test]
    fn test_add_project_defaults() {
        let mut store = ProjectStore::default();
        let id = store.add_project(new_project("Untitled Project"));

        let project = store.project(&id).unwrap();
        assert!(project.team.is_empty());
        assert_eq!(project.created_at, project.updated_at);
        assert_eq!(store.projects().len(), 4);
        assert_eq!(store.projects().last().unwrap().id, id);
    }

    #[test]
    fn test_update_project_merges_and_advances_updated_at() {
        let mut store = ProjectStore::default();
        let before = store.project("1").unwrap().clone();

        let changed = store.update_project(
            "1",
            ProjectUpdate {
                description: Some("Bigger stage".to_string()),
                ..Default::default()
            },
        );
        assert!(changed);

        let after = store.project("1").unwrap();
        assert_eq!(after.description, "Bigger stage");
        assert_eq!(after.title, before.title);
        assert_eq!(after.thumbnail, before.thumbnail);
        assert_eq!(after.status, before.status);
        assert_eq!(after.team, before.team);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);

        let first = after.updated_at.clone();
        store.update_project("1", ProjectUpdate::default());
        assert!(store.project("1").unwrap().updated_at > first);
    }

    #[test]
    fn test_update_unknown_project_is_noop() {
        let mut store = ProjectStore::default();
        let before = store.projects().to_vec();
        assert!(!store.update_project("missing", ProjectUpdate::default()));
        assert_eq!(store.projects(), before.as_slice());
    }

    #[test]
    fn test_delete_project_removes_exactly_one() {
        let mut store = ProjectStore::default();
        let before = store.projects().to_vec();

        assert!(store.delete_project("2"));

        let ids: Vec<_> = store.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(store.project("1"), before.iter().find(|p| p.id == "1"));
        assert_eq!(store.project("3"), before.iter().find(|p| p.id == "3"));
        assert_eq!(store.assets().len(), 3);
        assert_eq!(store.comments().len(), 2);

        assert!(!store.delete_project("2"));
        assert_eq!(store.projects().len(), 2);
    }

    #[test]
    fn test_delete_leaves_current_project_dangling_by_default() {
        let mut store = ProjectStore::default();
        let selected = store.project("2").cloned();
        store.set_current_project(selected);

        store.delete_project("2");
        assert_eq!(store.current_project().map(|p| p.id.as_str()), Some("2"));
    }

    #[test]
    fn test_delete_can_clear_current_project() {
        let mut store = ProjectStore::new(StoreOptions {
            clear_current_on_delete: true,
            ..Default::default()
        });
        let selected = store.project("2").cloned();
        store.set_current_project(selected);

        store.delete_project("3");
        assert!(store.current_project().is_some());
        store.delete_project("2");
        assert!(store.current_project().is_none());
    }

    #[test]
    fn test_current_project_is_a_snapshot() {
        let mut store = ProjectStore::default();
        let selected = store.project("1").cloned();
        store.set_current_project(selected);

        store.update_project(
            "1",
            ProjectUpdate {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(store.current_project().unwrap().title, "Corporate Gala 2024");
        store.set_current_project(None);
        assert!(store.current_project().is_none());
    }

    #[test]
    fn test_add_team_member_to_seed_project() {
        let mut store = ProjectStore::default();
        let before_2 = store.project("2").unwrap().updated_at.clone();
        let before_3 = store.project("3").unwrap().updated_at.clone();
        let before_1 = store.project("1").unwrap().updated_at.clone();

        let member_id = store.add_team_member("1", new_member("X")).unwrap();

        let project = store.project("1").unwrap();
        assert_eq!(project.team.len(), 4);
        let added = project.member(&member_id).unwrap();
        assert!(member_id.starts_with("tm"));
        assert_eq!(added.name, "X");
        assert!(!added.join_date.is_empty());
        assert_ne!(project.updated_at, before_1);
        assert_eq!(store.project("2").unwrap().updated_at, before_2);
        assert_eq!(store.project("3").unwrap().updated_at, before_3);
    }

    #[test]
    fn test_add_then_remove_member_round_trip() {
        let mut store = ProjectStore::default();
        let team_before = store.team("1").unwrap().to_vec();
        let updated_before = store.project("1").unwrap().updated_at.clone();

        let member_id = store.add_team_member("1", new_member("Temp")).unwrap();
        let updated_mid = store.project("1").unwrap().updated_at.clone();
        assert!(store.remove_team_member("1", &member_id));

        assert_eq!(store.team("1").unwrap(), team_before.as_slice());
        let updated_after = store.project("1").unwrap().updated_at.clone();
        assert!(updated_mid > updated_before);
        assert!(updated_after > updated_mid);
    }

    #[test]
    fn test_add_member_to_unknown_project() {
        let mut store = ProjectStore::default();
        assert!(store.add_team_member("missing", new_member("X")).is_none());
    }

    #[test]
    fn test_update_team_member_keeps_id() {
        let mut store = ProjectStore::default();
        let updates: TeamMemberUpdate =
            serde_json::from_value(serde_json::json!({ "id": "tm42", "role": "Lead Designer" }))
                .unwrap();

        assert!(store.update_team_member("1", "tm2", updates));

        let team = store.team("1").unwrap();
        assert!(team.iter().all(|m| m.id != "tm42"));
        let updated = team.iter().find(|m| m.id == "tm2").unwrap();
        assert_eq!(updated.role, "Lead Designer");
        assert_eq!(updated.name, "Sarah Williams");
    }

    #[test]
    fn test_member_ops_on_unknown_ids_are_noops() {
        let mut store = ProjectStore::default();
        let before = store.projects().to_vec();

        assert!(!store.update_team_member("1", "tm99", TeamMemberUpdate::default()));
        assert!(!store.update_team_member("9", "tm1", TeamMemberUpdate::default()));
        assert!(!store.remove_team_member("1", "tm99"));
        assert!(!store.remove_team_member("9", "tm1"));

        assert_eq!(store.projects(), before.as_slice());
    }

    #[test]
    fn test_add_comment_is_global() {
        let mut store = ProjectStore::default();
        let id = store.add_comment("Looks great".to_string(), "Jo".to_string());

        let comment = store.comments().last().unwrap();
        assert_eq!(comment.id, id);
        assert_eq!(comment.author, "Jo");
        assert_eq!(comment.avatar.as_deref(), Some(DEFAULT_COMMENT_AVATAR));
        assert!(comment.project_id.is_none());
        assert_eq!(store.comments_for("1").len(), 3);
        assert_eq!(store.comments_for("2").len(), 3);
    }

    #[test]
    fn test_project_comment_is_scoped() {
        let mut store = ProjectStore::default();
        assert!(store
            .add_project_comment("missing", "Hi".to_string(), "Jo".to_string())
            .is_none());

        store
            .add_project_comment("1", "Stage notes".to_string(), "Jo".to_string())
            .unwrap();
        assert_eq!(store.comments_for("1").len(), 3);
        assert_eq!(store.comments_for("2").len(), 2);
        assert_eq!(store.comments().len(), 3);
    }

    #[test]
    fn test_search_projects() {
        let store = ProjectStore::default();
        let hits: Vec<_> = store.search_projects("WEDDING").iter().map(|p| p.id.clone()).collect();
        assert_eq!(hits, vec!["2"]);
        assert_eq!(store.search_projects("modern").len(), 2);
        assert_eq!(store.search_projects("").len(), 3);
    }

    #[test]
    fn test_stats() {
        let store = ProjectStore::default();
        assert_eq!(
            store.stats(),
            ProjectStats {
                total_projects: 3,
                draft: 1,
                in_progress: 1,
                completed: 1,
                team_members: 5,
                assets: 3,
                comments: 2,
            }
        );
    }

    #[test]
    fn test_persisted_round_trip() {
        let mut store = ProjectStore::default();
        let id = store.add_project(new_project("Launch Party"));
        store.add_team_member(&id, new_member("Y"));
        let selected = store.project(&id).cloned();
        store.set_current_project(selected);
        store.add_comment("session only".to_string(), "Jo".to_string());

        let raw = store.to_persisted_json().unwrap();
        let restored = ProjectStore::rehydrate(Some(&raw), StoreOptions::default());

        assert_eq!(restored.projects(), store.projects());
        assert_eq!(restored.current_project(), store.current_project());
        assert_eq!(restored.assets(), seed::assets().as_slice());
        assert_eq!(restored.comments(), seed::comments().as_slice());
    }

    #[test]
    fn test_persisted_envelope_shape() {
        let store = ProjectStore::default();
        let value: serde_json::Value =
            serde_json::from_str(&store.to_persisted_json().unwrap()).unwrap();

        assert_eq!(value["version"], 0);
        assert!(value["state"]["projects"].is_array());
        assert!(value["state"]["currentProject"].is_null());
        assert!(value["state"].get("assets").is_none());
        assert!(value["state"].get("comments").is_none());
    }

    #[test]
    fn test_full_persistence_restores_comments() {
        let options = StoreOptions {
            persist_all_collections: true,
            ..Default::default()
        };
        let mut store = ProjectStore::new(options);
        store.add_comment("kept".to_string(), "Jo".to_string());

        let raw = store.to_persisted_json().unwrap();
        let restored = ProjectStore::rehydrate(Some(&raw), options);
        assert_eq!(restored.comments(), store.comments());
        assert_eq!(restored.assets(), store.assets());
    }

    #[test]
    fn test_rehydrate_fallbacks() {
        let seed = ProjectStore::default();

        let missing = ProjectStore::rehydrate(None, StoreOptions::default());
        assert_eq!(missing.projects(), seed.projects());

        let corrupt = ProjectStore::rehydrate(Some("{not json"), StoreOptions::default());
        assert_eq!(corrupt.projects(), seed.projects());

        let other_version = ProjectStore::rehydrate(
            Some(r#"{"state":{"projects":[],"currentProject":null},"version":3}"#),
            StoreOptions::default(),
        );
        assert_eq!(other_version.projects(), seed.projects());

        let emptied = ProjectStore::rehydrate(
            Some(r#"{"state":{"projects":[],"currentProject":null},"version":0}"#),
            StoreOptions::default(),
        );
        assert!(emptied.projects().is_empty());
        assert_eq!(emptied.assets().len(), 3);
    }

    #[test]
    fn test_rehydrated_clock_stays_ahead_of_persisted_stamps() {
        let mut store = ProjectStore::default();
        store.update_project(
            "1",
            ProjectUpdate {
                title: Some("Future".to_string()),
                ..Default::default()
            },
        );
        let mut raw: serde_json::Value = serde_json::from_str(&store.to_persisted_json().unwrap()).unwrap();
        raw["state"]["projects"][0]["updatedAt"] = "2999-01-01T00:00:00.000Z".into();

        let mut restored = ProjectStore::rehydrate(Some(&raw.to_string()), StoreOptions::default());
        restored.update_project("1", ProjectUpdate::default());
        assert!(restored.project("1").unwrap().updated_at.as_str() > "2999-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_rehydrate_drops_duplicate_ids() {
        let mut raw: serde_json::Value =
            serde_json::from_str(&ProjectStore::default().to_persisted_json().unwrap()).unwrap();
        let projects = raw["state"]["projects"].as_array_mut().unwrap();
        let mut twin = projects[0].clone();
        twin["title"] = "Shadow Gala".into();
        projects.push(twin);
        let first_member = projects[0]["team"][0].clone();
        projects[0]["team"].as_array_mut().unwrap().push(first_member);

        let restored = ProjectStore::rehydrate(Some(&raw.to_string()), StoreOptions::default());
        let ids: Vec<&str> = restored.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let gala = restored.project("1").unwrap();
        assert_eq!(gala.title, "Corporate Gala 2024");
        let member_ids: Vec<&str> = gala.team.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(member_ids, vec!["tm1", "tm2", "tm3"]);
    }

    #[test]
    fn test_select_project() {
        let mut store = ProjectStore::default();

        assert!(!store.select_project("missing"));
        assert!(store.current_project().is_none());

        assert!(store.select_project("3"));
        assert_eq!(store.current_project(), store.project("3"));
    }
}
