//! Tantivy-based search index module.
//!
//! Full-text search over projects with field boosting. The index lives in RAM
//! and is rebuilt from the store at startup.

use std::sync::Arc;
use tantivy::collector::TopDocs;
use tantivy::query::{BooleanQuery, BoostQuery, Occur, QueryParser};
use tantivy::schema::{Field, Schema, Value, STORED, STRING, TEXT};
use tantivy::{doc, Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument};
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::Project;
use crate::store::PersistentStore;

/// Field boost values.
const BOOST_TITLE: f32 = 10.0;
const BOOST_TEAM: f32 = 6.0;
const BOOST_DESCRIPTION: f32 = 5.0;

const WRITER_MEMORY_BYTES: usize = 20_000_000;

/// Search result with project id and relevance score.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub project_id: String,
    pub score: f32,
}

/// Search index schema fields.
struct SearchFields {
    project_id: Field,
    title: Field,
    description: Field,
    team: Field,
}

/// Tantivy search index for projects.
pub struct SearchIndex {
    index: Index,
    reader: IndexReader,
    writer: Arc<RwLock<IndexWriter>>,
    fields: SearchFields,
}

impl SearchIndex {
    /// Create an empty in-memory index.
    pub fn open_in_ram() -> Result<Self, AppError> {
        let mut schema_builder = Schema::builder();
        let project_id = schema_builder.add_text_field("project_id", STRING | STORED);
        let title = schema_builder.add_text_field("title", TEXT | STORED);
        let description = schema_builder.add_text_field("description", TEXT);
        let team = schema_builder.add_text_field("team", TEXT);
        let schema = schema_builder.build();

        let fields = SearchFields {
            project_id,
            title,
            description,
            team,
        };

        let index = Index::create_in_ram(schema);

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| AppError::Search(format!("Failed to create reader: {}", e)))?;

        let writer = index
            .writer_with_num_threads(1, WRITER_MEMORY_BYTES)
            .map_err(|e| AppError::Search(format!("Failed to create writer: {}", e)))?;

        Ok(Self {
            index,
            reader,
            writer: Arc::new(RwLock::new(writer)),
            fields,
        })
    }

    /// Rebuild the entire index from projects.
    pub async fn rebuild(&self, projects: &[Project]) -> Result<(), AppError> {
        let mut writer = self.writer.write().await;

        writer.delete_all_documents()?;
        for project in projects {
            writer.add_document(self.create_document(project))?;
        }
        writer.commit()?;

        self.reader.reload()?;

        tracing::info!("Search index rebuilt with {} projects", projects.len());
        Ok(())
    }

    /// Bring one project's document in line with the store.
    ///
    /// The project is read after the writer lock is taken, so concurrent
    /// refreshes always leave the latest stored value indexed. A project that
    /// is no longer stored is removed.
    pub async fn refresh_project(
        &self,
        project_id: &str,
        store: &PersistentStore,
    ) -> Result<(), AppError> {
        let mut writer = self.writer.write().await;
        let current = store.project(project_id).await;

        let term = tantivy::Term::from_field_text(self.fields.project_id, project_id);
        writer.delete_term(term);
        if let Some(project) = &current {
            writer.add_document(self.create_document(project))?;
        }
        writer.commit()?;

        self.reader.reload()?;

        Ok(())
    }

    /// Search for projects matching the query.
    pub fn search(
        &self,
        query_str: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SearchResult>, AppError> {
        if query_str.trim().is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let searcher = self.reader.searcher();
        let num_docs = usize::try_from(searcher.num_docs()).unwrap_or(usize::MAX);
        if offset >= num_docs {
            return Ok(Vec::new());
        }
        let fetch = offset.saturating_add(limit).min(num_docs);

        let field_queries = [
            (self.fields.title, BOOST_TITLE),
            (self.fields.team, BOOST_TEAM),
            (self.fields.description, BOOST_DESCRIPTION),
        ];

        let mut subqueries: Vec<(Occur, Box<dyn tantivy::query::Query>)> = Vec::new();
        for (field, boost) in field_queries {
            let field_parser = QueryParser::for_index(&self.index, vec![field]);
            let field_query = field_parser
                .parse_query(query_str)
                .map_err(|e| AppError::BadRequest(format!("Invalid search query: {}", e)))?;
            subqueries.push((Occur::Should, Box::new(BoostQuery::new(field_query, boost))));
        }
        let query = BooleanQuery::new(subqueries);

        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(fetch))
            .map_err(|e| AppError::Search(format!("Search failed: {}", e)))?;

        let results = top_docs
            .into_iter()
            .skip(offset)
            .take(limit)
            .filter_map(|(score, doc_address)| {
                let doc: TantivyDocument = searcher.doc(doc_address).ok()?;
                let project_id = doc.get_first(self.fields.project_id)?.as_str()?.to_string();
                Some(SearchResult { project_id, score })
            })
            .collect();

        Ok(results)
    }

    fn create_document(&self, project: &Project) -> TantivyDocument {
        let team = project
            .team
            .iter()
            .map(|m| format!("{} {} {}", m.name, m.role, m.email))
            .collect::<Vec<_>>()
            .join(" ");

        doc!(
            self.fields.project_id => project.id.clone(),
            self.fields.title => project.title.clone(),
            self.fields.description => project.description.clone(),
            self.fields.team => team
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_database, StateSlot};
    use crate::models::ProjectUpdate;
    use crate::store::{seed, StoreOptions};

    #[tokio::test]
    async fn test_search_seed_projects() {
        let index = SearchIndex::open_in_ram().unwrap();
        index.rebuild(&seed::projects()).await.unwrap();

        let results = index.search("wedding", 10, 0).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].project_id, "2");

        let results = index.search("rodriguez", 10, 0).unwrap();
        assert_eq!(results[0].project_id, "3");
    }

    #[tokio::test]
    async fn test_title_outranks_description() {
        let index = SearchIndex::open_in_ram().unwrap();
        let mut projects = seed::projects();
        projects[0].description = "Conference afterparty".to_string();
        index.rebuild(&projects).await.unwrap();

        let results = index.search("conference", 10, 0).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].project_id, "3");
    }

    #[tokio::test]
    async fn test_refresh_follows_the_store() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("search.sqlite"))
            .await
            .unwrap();
        let store = PersistentStore::open(StateSlot::new(pool), "project-storage", StoreOptions::default())
            .await
            .unwrap();
        let index = SearchIndex::open_in_ram().unwrap();
        index.rebuild(&store.snapshot().await.projects).await.unwrap();

        let update = |title: &str| ProjectUpdate {
            title: Some(title.to_string()),
            description: Some("Outdoor lunch".to_string()),
            ..Default::default()
        };
        store.update_project("2", update("Garden Party")).await.unwrap();
        store.update_project("2", update("Harvest Fair")).await.unwrap();

        // Refreshes arriving out of order still index the stored value
        index.refresh_project("2", &store).await.unwrap();
        index.refresh_project("2", &store).await.unwrap();
        assert!(index.search("wedding", 10, 0).unwrap().is_empty());
        assert!(index.search("garden", 10, 0).unwrap().is_empty());
        assert_eq!(index.search("harvest", 10, 0).unwrap().len(), 1);

        assert!(store.delete_project("2").await);
        index.refresh_project("2", &store).await.unwrap();
        assert!(index.search("harvest", 10, 0).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_limit_and_offset_bounds() {
        let index = SearchIndex::open_in_ram().unwrap();
        index.rebuild(&seed::projects()).await.unwrap();

        assert!(index.search("wedding", 0, 0).unwrap().is_empty());
        assert!(index.search("wedding", 10, usize::MAX).unwrap().is_empty());
        assert!(index.search("wedding", 10, 1).unwrap().is_empty());
        assert_eq!(index.search("wedding", usize::MAX, 0).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_empty_query() {
        let index = SearchIndex::open_in_ram().unwrap();
        assert!(index.search("  ", 10, 0).unwrap().is_empty());
    }
}
