//! File-based task storage codec
//!
//! Persists the task collection as a single pretty-printed JSON array. Every
//! save is a full-file rewrite; there is no cache and no incremental append.

use std::path::PathBuf;

use crate::error::StoreError;

use super::model::Task;

/// JSON file store for the task collection.
///
/// The path is injected at construction; nothing else is configurable.
pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the full collection.
    ///
    /// Never fails: a missing document is seeded with an empty array, and an
    /// unreadable or malformed document falls back to an empty collection so
    /// the read path always produces something renderable.
    pub async fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            if let Err(e) = self.seed_empty().await {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to seed task document");
            }
            return Vec::new();
        }

        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read task document");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed task document, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the full collection, replacing the previous document.
    ///
    /// Writes to a sibling temp file and renames it over the target, so a
    /// failed write leaves the previous content in place rather than a
    /// partially written array.
    pub async fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(tasks)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn seed_empty(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, "[]").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::model::{Task, TaskStatus, DATE_FORMAT};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_task(id: u64, title: &str) -> Task {
        let date = NaiveDate::parse_from_str("2024-06-01", DATE_FORMAT).unwrap();
        Task::new(id, title, "some notes", date, TaskStatus::Pending)
    }

    #[tokio::test]
    async fn load_seeds_missing_document_with_empty_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        let store = JsonTaskStore::new(&path);

        let tasks = store.load().await;
        assert!(tasks.is_empty());

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "[]");
    }

    #[tokio::test]
    async fn load_recovers_from_malformed_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let store = JsonTaskStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips_the_collection() {
        let temp = TempDir::new().unwrap();
        let store = JsonTaskStore::new(temp.path().join("tasks.json"));

        let tasks = vec![sample_task(1, "First"), sample_task(2, "Second")];
        store.save(&tasks).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded, tasks);

        // A second save of the loaded collection is semantically a no-op.
        store.save(&loaded).await.unwrap();
        assert_eq!(store.load().await, tasks);
    }

    #[tokio::test]
    async fn save_preserves_insertion_order() {
        let temp = TempDir::new().unwrap();
        let store = JsonTaskStore::new(temp.path().join("tasks.json"));

        let tasks = vec![sample_task(3, "c"), sample_task(1, "a"), sample_task(2, "b")];
        store.save(&tasks).await.unwrap();

        let ids: Vec<u64> = store.load().await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let store = JsonTaskStore::new(temp.path().join("nested/dir/tasks.json"));

        store.save(&[sample_task(1, "deep")]).await.unwrap();
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        let store = JsonTaskStore::new(&path);

        store.save(&[sample_task(1, "a")]).await.unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }
}
