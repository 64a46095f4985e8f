//! Application state

use std::path::{Path, PathBuf};
use std::sync::Arc;

use taskman_core::task::{JsonTaskStore, TaskRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    repository: TaskRepository,
    tasks_file: PathBuf,
}

impl AppState {
    /// Create a new AppState backed by the given tasks document.
    pub fn new(tasks_file: impl Into<PathBuf>) -> Self {
        let tasks_file = tasks_file.into();
        let repository = TaskRepository::new(JsonTaskStore::new(&tasks_file));

        Self {
            inner: Arc::new(AppStateInner {
                repository,
                tasks_file,
            }),
        }
    }

    /// Get reference to the task repository
    pub fn repository(&self) -> &TaskRepository {
        &self.inner.repository
    }

    /// Path of the backing tasks document
    pub fn tasks_file(&self) -> &Path {
        &self.inner.tasks_file
    }
}
