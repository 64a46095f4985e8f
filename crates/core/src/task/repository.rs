//! Task repository
//!
//! The only component that mutates the task collection. Every operation runs
//! the same request-scoped sequence: load the document, validate or locate,
//! mutate in memory, rewrite the document in full. Nothing is cached between
//! operations, so the document on disk is the single source of truth.

use chrono::NaiveDate;

use crate::error::Error;
use crate::Result;

use super::model::{self, Task, TaskStatus, DATE_FORMAT};
use super::store::JsonTaskStore;
use super::validation::validate;

pub struct TaskRepository {
    store: JsonTaskStore,
}

impl TaskRepository {
    pub fn new(store: JsonTaskStore) -> Self {
        Self { store }
    }

    /// All tasks, in persisted (insertion) order.
    pub async fn list_all(&self) -> Vec<Task> {
        self.store.load().await
    }

    /// First task with the given id, if any.
    pub async fn get_by_id(&self, id: u64) -> Option<Task> {
        self.store.load().await.into_iter().find(|t| t.id == id)
    }

    /// Create a task. Validation failures leave storage untouched.
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        date: &str,
        status: TaskStatus,
    ) -> Result<Task> {
        let date = self.check_input(title, date)?;

        let mut tasks = self.store.load().await;
        let task = Task::new(next_id(&tasks), title, description, date, status);
        tasks.push(task.clone());

        self.persist(&tasks, "save").await?;
        Ok(task)
    }

    /// Update every field of an existing task except `id` and `created_at`.
    pub async fn update(
        &self,
        id: u64,
        title: &str,
        description: &str,
        date: &str,
        status: TaskStatus,
    ) -> Result<Task> {
        let date = self.check_input(title, date)?;

        let mut tasks = self.store.load().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;

        task.title = title.trim().to_string();
        task.description = description.trim().to_string();
        task.date = date;
        task.status = status;
        task.updated_at = Some(model::now());
        let updated = task.clone();

        self.persist(&tasks, "update").await?;
        Ok(updated)
    }

    /// Remove a task, preserving the relative order of the rest.
    pub async fn delete(&self, id: u64) -> Result<()> {
        let mut tasks = self.store.load().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        tasks.remove(index);

        self.persist(&tasks, "delete").await
    }

    /// Run the validator, then parse the already-validated date string.
    fn check_input(&self, title: &str, date: &str) -> Result<NaiveDate> {
        let errors = validate(title, date);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| Error::Validation(vec![super::validation::DATE_INVALID.to_string()]))
    }

    async fn persist(&self, tasks: &[Task], op: &'static str) -> Result<()> {
        self.store.save(tasks).await.map_err(|source| {
            tracing::error!(error = %source, "failed to persist task document");
            Error::Storage { op, source }
        })
    }
}

/// Next id is max existing id + 1, or 1 for an empty collection. Recomputed
/// on every create, so deleting the highest-id task frees that id for the
/// next creation. Documented quirk of the scheme, kept intentionally.
/// Saturates at `u64::MAX` so a hand-edited document cannot wrap the id
/// back to zero.
fn next_id(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .map(|t| t.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}
