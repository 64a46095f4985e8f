//! Error types for the core library

use thiserror::Error;

/// Errors surfaced by the task repository.
///
/// Every repository operation reports failure through this type; the core
/// never panics on a data error. `messages()` yields the human-readable
/// list the presentation layer shows next to the form.
#[derive(Error, Debug)]
pub enum Error {
    /// Input failed validation; one message per failed field rule.
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),

    /// Update or delete referenced an id that is not in the collection.
    #[error("Task not found.")]
    TaskNotFound(u64),

    /// Rewriting the backing document failed; the previously persisted
    /// state is left in place and the attempted mutation is discarded.
    #[error("Failed to {op} task.")]
    Storage {
        op: &'static str,
        #[source]
        source: StoreError,
    },
}

impl Error {
    /// Human-readable messages for display, matching the form UI wording.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::Validation(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Low-level persistence failures, wrapped into [`Error::Storage`] by the
/// repository. Malformed content on *load* is not an error: the codec
/// recovers with an empty collection so the read path never fails.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_returned_one_per_rule() {
        let err = Error::Validation(vec![
            "Title is required.".to_string(),
            "Please enter a valid date.".to_string(),
        ]);
        assert_eq!(
            err.messages(),
            vec!["Title is required.", "Please enter a valid date."]
        );
    }

    #[test]
    fn not_found_renders_fixed_message() {
        let err = Error::TaskNotFound(42);
        assert_eq!(err.messages(), vec!["Task not found."]);
    }

    #[test]
    fn storage_message_names_the_operation() {
        let source = StoreError::Io(std::io::Error::other("disk full"));
        let err = Error::Storage { op: "save", source };
        assert_eq!(err.messages(), vec!["Failed to save task."]);
    }
}
