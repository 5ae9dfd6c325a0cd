//! Domain Errors

use thiserror::Error;

/// Common result type for todo operations
pub type ToDoResult<T> = Result<T, ToDoError>;

/// Errors raised by list operations and the remote seed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToDoError {
    /// `remove_last` on a list with nothing in it
    #[error("cannot remove from an empty todo list")]
    EmptyList,

    #[error("no todo at index {index} (list has {len})")]
    NoSuchItem { index: usize, len: usize },

    /// Remote seed could not be fetched or decoded
    #[error("failed to fetch todo seed from {url}: {reason}")]
    FetchFailure { url: String, reason: String },
}

impl ToDoError {
    pub(crate) fn fetch(url: &str, reason: impl ToString) -> Self {
        ToDoError::FetchFailure {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
