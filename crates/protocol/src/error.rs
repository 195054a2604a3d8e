//! Error types for the tack-protocol crate.
//!
//! This module defines the errors board operations can report. They fall
//! into two families:
//!
//! - validation failures ([`BoardError::EmptyContent`]), where the caller
//!   supplied unusable input and nothing changed;
//! - lookup failures ([`BoardError::ColumnNotFound`],
//!   [`BoardError::TaskNotFound`]), where the named column or task does not
//!   exist (any more).

use thiserror::Error;

use crate::board::ColumnKey;
use crate::task::TaskId;

/// Errors that can occur during board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task content was empty after trimming.
    #[error("invalid task content: content cannot be empty")]
    EmptyContent,

    /// The named column does not exist on the board.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnKey),

    /// The task is not present in the named column.
    #[error("task {task} not found in column {column}")]
    TaskNotFound {
        /// The column that was searched.
        column: ColumnKey,
        /// The task that was looked up.
        task: TaskId,
    },

    /// A task id appears in more than one column.
    #[error("task {0} appears in more than one column")]
    DuplicateTask(TaskId),

    /// Failed to serialize a board to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a board from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),
}

impl BoardError {
    /// Returns `true` for input validation failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::BoardError;
    ///
    /// assert!(BoardError::EmptyContent.is_validation());
    /// ```
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyContent)
    }

    /// Returns `true` when a named column or task could not be found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ColumnNotFound(_) | Self::TaskNotFound { .. })
    }
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = BoardError::EmptyContent;
        assert_eq!(
            err.to_string(),
            "invalid task content: content cannot be empty"
        );

        let err = BoardError::TaskNotFound {
            column: ColumnKey::from("todo"),
            task: TaskId::from(1u64),
        };
        assert_eq!(err.to_string(), "task 1 not found in column todo");
    }

    #[test]
    fn error_classification() {
        assert!(BoardError::EmptyContent.is_validation());
        assert!(!BoardError::EmptyContent.is_not_found());

        let err = BoardError::ColumnNotFound(ColumnKey::from("archive"));
        assert!(err.is_not_found());
        assert!(!err.is_validation());

        assert!(!BoardError::DuplicateTask(TaskId::from(1u64)).is_not_found());
    }
}
