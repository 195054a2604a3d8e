//! Task-related types for the board.
//!
//! This module defines task identifiers and the task structure itself.
//!
//! # Identifier Forms
//!
//! Seeded tasks carry small integer ids while tasks created at runtime carry
//! UUIDs. Both forms must survive a save/load cycle, so a [`TaskId`] keeps the
//! form it was read in, but two ids are equal whenever their textual values
//! are equal:
//!
//! ```
//! use tack_protocol::TaskId;
//!
//! let numeric: TaskId = serde_json::from_str("1").unwrap();
//! let text: TaskId = serde_json::from_str(r#""1""#).unwrap();
//! assert_eq!(numeric, text);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The wire form a [`TaskId`] was created or read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdForm {
    Numeric,
    Text,
}

/// Unique identifier for a task.
///
/// Ids are compared by their textual value only, never by the form they
/// were written in.
///
/// # Examples
///
/// ```
/// use tack_protocol::TaskId;
///
/// let id = TaskId::new();
/// assert_eq!(id.as_str().len(), 36);
///
/// assert_eq!(TaskId::from(7u64), TaskId::from("7"));
/// ```
#[derive(Debug, Clone)]
pub struct TaskId {
    value: String,
    form: IdForm,
}

impl TaskId {
    /// Generates a fresh UUID v4 identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: uuid::Uuid::new_v4().to_string(),
            form: IdForm::Text,
        }
    }

    /// Returns the textual value of the id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the id is written as a JSON number on the wire.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::TaskId;
    ///
    /// assert!(TaskId::from(3u64).is_numeric());
    /// assert!(!TaskId::new().is_numeric());
    /// ```
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.form == IdForm::Numeric
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TaskId {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for TaskId {}

impl Hash for TaskId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self {
            value: value.to_string(),
            form: IdForm::Numeric,
        }
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_string(),
            form: IdForm::Text,
        }
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self {
            value,
            form: IdForm::Text,
        }
    }
}

impl From<uuid::Uuid> for TaskId {
    fn from(value: uuid::Uuid) -> Self {
        Self {
            value: value.to_string(),
            form: IdForm::Text,
        }
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.form {
            IdForm::Numeric => match self.value.parse::<u64>() {
                Ok(n) => serializer.serialize_u64(n),
                Err(_) => serializer.serialize_str(&self.value),
            },
            IdForm::Text => serializer.serialize_str(&self.value),
        }
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TaskIdVisitor;

        impl Visitor<'_> for TaskIdVisitor {
            type Value = TaskId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-negative integer or a string task id")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(TaskId::from(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                u64::try_from(value)
                    .map(TaskId::from)
                    .map_err(|_| E::custom(format!("negative task id: {value}")))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                // JSON5 readers may surface integers as floats.
                if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
                    Ok(TaskId::from(value as u64))
                } else {
                    Err(E::custom(format!("task id must be an integer: {value}")))
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                if value.is_empty() {
                    return Err(E::custom("task id cannot be empty"));
                }
                Ok(TaskId::from(value))
            }
        }

        deserializer.deserialize_any(TaskIdVisitor)
    }
}

/// A task on the board.
///
/// A task is owned by exactly one column of a [`Board`](crate::Board) at any
/// time; the task itself does not record which one.
///
/// # Examples
///
/// ```
/// use tack_protocol::Task;
///
/// let task = Task::new("Write release notes");
/// assert_eq!(task.content, "Write release notes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Free-text content shown on the card.
    pub content: String,
}

impl Task {
    /// Creates a new task with a freshly generated id.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            content: content.into(),
        }
    }

    /// Creates a task with a specific id.
    ///
    /// Used for the seed board and when recreating tasks from storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::{Task, TaskId};
    ///
    /// let task = Task::with_id(2u64, "Set up repository");
    /// assert_eq!(task.id, TaskId::from("2"));
    /// ```
    #[must_use]
    pub fn with_id(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}
