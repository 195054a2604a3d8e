//! Board types and structures.
//!
//! This module defines the column and board types. A [`Board`] is an ordered
//! mapping from [`ColumnKey`] to [`Column`]; the set of keys is fixed when
//! the board is built and only each column's task sequence changes
//! afterwards.
//!
//! # Immutable Replace
//!
//! Board transforms never mutate a board in place. Each of
//! [`Board::with_task_added`], [`Board::with_task_removed`] and
//! [`Board::with_task_moved`] takes `&self` and returns a new board. Columns
//! are shared behind [`Arc`], so a transform only copies the columns it
//! touches and a reader holding the previous board never observes a
//! half-applied change.
//!
//! # Examples
//!
//! ```
//! use tack_protocol::{Board, Column, TaskId};
//!
//! let board = Board::builder()
//!     .column("todo", Column::new("To do"))
//!     .column("done", Column::new("Done"))
//!     .build();
//!
//! let (board, task) = board.with_task_added("todo", "Ship it").unwrap();
//! let board = board.with_task_moved("todo", "done", &task.id).unwrap();
//!
//! let location = board.find_task(&task.id).unwrap();
//! assert_eq!(location.column.as_str(), "done");
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::task::{Task, TaskId};

/// Stable identity of a column, e.g. `"todo"`.
///
/// # Examples
///
/// ```
/// use tack_protocol::ColumnKey;
///
/// let key = ColumnKey::from("inProgress");
/// assert_eq!(key.as_str(), "inProgress");
/// assert_eq!(key, "inProgress");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ColumnKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ColumnKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColumnKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single column on the board.
///
/// Holds the display name and the ordered task sequence.
///
/// # Examples
///
/// ```
/// use tack_protocol::{Column, Task};
///
/// let column = Column::with_items("Done", vec![Task::with_id(1u64, "Write project")]);
/// assert_eq!(column.len(), 1);
/// assert_eq!(column.name, "Done");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Human-readable column name.
    pub name: String,
    /// Tasks in this column, in display order.
    #[serde(default)]
    pub items: Vec<Task>,
}

impl Column {
    /// Creates a new empty column with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Creates a column pre-populated with tasks.
    #[must_use]
    pub fn with_items(name: impl Into<String>, items: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to a task by id, if present.
    #[must_use]
    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.items.iter().find(|t| &t.id == id)
    }

    /// Returns `true` if the task is in this column.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get_task(id).is_some()
    }

    fn remove_task(&mut self, id: &TaskId) -> Option<Task> {
        let pos = self.items.iter().position(|t| &t.id == id)?;
        Some(self.items.remove(pos))
    }
}

/// Where a task currently lives on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLocation<'a> {
    /// The column holding the task.
    pub column: &'a ColumnKey,
    /// The task itself.
    pub task: &'a Task,
}

/// The full board: an ordered mapping from column key to column.
///
/// The mapping order is the display order. Every task id appears in exactly
/// one column; [`Board::validate`] checks this for boards read from storage
/// and the transforms preserve it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    columns: IndexMap<ColumnKey, Arc<Column>>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order; column order is part of the board.
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(other.columns.iter())
                .all(|((ka, ca), (kb, cb))| ka == kb && ca == cb)
    }
}

impl Eq for Board {}

/// Builder for a [`Board`] with a fixed set of columns.
#[derive(Debug, Default)]
pub struct BoardBuilder {
    columns: IndexMap<ColumnKey, Arc<Column>>,
}

impl BoardBuilder {
    /// Appends a column. A repeated key replaces the earlier column in place.
    #[must_use]
    pub fn column(mut self, key: impl Into<ColumnKey>, column: Column) -> Self {
        self.columns.insert(key.into(), Arc::new(column));
        self
    }

    /// Finishes the board.
    #[must_use]
    pub fn build(self) -> Board {
        Board {
            columns: self.columns,
        }
    }
}

impl Board {
    /// Starts building a board.
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over the columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = (&ColumnKey, &Column)> {
        self.columns.iter().map(|(key, column)| (key, column.as_ref()))
    }

    /// Iterates over the column keys in display order.
    pub fn column_keys(&self) -> impl Iterator<Item = &ColumnKey> {
        self.columns.keys()
    }

    /// Returns the column with the given key.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.get(key).map(|column| column.as_ref())
    }

    /// Returns the column at the given display position.
    #[must_use]
    pub fn column_at(&self, index: usize) -> Option<(&ColumnKey, &Column)> {
        self.columns
            .get_index(index)
            .map(|(key, column)| (key, column.as_ref()))
    }

    /// Returns the display position of a column.
    #[must_use]
    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.get_index_of(key)
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.values().map(|c| c.len()).sum()
    }

    /// Finds a task by id with a linear scan across all columns.
    ///
    /// Returns the first match in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::{seed_board, TaskId};
    ///
    /// let board = seed_board();
    /// let location = board.find_task(&TaskId::from(3u64)).unwrap();
    /// assert_eq!(location.column.as_str(), "inProgress");
    /// assert!(board.find_task(&TaskId::from(99u64)).is_none());
    /// ```
    #[must_use]
    pub fn find_task(&self, id: &TaskId) -> Option<TaskLocation<'_>> {
        self.columns.iter().find_map(|(key, column)| {
            column
                .get_task(id)
                .map(|task| TaskLocation { column: key, task })
        })
    }

    /// Checks that every task id appears in exactly one column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateTask`] naming the first repeated id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for task in self.columns.values().flat_map(|c| c.items.iter()) {
            if !seen.insert(&task.id) {
                return Err(BoardError::DuplicateTask(task.id.clone()));
            }
        }
        Ok(())
    }

    /// Returns a new board with a task appended to the tail of a column.
    ///
    /// The content is trimmed and the task receives a fresh id.
    ///
    /// # Errors
    ///
    /// - [`BoardError::EmptyContent`] if the content is empty after trimming.
    /// - [`BoardError::ColumnNotFound`] if the column does not exist.
    pub fn with_task_added(&self, column: &str, content: &str) -> Result<(Self, Task)> {
        let content = content.trim();
        if content.is_empty() {
            return Err(BoardError::EmptyContent);
        }

        let task = Task::new(content);
        let mut next = self.clone();
        let entry = next
            .columns
            .get_mut(column)
            .ok_or_else(|| BoardError::ColumnNotFound(ColumnKey::from(column)))?;
        Arc::make_mut(entry).items.push(task.clone());

        Ok((next, task))
    }

    /// Returns a new board without the given task in the named column.
    ///
    /// Removing a task that is not in the column is not an error; the
    /// returned board equals `self`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] if the column does not exist.
    pub fn with_task_removed(&self, column: &str, id: &TaskId) -> Result<Self> {
        let existing = self
            .columns
            .get(column)
            .ok_or_else(|| BoardError::ColumnNotFound(ColumnKey::from(column)))?;
        if !existing.contains(id) {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        if let Some(entry) = next.columns.get_mut(column) {
            Arc::make_mut(entry).remove_task(id);
        }
        Ok(next)
    }

    /// Returns a new board with a task moved to the tail of another column.
    ///
    /// Moving a task onto its own column is a no-op.
    ///
    /// # Errors
    ///
    /// - [`BoardError::ColumnNotFound`] if either column does not exist.
    /// - [`BoardError::TaskNotFound`] if the task is not in the source column.
    pub fn with_task_moved(&self, source: &str, destination: &str, id: &TaskId) -> Result<Self> {
        if source == destination {
            return Ok(self.clone());
        }
        if !self.columns.contains_key(destination) {
            return Err(BoardError::ColumnNotFound(ColumnKey::from(destination)));
        }

        let mut next = self.clone();
        let from = next
            .columns
            .get_mut(source)
            .ok_or_else(|| BoardError::ColumnNotFound(ColumnKey::from(source)))?;
        let task = Arc::make_mut(from)
            .remove_task(id)
            .ok_or_else(|| BoardError::TaskNotFound {
                column: ColumnKey::from(source),
                task: id.clone(),
            })?;

        if let Some(to) = next.columns.get_mut(destination) {
            Arc::make_mut(to).items.push(task);
        }
        Ok(next)
    }

    /// Serializes the board to its JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SerializationFailed`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(BoardError::SerializationFailed)
    }

    /// Serializes the board to an indented JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SerializationFailed`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(BoardError::SerializationFailed)
    }

    /// Parses a board from its JSON snapshot and validates it.
    ///
    /// # Errors
    ///
    /// - [`BoardError::DeserializationFailed`] if the JSON is malformed.
    /// - [`BoardError::DuplicateTask`] if a task id appears twice.
    pub fn from_json(json: &str) -> Result<Self> {
        let board: Self = serde_json::from_str(json).map_err(BoardError::DeserializationFailed)?;
        board.validate()?;
        Ok(board)
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::seed::seed_board;
    use proptest::prelude::*;

    const COLUMNS: [&str; 4] = ["todo", "inProgress", "done", "missing"];

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, String),
        Remove(usize, u64),
        Move(usize, usize, u64),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..COLUMNS.len(), "[a-z ]{0,12}").prop_map(|(c, s)| Op::Add(c, s)),
            (0..COLUMNS.len(), 0u64..6).prop_map(|(c, id)| Op::Remove(c, id)),
            (0..COLUMNS.len(), 0..COLUMNS.len(), 0u64..6).prop_map(|(s, d, id)| Op::Move(s, d, id)),
        ]
    }

    fn apply(board: &Board, op: &Op) -> Board {
        let result = match op {
            Op::Add(c, content) => board.with_task_added(COLUMNS[*c], content).map(|(b, _)| b),
            Op::Remove(c, id) => board.with_task_removed(COLUMNS[*c], &TaskId::from(*id)),
            Op::Move(s, d, id) => board.with_task_moved(COLUMNS[*s], COLUMNS[*d], &TaskId::from(*id)),
        };
        // Failed transforms leave the board as it was.
        result.unwrap_or_else(|_| board.clone())
    }

    proptest! {
        /// Every reachable board keeps each task id in exactly one column.
        #[test]
        fn every_task_in_exactly_one_column(ops in prop::collection::vec(arb_op(), 0..40)) {
            let mut board = seed_board();
            for op in &ops {
                board = apply(&board, op);
                prop_assert!(board.validate().is_ok());
            }
            let keys: Vec<&str> = board.column_keys().map(ColumnKey::as_str).collect();
            prop_assert_eq!(keys, vec!["todo", "inProgress", "done"]);
        }

        /// Removing twice yields the same board as removing once.
        #[test]
        fn remove_twice_equals_once(ops in prop::collection::vec(arb_op(), 0..20), c in 0..3usize, id in 0u64..6) {
            let mut board = seed_board();
            for op in &ops {
                board = apply(&board, op);
            }
            let id = TaskId::from(id);
            let once = board.with_task_removed(COLUMNS[c], &id).expect("known column");
            let twice = once.with_task_removed(COLUMNS[c], &id).expect("known column");
            prop_assert_eq!(once, twice);
        }

        /// A board survives a JSON round trip unchanged.
        #[test]
        fn snapshot_roundtrip(ops in prop::collection::vec(arb_op(), 0..30)) {
            let mut board = seed_board();
            for op in &ops {
                board = apply(&board, op);
            }
            let json = board.to_json().expect("serialize");
            let parsed = Board::from_json(&json).expect("deserialize");
            prop_assert_eq!(board, parsed);
        }
    }
}
