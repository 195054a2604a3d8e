//! The task repository: the live board and its persistence.
//!
//! The repository holds the current [`Board`] behind an [`Arc`]. Every
//! mutation builds the next board with one of the board transforms and then
//! swaps it in, so a snapshot handed out by [`TaskRepository::snapshot`]
//! never changes underneath its holder.
//!
//! After each successful mutation the new board is saved to the
//! [`BoardStore`]. Saving is best-effort: a failed save is logged and the
//! in-memory board stays authoritative.

use std::fmt;
use std::sync::Arc;

use tack_config::store::{load_board_or_seed, BoardStore};
use tack_protocol::{Board, Result, Task, TaskId, TaskLocation};
use tracing::{debug, instrument, warn};

/// Owns the live board and saves it after every change.
pub struct TaskRepository {
    board: Arc<Board>,
    store: Box<dyn BoardStore>,
}

impl fmt::Debug for TaskRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRepository")
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}

impl TaskRepository {
    /// Creates a repository over `board` that saves to `store`.
    ///
    /// Nothing is saved until the first mutation.
    #[must_use]
    pub fn new(board: Board, store: Box<dyn BoardStore>) -> Self {
        Self {
            board: Arc::new(board),
            store,
        }
    }

    /// Loads the board from `store`, falling back to the seed board.
    #[must_use]
    pub fn load(store: Box<dyn BoardStore>) -> Self {
        let board = load_board_or_seed(store.as_ref());
        Self::new(board, store)
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a shared handle to the current board.
    ///
    /// Later mutations replace the repository's board; the returned handle
    /// keeps pointing at this version.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Appends a new task to the tail of a column and returns it.
    ///
    /// # Errors
    ///
    /// - [`BoardError::EmptyContent`](tack_protocol::BoardError::EmptyContent)
    ///   if the content is blank.
    /// - [`BoardError::ColumnNotFound`](tack_protocol::BoardError::ColumnNotFound)
    ///   if the column does not exist.
    #[instrument(skip(self, content))]
    pub fn add_task(&mut self, column: &str, content: &str) -> Result<Task> {
        let (next, task) = self.board.with_task_added(column, content)?;
        debug!(task = %task.id, "task added");
        self.commit(next);
        Ok(task)
    }

    /// Removes a task from a column. Removing an absent task is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`](tack_protocol::BoardError::ColumnNotFound)
    /// if the column does not exist.
    #[instrument(skip(self), fields(task = %id))]
    pub fn remove_task(&mut self, column: &str, id: &TaskId) -> Result<()> {
        let next = self.board.with_task_removed(column, id)?;
        debug!("task removed");
        self.commit(next);
        Ok(())
    }

    /// Moves a task to the tail of another column.
    ///
    /// Moving a task onto its own column changes nothing.
    ///
    /// # Errors
    ///
    /// - [`BoardError::ColumnNotFound`](tack_protocol::BoardError::ColumnNotFound)
    ///   if either column does not exist.
    /// - [`BoardError::TaskNotFound`](tack_protocol::BoardError::TaskNotFound)
    ///   if the task is not in the source column.
    #[instrument(skip(self), fields(task = %id))]
    pub fn move_task(&mut self, source: &str, destination: &str, id: &TaskId) -> Result<()> {
        let next = self.board.with_task_moved(source, destination, id)?;
        debug!("task moved");
        self.commit(next);
        Ok(())
    }

    /// Finds which column currently holds a task.
    #[must_use]
    pub fn find_task(&self, id: &TaskId) -> Option<TaskLocation<'_>> {
        self.board.find_task(id)
    }

    fn commit(&mut self, next: Board) {
        self.board = Arc::new(next);
        if let Err(e) = self.store.save(&self.board) {
            warn!(error = %e, "failed to save board, keeping in-memory state");
        }
    }
}
