//! The drag session controller.
//!
//! At most one drag session exists at a time. Its lifecycle is:
//!
//! ```text
//! Idle -> Active -> Idle
//!          |  ^
//!          +--+ update_candidate
//! ```
//!
//! [`DragController::begin`] captures the dragged task, hover updates only
//! record the candidate column, and the session leaves through exactly one
//! of [`DragController::complete`] or [`DragController::cancel`]. Beginning
//! a drag while another is active discards the stale one first.

use std::mem;

use tack_protocol::{BoardError, ColumnKey, Result, Task, TaskId};
use tracing::debug;

use crate::repository::TaskRepository;

/// A drag in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    source: ColumnKey,
    task: Task,
    candidate: Option<ColumnKey>,
}

impl DragSession {
    /// The column the task was picked up from.
    #[must_use]
    pub fn source(&self) -> &ColumnKey {
        &self.source
    }

    /// The task as it was when the drag began.
    #[must_use]
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// The column currently hovered, if any.
    #[must_use]
    pub fn candidate(&self) -> Option<&ColumnKey> {
        self.candidate.as_ref()
    }
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Active(DragSession),
}

/// Why a drop left the board unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The drop happened outside every column.
    OutsideRegion,
    /// The task was dropped on the column it already lives in.
    SameColumn,
    /// The task was deleted while it was being dragged.
    TaskMissing,
    /// The drop target names a column the board does not have.
    UnknownColumn,
}

/// What [`DragController::complete`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No drag was in progress.
    NoSession,
    /// The session ended without changing the board.
    Discarded(DiscardReason),
    /// The task now sits at the tail of `to`.
    Moved {
        /// The moved task.
        task: TaskId,
        /// The column it left.
        from: ColumnKey,
        /// The column it joined.
        to: ColumnKey,
    },
}

impl DropOutcome {
    /// Returns `true` if the board changed.
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Owns the single in-flight drag session.
///
/// # Examples
///
/// ```
/// use tack_config::MemoryBoardStore;
/// use tack_engine::{DragController, DropOutcome, TaskRepository};
/// use tack_protocol::{seed_board, TaskId};
///
/// let mut repository = TaskRepository::new(seed_board(), Box::new(MemoryBoardStore::new()));
/// let mut drag = DragController::new();
///
/// drag.begin(&repository, "todo", &TaskId::from(1u64)).unwrap();
/// drag.update_candidate(Some("done".into()));
/// let outcome = drag.complete(&mut repository, Some("done"));
///
/// assert!(outcome.is_moved());
/// assert!(!drag.is_active());
/// ```
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Active(_))
    }

    /// Returns the session in progress.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Idle => None,
            DragState::Active(session) => Some(session),
        }
    }

    /// Starts dragging a task out of `column`.
    ///
    /// Any session already in progress is discarded first, without touching
    /// the board.
    ///
    /// # Errors
    ///
    /// - [`BoardError::ColumnNotFound`] if the column does not exist.
    /// - [`BoardError::TaskNotFound`] if the task is not in the column.
    ///
    /// The controller is idle after an error.
    pub fn begin(
        &mut self,
        repository: &TaskRepository,
        column: &str,
        id: &TaskId,
    ) -> Result<()> {
        if let DragState::Active(stale) = mem::take(&mut self.state) {
            debug!(task = %stale.task.id, "discarding stale drag session");
        }

        let task = repository
            .board()
            .column(column)
            .ok_or_else(|| BoardError::ColumnNotFound(ColumnKey::from(column)))?
            .get_task(id)
            .ok_or_else(|| BoardError::TaskNotFound {
                column: ColumnKey::from(column),
                task: id.clone(),
            })?
            .clone();

        debug!(column, task = %id, "drag started");
        self.state = DragState::Active(DragSession {
            source: ColumnKey::from(column),
            task,
            candidate: None,
        });
        Ok(())
    }

    /// Records the hovered column.
    ///
    /// Returns `false`, and does nothing, when no drag is in progress.
    pub fn update_candidate(&mut self, candidate: Option<ColumnKey>) -> bool {
        let DragState::Active(session) = &mut self.state else {
            debug!("ignoring hover update without a drag session");
            return false;
        };

        if session.candidate != candidate {
            debug!(candidate = ?candidate, "drag candidate changed");
            session.candidate = candidate;
        }
        true
    }

    /// Ends the drag by dropping onto `target`.
    ///
    /// The task is looked up again at drop time, since it may have been
    /// deleted or moved while it was dragged. Any failure to apply the move
    /// leaves the board unchanged and is reported as a discard, never as an
    /// error. The controller is always idle afterwards.
    pub fn complete(
        &mut self,
        repository: &mut TaskRepository,
        target: Option<&str>,
    ) -> DropOutcome {
        let DragState::Active(session) = mem::take(&mut self.state) else {
            debug!("ignoring drop without a drag session");
            return DropOutcome::NoSession;
        };

        let outcome = Self::apply_drop(repository, &session, target);
        debug!(task = %session.task.id, ?outcome, "drag completed");
        outcome
    }

    fn apply_drop(
        repository: &mut TaskRepository,
        session: &DragSession,
        target: Option<&str>,
    ) -> DropOutcome {
        let Some(target) = target else {
            return DropOutcome::Discarded(DiscardReason::OutsideRegion);
        };
        if session.source == target {
            return DropOutcome::Discarded(DiscardReason::SameColumn);
        }

        let id = &session.task.id;
        let Some(from) = repository.find_task(id).map(|location| location.column.clone()) else {
            return DropOutcome::Discarded(DiscardReason::TaskMissing);
        };
        if from == target {
            return DropOutcome::Discarded(DiscardReason::SameColumn);
        }

        match repository.move_task(from.as_str(), target, id) {
            Ok(()) => DropOutcome::Moved {
                task: id.clone(),
                from,
                to: ColumnKey::from(target),
            },
            Err(BoardError::ColumnNotFound(_)) => {
                DropOutcome::Discarded(DiscardReason::UnknownColumn)
            }
            Err(e) => {
                debug!(error = %e, "drop target no longer applies");
                DropOutcome::Discarded(DiscardReason::TaskMissing)
            }
        }
    }

    /// Abandons the drag without touching the board.
    ///
    /// Returns `true` if a session was in progress.
    pub fn cancel(&mut self) -> bool {
        match mem::take(&mut self.state) {
            DragState::Idle => false,
            DragState::Active(session) => {
                debug!(task = %session.task.id, "drag cancelled");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tack_config::MemoryBoardStore;
    use tack_protocol::seed_board;

    fn repository() -> TaskRepository {
        TaskRepository::new(seed_board(), Box::new(MemoryBoardStore::new()))
    }

    fn task_ids(repository: &TaskRepository, column: &str) -> Vec<String> {
        repository
            .board()
            .column(column)
            .unwrap()
            .items
            .iter()
            .map(|t| t.id.to_string())
            .collect()
    }

    #[test]
    fn begin_captures_source_and_task() {
        let repository = repository();
        let mut drag = DragController::new();

        drag.begin(&repository, "todo", &TaskId::from(2u64)).unwrap();
        let session = drag.session().unwrap();
        assert_eq!(session.source().as_str(), "todo");
        assert_eq!(session.task().content, "Set up repository");
        assert!(session.candidate().is_none());
        assert!(drag.is_active());
    }

    #[test]
    fn begin_on_missing_task_stays_idle() {
        let repository = repository();
        let mut drag = DragController::new();
        drag.begin(&repository, "todo", &TaskId::from(1u64)).unwrap();

        let err = drag
            .begin(&repository, "done", &TaskId::from(1u64))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(!drag.is_active());

        let err = drag
            .begin(&repository, "archive", &TaskId::from(1u64))
            .unwrap_err();
        assert!(matches!(err, BoardError::ColumnNotFound(_)));
    }

    #[test]
    fn begin_replaces_stale_session() {
        let mut repository = repository();
        let mut drag = DragController::new();

        drag.begin(&repository, "todo", &TaskId::from(1u64)).unwrap();
        drag.update_candidate(Some("done".into()));
        drag.begin(&repository, "inProgress", &TaskId::from(3u64))
            .unwrap();

        let session = drag.session().unwrap();
        assert_eq!(session.task().id, TaskId::from(3u64));
        assert!(session.candidate().is_none());
        assert_eq!(*repository.board(), seed_board());

        let outcome = drag.complete(&mut repository, Some("done"));
        assert_eq!(
            outcome,
            DropOutcome::Moved {
                task: TaskId::from(3u64),
                from: ColumnKey::from("inProgress"),
                to: ColumnKey::from("done"),
            }
        );
        assert_eq!(task_ids(&repository, "todo"), vec!["1", "2"]);
    }

    #[test]
    fn update_without_session_is_ignored() {
        let mut drag = DragController::new();
        assert!(!drag.update_candidate(Some("done".into())));
        assert!(!drag.is_active());
    }

    #[test]
    fn update_tracks_candidate() {
        let repository = repository();
        let mut drag = DragController::new();
        drag.begin(&repository, "todo", &TaskId::from(1u64)).unwrap();

        assert!(drag.update_candidate(Some("inProgress".into())));
        assert_eq!(drag.session().unwrap().candidate().unwrap(), "inProgress");
        assert!(drag.update_candidate(None));
        assert!(drag.session().unwrap().candidate().is_none());
        assert_eq!(*repository.board(), seed_board());
    }

    #[test]
    fn complete_without_session_is_no_session() {
        let mut repository = repository();
        let mut drag = DragController::new();
        assert_eq!(
            drag.complete(&mut repository, Some("done")),
            DropOutcome::NoSession
        );
    }

    #[test]
    fn complete_moves_to_tail() {
        let mut repository = repository();
        let mut drag = DragController::new();

        drag.begin(&repository, "todo", &TaskId::from(1u64)).unwrap();
        let outcome = drag.complete(&mut repository, Some("inProgress"));

        assert!(outcome.is_moved());
        assert_eq!(task_ids(&repository, "todo"), vec!["2"]);
        assert_eq!(task_ids(&repository, "inProgress"), vec!["3", "1"]);
        assert!(!drag.is_active());
    }

    #[test]
    fn drop_outside_discards() {
        let mut repository = repository();
        let mut drag = DragController::new();

        drag.begin(&repository, "todo", &TaskId::from(1u64)).unwrap();
        assert_eq!(
            drag.complete(&mut repository, None),
            DropOutcome::Discarded(DiscardReason::OutsideRegion)
        );
        assert_eq!(*repository.board(), seed_board());
        assert!(!drag.is_active());
    }

    #[test]
    fn drop_on_source_discards() {
        let mut repository = repository();
        let mut drag = DragController::new();

        drag.begin(&repository, "todo", &TaskId::from(1u64)).unwrap();
        assert_eq!(
            drag.complete(&mut repository, Some("todo")),
            DropOutcome::Discarded(DiscardReason::SameColumn)
        );
        assert_eq!(*repository.board(), seed_board());
    }

    #[test]
    fn drop_on_unknown_column_discards() {
        let mut repository = repository();
        let mut drag = DragController::new();

        drag.begin(&repository, "todo", &TaskId::from(1u64)).unwrap();
        assert_eq!(
            drag.complete(&mut repository, Some("archive")),
            DropOutcome::Discarded(DiscardReason::UnknownColumn)
        );
        assert_eq!(*repository.board(), seed_board());
        assert!(!drag.is_active());
    }

    #[test]
    fn task_deleted_mid_drag_is_discarded() {
        let mut repository = repository();
        let mut drag = DragController::new();
        let id = TaskId::from(1u64);

        drag.begin(&repository, "todo", &id).unwrap();
        repository.remove_task("todo", &id).unwrap();

        assert_eq!(
            drag.complete(&mut repository, Some("done")),
            DropOutcome::Discarded(DiscardReason::TaskMissing)
        );
        assert!(repository.find_task(&id).is_none());
        assert!(repository.board().column("done").unwrap().is_empty());
        assert!(!drag.is_active());
    }

    #[test]
    fn task_moved_mid_drag_moves_from_current_column() {
        let mut repository = repository();
        let mut drag = DragController::new();
        let id = TaskId::from(1u64);

        drag.begin(&repository, "todo", &id).unwrap();
        repository.move_task("todo", "inProgress", &id).unwrap();

        let outcome = drag.complete(&mut repository, Some("done"));
        assert_eq!(
            outcome,
            DropOutcome::Moved {
                task: id.clone(),
                from: ColumnKey::from("inProgress"),
                to: ColumnKey::from("done"),
            }
        );
        assert_eq!(task_ids(&repository, "done"), vec!["1"]);
        assert_eq!(task_ids(&repository, "inProgress"), vec!["3"]);
    }

    #[test]
    fn cancel_discards_without_mutation() {
        let repository = repository();
        let mut drag = DragController::new();

        drag.begin(&repository, "todo", &TaskId::from(1u64)).unwrap();
        drag.update_candidate(Some("done".into()));
        assert!(drag.cancel());
        assert!(!drag.cancel());
        assert_eq!(*repository.board(), seed_board());
    }
}
