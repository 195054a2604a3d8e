//! The board controller: the engine's surface towards the presentation layer.
//!
//! [`BoardController`] owns the task repository, the drag session, the
//! registered drop regions and the input sensor. Views read the board
//! through [`BoardController::board`], call the task and session operations
//! directly, or feed raw input through [`BoardController::handle_input`]
//! and let the sensor drive the session.

use std::sync::Arc;
use std::time::Instant;

use tack_config::BoardStore;
use tack_protocol::{Board, ColumnKey, Result, Task, TaskId};
use tracing::debug;

use crate::collision::DropRegions;
use crate::geometry::{Point, Rect};
use crate::repository::TaskRepository;
use crate::sensor::{DragHandle, InputEvent, Sensor, SensorAction, SensorPolicy};
use crate::session::{DragController, DragSession, DropOutcome};

/// What an input event did.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// Nothing happened.
    Ignored,
    /// A drag of `task` out of `column` started.
    DragStarted {
        /// Source column.
        column: ColumnKey,
        /// Dragged task.
        task: TaskId,
    },
    /// The drag now hovers the given column, or none.
    Hovered(Option<ColumnKey>),
    /// The drag ended with a drop.
    Dropped(DropOutcome),
    /// The drag was abandoned.
    Cancelled,
    /// A card was clicked rather than dragged.
    Clicked {
        /// The clicked card.
        handle: DragHandle,
        /// Where the press was released.
        position: Point,
    },
    /// A touch turned out to be a scroll.
    Scrolled,
}

/// Owns the board and every piece of drag state.
///
/// # Examples
///
/// ```
/// use tack_config::MemoryBoardStore;
/// use tack_engine::{BoardController, Rect, SensorPolicy};
/// use tack_protocol::TaskId;
///
/// let mut controller = BoardController::load(Box::new(MemoryBoardStore::new()), SensorPolicy::default());
/// controller.register_drop_region("todo", Rect::new(0.0, 0.0, 20.0, 20.0));
/// controller.register_drop_region("done", Rect::new(40.0, 0.0, 20.0, 20.0));
///
/// controller.begin_drag("todo", &TaskId::from(1u64)).unwrap();
/// controller.update_candidate(Some("done".into()));
/// assert!(controller.complete_drag(Some("done")).is_moved());
/// assert_eq!(controller.board().column("done").unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct BoardController {
    repository: TaskRepository,
    drag: DragController,
    regions: DropRegions,
    sensor: Sensor,
}

impl BoardController {
    /// Creates a controller over `board` that saves to `store`.
    #[must_use]
    pub fn new(board: Board, store: Box<dyn BoardStore>, policy: SensorPolicy) -> Self {
        Self::from_repository(TaskRepository::new(board, store), policy)
    }

    /// Creates a controller over the board stored in `store`, or the seed
    /// board if nothing usable is stored.
    #[must_use]
    pub fn load(store: Box<dyn BoardStore>, policy: SensorPolicy) -> Self {
        Self::from_repository(TaskRepository::load(store), policy)
    }

    fn from_repository(repository: TaskRepository, policy: SensorPolicy) -> Self {
        Self {
            repository,
            drag: DragController::new(),
            regions: DropRegions::new(),
            sensor: Sensor::new(policy),
        }
    }

    /// Returns a read-only snapshot of the board.
    #[must_use]
    pub fn board(&self) -> Arc<Board> {
        self.repository.snapshot()
    }

    /// Appends a new task to a column.
    ///
    /// # Errors
    ///
    /// Fails on blank content or an unknown column; the board is unchanged.
    pub fn add_task(&mut self, column: &str, content: &str) -> Result<Task> {
        self.repository.add_task(column, content)
    }

    /// Removes a task from a column; removing an absent task is a no-op.
    ///
    /// # Errors
    ///
    /// Fails if the column does not exist.
    pub fn remove_task(&mut self, column: &str, id: &TaskId) -> Result<()> {
        self.repository.remove_task(column, id)
    }

    /// Starts dragging a task, replacing any drag in progress.
    ///
    /// # Errors
    ///
    /// Fails if the task is not in the column; no drag is active afterwards.
    pub fn begin_drag(&mut self, column: &str, id: &TaskId) -> Result<()> {
        self.drag.begin(&self.repository, column, id)
    }

    /// Records the hovered column. Ignored when no drag is active.
    pub fn update_candidate(&mut self, candidate: Option<ColumnKey>) -> bool {
        self.drag.update_candidate(candidate)
    }

    /// Drops the dragged task onto `target`, or outside every column if
    /// `None`.
    pub fn complete_drag(&mut self, target: Option<&str>) -> DropOutcome {
        self.sensor.reset();
        self.drag.complete(&mut self.repository, target)
    }

    /// Abandons the drag in progress. Returns `true` if there was one.
    pub fn cancel_drag(&mut self) -> bool {
        self.sensor.reset();
        self.drag.cancel()
    }

    /// Returns the drag in progress.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Registers or replaces the drop region of a column.
    pub fn register_drop_region(&mut self, key: impl Into<ColumnKey>, rect: Rect) {
        self.regions.register(key, rect);
    }

    /// Removes the drop region of a column.
    pub fn unregister_drop_region(&mut self, key: &str) -> bool {
        self.regions.unregister(key)
    }

    /// Returns the registered drop regions.
    #[must_use]
    pub fn drop_regions(&self) -> &DropRegions {
        &self.regions
    }

    /// Returns the column whose drop region best matches `point`.
    #[must_use]
    pub fn resolve_target(&self, point: Point) -> Option<ColumnKey> {
        self.regions.resolve(point).cloned()
    }

    /// Returns the sensor thresholds in use.
    #[must_use]
    pub fn sensor_policy(&self) -> SensorPolicy {
        self.sensor.policy()
    }

    /// Feeds a raw input event through the sensor and applies the result.
    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        match self.sensor.handle(event) {
            Some(action) => self.apply(action),
            None => InputOutcome::Ignored,
        }
    }

    /// Lets a held touch activate without a move event.
    pub fn tick(&mut self, now: Instant) -> InputOutcome {
        match self.sensor.tick(now) {
            Some(action) => self.apply(action),
            None => InputOutcome::Ignored,
        }
    }

    fn apply(&mut self, action: SensorAction) -> InputOutcome {
        match action {
            SensorAction::Begin { handle, position } => {
                if let Err(e) = self.drag.begin(&self.repository, handle.column.as_str(), &handle.task)
                {
                    debug!(error = %e, "pressed card is gone, ignoring drag");
                    self.sensor.reset();
                    return InputOutcome::Ignored;
                }
                let candidate = self.resolve_target(position);
                self.drag.update_candidate(candidate);
                InputOutcome::DragStarted {
                    column: handle.column,
                    task: handle.task,
                }
            }
            SensorAction::Hover { position } => {
                let candidate = self.resolve_target(position);
                if self.drag.update_candidate(candidate.clone()) {
                    InputOutcome::Hovered(candidate)
                } else {
                    InputOutcome::Ignored
                }
            }
            SensorAction::Drop { position } => {
                let target = self.resolve_target(position);
                InputOutcome::Dropped(
                    self.drag
                        .complete(&mut self.repository, target.as_ref().map(ColumnKey::as_str)),
                )
            }
            SensorAction::Cancel => {
                if self.drag.cancel() {
                    InputOutcome::Cancelled
                } else {
                    InputOutcome::Ignored
                }
            }
            SensorAction::Click { handle, position } => InputOutcome::Clicked { handle, position },
            SensorAction::Scroll => InputOutcome::Scrolled,
        }
    }
}
