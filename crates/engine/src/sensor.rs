//! Input sensors: turning raw pointer and touch events into drag gestures.
//!
//! A [`Sensor`] is a pure state machine. It is fed [`InputEvent`]s and
//! answers with the [`SensorAction`] the gesture implies, if any. It never
//! touches the board itself; [`BoardController`](crate::BoardController)
//! applies the actions.
//!
//! ```text
//! Idle --down on a card--> Pending --threshold met--> Dragging --up--> Idle (Drop)
//!                             |                          \--interrupt--> Idle (Cancel)
//!                             |--up--> Idle (Click)
//!                             \--touch drifts early--> Rejected --up--> Idle (Scroll)
//! ```
//!
//! # Activation
//!
//! - Pointer presses become drags once the pointer has travelled at least
//!   the configured distance from where it went down. Releasing before
//!   that is a click.
//! - Touch presses become drags once held for the configured delay without
//!   drifting further than the tolerance. Drifting further before the
//!   delay elapses is a scroll. Hosts that poll call [`Sensor::tick`] so a
//!   contact held perfectly still still activates.
//!
//! Only one pointer is tracked at a time. Events from other pointers are
//! ignored, except that a second press during a gesture is a multi-touch
//! conflict and abandons the gesture.

use std::mem;
use std::time::{Duration, Instant};

use tack_config::SensorConfig;
use tack_protocol::{ColumnKey, TaskId};
use tracing::debug;

use crate::geometry::Point;

/// Identifies one pointer or touch contact.
pub type PointerId = u64;

/// The kind of device that produced a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Mouse-class input.
    Pointer,
    /// Touch input.
    Touch,
}

/// The task card a press landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragHandle {
    /// Column holding the card.
    pub column: ColumnKey,
    /// Task shown on the card.
    pub task: TaskId,
}

impl DragHandle {
    /// Creates a handle for a card.
    #[must_use]
    pub fn new(column: impl Into<ColumnKey>, task: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            task: task.into(),
        }
    }
}

/// A raw input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A button or contact went down.
    Down {
        /// Device kind.
        kind: InputKind,
        /// Which pointer.
        pointer: PointerId,
        /// Where it went down.
        position: Point,
        /// The card under the press, if any.
        handle: Option<DragHandle>,
        /// When it went down.
        at: Instant,
    },
    /// A pressed pointer moved.
    Move {
        /// Which pointer.
        pointer: PointerId,
        /// Where it is now.
        position: Point,
        /// When it moved.
        at: Instant,
    },
    /// A button or contact was released.
    Up {
        /// Which pointer.
        pointer: PointerId,
        /// Where it was released.
        position: Point,
    },
    /// Tracking was lost, for example the pointer left the surface.
    Interrupt,
}

/// What a gesture means for the drag session.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorAction {
    /// The press became a drag of `handle`.
    Begin {
        /// The dragged card.
        handle: DragHandle,
        /// Pointer position at activation.
        position: Point,
    },
    /// The drag moved.
    Hover {
        /// Pointer position.
        position: Point,
    },
    /// The drag was released.
    Drop {
        /// Release position.
        position: Point,
    },
    /// The drag was abandoned.
    Cancel,
    /// The press was released before it became a drag.
    Click {
        /// The pressed card.
        handle: DragHandle,
        /// Release position.
        position: Point,
    },
    /// A touch moved too early and is a scroll, not a drag.
    Scroll,
}

/// Activation thresholds, in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorPolicy {
    /// Pointer travel needed to start a drag.
    pub pointer_distance: f64,
    /// Touch hold time needed to start a drag.
    pub touch_delay: Duration,
    /// Touch drift allowed while holding.
    pub touch_tolerance: f64,
}

impl Default for SensorPolicy {
    fn default() -> Self {
        Self::from(&SensorConfig::default())
    }
}

impl From<&SensorConfig> for SensorPolicy {
    fn from(config: &SensorConfig) -> Self {
        Self {
            pointer_distance: f64::from(config.pointer.distance),
            touch_delay: Duration::from_millis(config.touch.delay_ms),
            touch_tolerance: f64::from(config.touch.tolerance),
        }
    }
}

#[derive(Debug, Clone)]
struct Press {
    kind: InputKind,
    pointer: PointerId,
    handle: DragHandle,
    origin: Point,
    current: Point,
    pressed_at: Instant,
}

#[derive(Debug, Clone, Default)]
enum SensorState {
    #[default]
    Idle,
    Pending(Press),
    Dragging {
        pointer: PointerId,
    },
    Rejected {
        pointer: PointerId,
    },
}

/// Recognizes drag gestures under a [`SensorPolicy`].
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use tack_engine::{DragHandle, InputEvent, InputKind, Point, Sensor, SensorAction};
///
/// let mut sensor = Sensor::default();
/// let at = Instant::now();
///
/// sensor.handle(InputEvent::Down {
///     kind: InputKind::Pointer,
///     pointer: 0,
///     position: Point::new(10.0, 10.0),
///     handle: Some(DragHandle::new("todo", 1u64)),
///     at,
/// });
/// let action = sensor.handle(InputEvent::Move {
///     pointer: 0,
///     position: Point::new(20.0, 10.0),
///     at,
/// });
/// assert!(matches!(action, Some(SensorAction::Begin { .. })));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sensor {
    policy: SensorPolicy,
    state: SensorState,
}

impl Sensor {
    /// Creates an idle sensor.
    #[must_use]
    pub fn new(policy: SensorPolicy) -> Self {
        Self {
            policy,
            state: SensorState::Idle,
        }
    }

    /// Returns the activation thresholds.
    #[must_use]
    pub fn policy(&self) -> SensorPolicy {
        self.policy
    }

    /// Returns `true` when no gesture is being tracked.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, SensorState::Idle)
    }

    /// Returns `true` once a gesture has been recognized as a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SensorState::Dragging { .. })
    }

    /// Forgets the gesture in progress.
    pub fn reset(&mut self) {
        self.state = SensorState::Idle;
    }

    /// Feeds one event and returns the action it implies.
    pub fn handle(&mut self, event: InputEvent) -> Option<SensorAction> {
        match event {
            InputEvent::Down {
                kind,
                pointer,
                position,
                handle,
                at,
            } => self.on_down(kind, pointer, position, handle, at),
            InputEvent::Move {
                pointer,
                position,
                at,
            } => self.on_move(pointer, position, at),
            InputEvent::Up { pointer, position } => self.on_up(pointer, position),
            InputEvent::Interrupt => self.on_interrupt(),
        }
    }

    /// Activates a touch press that has been held long enough.
    pub fn tick(&mut self, now: Instant) -> Option<SensorAction> {
        match mem::take(&mut self.state) {
            SensorState::Pending(press)
                if press.kind == InputKind::Touch
                    && now.saturating_duration_since(press.pressed_at) >= self.policy.touch_delay =>
            {
                Some(self.activate(press))
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    fn on_down(
        &mut self,
        kind: InputKind,
        pointer: PointerId,
        position: Point,
        handle: Option<DragHandle>,
        at: Instant,
    ) -> Option<SensorAction> {
        let press = handle.map(|handle| Press {
            kind,
            pointer,
            handle,
            origin: position,
            current: position,
            pressed_at: at,
        });

        match mem::take(&mut self.state) {
            SensorState::Idle => {
                self.arm(press);
                None
            }
            SensorState::Pending(active) if active.pointer == pointer => {
                debug!(pointer, "press restarted before release");
                self.arm(press);
                None
            }
            SensorState::Pending(active) => {
                debug!(pointer, tracked = active.pointer, "multi-touch conflict, press abandoned");
                self.state = SensorState::Rejected {
                    pointer: active.pointer,
                };
                None
            }
            SensorState::Dragging { pointer: tracked } if tracked == pointer => {
                debug!(pointer, "drag lost its release, cancelling");
                self.arm(press);
                Some(SensorAction::Cancel)
            }
            SensorState::Dragging { pointer: tracked } => {
                debug!(pointer, tracked, "multi-touch conflict, drag cancelled");
                self.state = SensorState::Rejected { pointer: tracked };
                Some(SensorAction::Cancel)
            }
            SensorState::Rejected { pointer: tracked } if tracked == pointer => {
                self.arm(press);
                None
            }
            rejected @ SensorState::Rejected { .. } => {
                self.state = rejected;
                None
            }
        }
    }

    fn on_move(&mut self, pointer: PointerId, position: Point, at: Instant) -> Option<SensorAction> {
        match mem::take(&mut self.state) {
            SensorState::Pending(mut press) if press.pointer == pointer => {
                press.current = position;
                let travelled = press.origin.distance_to(position);
                let kind = press.kind;
                match kind {
                    InputKind::Pointer if travelled >= self.policy.pointer_distance => {
                        Some(self.activate(press))
                    }
                    InputKind::Touch
                        if at.saturating_duration_since(press.pressed_at)
                            >= self.policy.touch_delay =>
                    {
                        Some(self.activate(press))
                    }
                    InputKind::Touch if travelled > self.policy.touch_tolerance => {
                        debug!(pointer, travelled, "touch moved before activation, treating as scroll");
                        self.state = SensorState::Rejected { pointer };
                        Some(SensorAction::Scroll)
                    }
                    _ => {
                        self.state = SensorState::Pending(press);
                        None
                    }
                }
            }
            SensorState::Dragging { pointer: tracked } if tracked == pointer => {
                self.state = SensorState::Dragging { pointer };
                Some(SensorAction::Hover { position })
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    fn on_up(&mut self, pointer: PointerId, position: Point) -> Option<SensorAction> {
        match mem::take(&mut self.state) {
            SensorState::Pending(press) if press.pointer == pointer => {
                Some(SensorAction::Click {
                    handle: press.handle,
                    position,
                })
            }
            SensorState::Dragging { pointer: tracked } if tracked == pointer => {
                Some(SensorAction::Drop { position })
            }
            SensorState::Rejected { pointer: tracked } if tracked == pointer => None,
            other => {
                self.state = other;
                None
            }
        }
    }

    fn on_interrupt(&mut self) -> Option<SensorAction> {
        match mem::take(&mut self.state) {
            SensorState::Dragging { .. } => Some(SensorAction::Cancel),
            _ => None,
        }
    }

    fn arm(&mut self, press: Option<Press>) {
        self.state = match press {
            Some(press) => SensorState::Pending(press),
            None => SensorState::Idle,
        };
    }

    fn activate(&mut self, press: Press) -> SensorAction {
        debug!(pointer = press.pointer, kind = ?press.kind, "drag activated");
        self.state = SensorState::Dragging {
            pointer: press.pointer,
        };
        SensorAction::Begin {
            handle: press.handle,
            position: press.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUSE: PointerId = 0;

    fn handle() -> DragHandle {
        DragHandle::new("todo", 1u64)
    }

    fn down(kind: InputKind, pointer: PointerId, x: f64, y: f64, at: Instant) -> InputEvent {
        InputEvent::Down {
            kind,
            pointer,
            position: Point::new(x, y),
            handle: Some(handle()),
            at,
        }
    }

    fn moved(pointer: PointerId, x: f64, y: f64, at: Instant) -> InputEvent {
        InputEvent::Move {
            pointer,
            position: Point::new(x, y),
            at,
        }
    }

    fn up(pointer: PointerId, x: f64, y: f64) -> InputEvent {
        InputEvent::Up {
            pointer,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn pointer_below_threshold_is_click() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        assert_eq!(sensor.handle(down(InputKind::Pointer, MOUSE, 10.0, 10.0, t0)), None);
        assert_eq!(sensor.handle(moved(MOUSE, 13.0, 10.0, t0)), None);
        assert!(!sensor.is_dragging());

        let action = sensor.handle(up(MOUSE, 13.0, 10.0));
        assert_eq!(
            action,
            Some(SensorAction::Click {
                handle: handle(),
                position: Point::new(13.0, 10.0),
            })
        );
        assert!(sensor.is_idle());
    }

    #[test]
    fn pointer_at_threshold_begins_drag() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(down(InputKind::Pointer, MOUSE, 10.0, 10.0, t0));
        let action = sensor.handle(moved(MOUSE, 13.0, 14.0, t0));
        assert_eq!(
            action,
            Some(SensorAction::Begin {
                handle: handle(),
                position: Point::new(13.0, 14.0),
            })
        );

        assert_eq!(
            sensor.handle(moved(MOUSE, 30.0, 14.0, t0)),
            Some(SensorAction::Hover {
                position: Point::new(30.0, 14.0)
            })
        );
        assert_eq!(
            sensor.handle(up(MOUSE, 31.0, 14.0)),
            Some(SensorAction::Drop {
                position: Point::new(31.0, 14.0)
            })
        );
        assert!(sensor.is_idle());
    }

    #[test]
    fn press_on_empty_space_is_ignored() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(InputEvent::Down {
            kind: InputKind::Pointer,
            pointer: MOUSE,
            position: Point::new(0.0, 0.0),
            handle: None,
            at: t0,
        });
        assert!(sensor.is_idle());
        assert_eq!(sensor.handle(moved(MOUSE, 50.0, 0.0, t0)), None);
        assert_eq!(sensor.handle(up(MOUSE, 50.0, 0.0)), None);
    }

    #[test]
    fn events_without_press_are_ignored() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        assert_eq!(sensor.handle(moved(MOUSE, 5.0, 5.0, t0)), None);
        assert_eq!(sensor.handle(up(MOUSE, 5.0, 5.0)), None);
        assert_eq!(sensor.handle(InputEvent::Interrupt), None);
        assert_eq!(sensor.tick(t0), None);
        assert!(sensor.is_idle());
    }

    #[test]
    fn touch_held_still_activates_on_tick() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(down(InputKind::Touch, 7, 10.0, 10.0, t0));
        assert_eq!(sensor.tick(t0 + Duration::from_millis(50)), None);
        assert!(!sensor.is_dragging());

        let action = sensor.tick(t0 + Duration::from_millis(100));
        assert!(matches!(action, Some(SensorAction::Begin { .. })));
        assert!(sensor.is_dragging());
    }

    #[test]
    fn touch_small_drift_then_hold_activates_on_move() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(down(InputKind::Touch, 7, 10.0, 10.0, t0));
        assert_eq!(
            sensor.handle(moved(7, 13.0, 10.0, t0 + Duration::from_millis(40))),
            None
        );
        let action = sensor.handle(moved(7, 14.0, 10.0, t0 + Duration::from_millis(120)));
        assert_eq!(
            action,
            Some(SensorAction::Begin {
                handle: handle(),
                position: Point::new(14.0, 10.0),
            })
        );
    }

    #[test]
    fn touch_moving_early_is_scroll() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(down(InputKind::Touch, 7, 10.0, 10.0, t0));
        let action = sensor.handle(moved(7, 10.0, 30.0, t0 + Duration::from_millis(20)));
        assert_eq!(action, Some(SensorAction::Scroll));

        assert_eq!(sensor.tick(t0 + Duration::from_millis(500)), None);
        assert_eq!(sensor.handle(moved(7, 10.0, 40.0, t0)), None);
        assert_eq!(sensor.handle(up(7, 10.0, 40.0)), None);
        assert!(sensor.is_idle());
    }

    #[test]
    fn touch_tap_is_click() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(down(InputKind::Touch, 7, 10.0, 10.0, t0));
        assert!(matches!(
            sensor.handle(up(7, 10.0, 10.0)),
            Some(SensorAction::Click { .. })
        ));
    }

    #[test]
    fn other_pointers_are_ignored() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(down(InputKind::Pointer, MOUSE, 10.0, 10.0, t0));
        assert_eq!(sensor.handle(moved(9, 80.0, 10.0, t0)), None);
        assert_eq!(sensor.handle(up(9, 80.0, 10.0)), None);
        assert!(!sensor.is_idle());
    }

    #[test]
    fn second_contact_cancels_drag() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(down(InputKind::Touch, 1, 10.0, 10.0, t0));
        sensor.tick(t0 + Duration::from_millis(150));
        assert!(sensor.is_dragging());

        let action = sensor.handle(down(InputKind::Touch, 2, 50.0, 50.0, t0));
        assert_eq!(action, Some(SensorAction::Cancel));
        assert!(!sensor.is_dragging());

        assert_eq!(sensor.handle(moved(1, 60.0, 10.0, t0)), None);
        assert_eq!(sensor.handle(up(1, 60.0, 10.0)), None);
        assert!(sensor.is_idle());
    }

    #[test]
    fn second_contact_abandons_pending_press() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(down(InputKind::Touch, 1, 10.0, 10.0, t0));
        assert_eq!(sensor.handle(down(InputKind::Touch, 2, 50.0, 50.0, t0)), None);
        assert_eq!(sensor.tick(t0 + Duration::from_secs(1)), None);
        assert_eq!(sensor.handle(up(1, 10.0, 10.0)), None);
        assert!(sensor.is_idle());
    }

    #[test]
    fn interrupt_cancels_drag() {
        let mut sensor = Sensor::default();
        let t0 = Instant::now();

        sensor.handle(down(InputKind::Pointer, MOUSE, 0.0, 0.0, t0));
        sensor.handle(moved(MOUSE, 10.0, 0.0, t0));
        assert_eq!(sensor.handle(InputEvent::Interrupt), Some(SensorAction::Cancel));
        assert!(sensor.is_idle());
        assert_eq!(sensor.handle(up(MOUSE, 10.0, 0.0)), None);
    }

    #[test]
    fn policy_follows_config() {
        let mut config = SensorConfig::default();
        config.pointer.distance = 2;
        config.touch.delay_ms = 300;

        let policy = SensorPolicy::from(&config);
        assert_eq!(policy.pointer_distance, 2.0);
        assert_eq!(policy.touch_delay, Duration::from_millis(300));
        assert_eq!(policy.touch_tolerance, 5.0);
    }
}
