//! Centralized layout measurements for the TUI.
//!
//! Besides the shared constants, this module computes where every column and
//! card lands for a given board and area. The renderer draws from the same
//! [`HitMap`] the app uses for mouse hit-testing and drop-region
//! registration, so what is drawn and what is clickable never disagree.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use tack_protocol::{Board, ColumnKey, TaskId};

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the add-task bar in rows.
pub const INPUT_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each task card in rows: a border on each side of one content line.
pub const TASK_CARD_HEIGHT: u16 = 3;

/// Width of the delete button at the right edge of a card, in columns.
pub const DELETE_BUTTON_WIDTH: u16 = 3;

/// Width of the card drawn under the pointer while dragging.
pub const DRAG_CARD_WIDTH: u16 = 24;

/// Minimum terminal height for useful rendering.
///
/// Leaves room for the add-task bar, the status bar and a column tall enough
/// to show its border and a couple of cards.
pub const MIN_HEIGHT: u16 = INPUT_BAR_HEIGHT + STATUS_BAR_HEIGHT + 2 + 2 * TASK_CARD_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 40;

/// The screen areas of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenAreas {
    /// Header, if shown.
    pub header: Option<Rect>,
    /// The columns.
    pub board: Rect,
    /// The add-task bar.
    pub input: Rect,
    /// The status line.
    pub status: Rect,
}

/// Splits the terminal area into header, board, input bar and status bar.
///
/// The header is dropped when the terminal is shorter than
/// [`MIN_HEIGHT_WITH_HEADER`].
#[must_use]
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let header_height = if area.height >= MIN_HEIGHT_WITH_HEADER {
        HEADER_HEIGHT
    } else {
        0
    };
    let [header, board, input, status] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(INPUT_BAR_HEIGHT),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    ScreenAreas {
        header: (header_height > 0).then_some(header),
        board,
        input,
        status,
    }
}

/// Where one card landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHit {
    /// Task shown on the card.
    pub task: TaskId,
    /// Position of the card within its column.
    pub index: usize,
    /// The card's outer area.
    pub area: Rect,
}

impl CardHit {
    /// The delete button in the top-right of the card's content row.
    #[must_use]
    pub fn delete_button(&self) -> Rect {
        delete_button_area(self.area)
    }
}

/// Where one column landed, with its visible cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHit {
    /// The column's key.
    pub key: ColumnKey,
    /// The column's outer area, which is also its drop region.
    pub area: Rect,
    /// Cards that fit in the column, top to bottom.
    pub cards: Vec<CardHit>,
    /// Cards scrolled off above the first visible card.
    pub hidden_above: usize,
    /// Cards that did not fit below the last visible card.
    pub hidden_below: usize,
}

impl ColumnHit {
    /// Number of cards in the column that are not laid out.
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.hidden_above + self.hidden_below
    }
}

/// Column and card positions for one rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    columns: Vec<ColumnHit>,
}

impl HitMap {
    /// Lays `board` out left to right across `area`, one equal-width column
    /// per board column, each scrolled to its top.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::layout::Rect;
    /// use tack_protocol::{TaskId, seed_board};
    /// use tack_tui::layout::HitMap;
    ///
    /// let map = HitMap::compute(&seed_board(), Rect::new(0, 0, 90, 20));
    /// assert_eq!(map.columns().len(), 3);
    /// assert!(map.card(&TaskId::from(1u64)).is_some());
    /// ```
    #[must_use]
    pub fn compute(board: &Board, area: Rect) -> Self {
        Self::compute_with_selection(board, area, None)
    }

    /// Lays `board` out like [`compute`](Self::compute), scrolling the
    /// column at `selection.0` so that its card `selection.1` is visible.
    ///
    /// Cards scrolled out of a column are counted in
    /// [`ColumnHit::hidden_above`] and [`ColumnHit::hidden_below`].
    #[must_use]
    pub fn compute_with_selection(
        board: &Board,
        area: Rect,
        selection: Option<(usize, usize)>,
    ) -> Self {
        let count = board.len();
        if count == 0 || area.is_empty() {
            return Self::default();
        }

        let constraints = (0..count).map(|_| Constraint::Ratio(1, count as u32));
        let areas = Layout::horizontal(constraints).split(area);

        let columns = board
            .columns()
            .zip(areas.iter())
            .enumerate()
            .map(|(position, ((key, column), &column_area))| {
                let inner = column_inner(column_area);
                let visible = usize::from(inner.height / TASK_CARD_HEIGHT);
                let selected = selection
                    .filter(|(selected_column, _)| *selected_column == position)
                    .map(|(_, task)| task);
                let offset = scroll_offset(selected, column.len(), visible);

                let cards: Vec<CardHit> = column
                    .items
                    .iter()
                    .enumerate()
                    .skip(offset)
                    .take(visible)
                    .zip(0u16..)
                    .map(|((index, task), slot)| CardHit {
                        task: task.id.clone(),
                        index,
                        area: Rect::new(
                            inner.x,
                            inner.y + slot * TASK_CARD_HEIGHT,
                            inner.width,
                            TASK_CARD_HEIGHT,
                        ),
                    })
                    .collect();
                let hidden_below = column.len().saturating_sub(offset + cards.len());

                ColumnHit {
                    key: key.clone(),
                    area: column_area,
                    cards,
                    hidden_above: offset,
                    hidden_below,
                }
            })
            .collect();

        Self { columns }
    }

    /// Returns every laid-out column in board order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnHit] {
        &self.columns
    }

    /// Returns `true` when nothing was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column under a cell.
    #[must_use]
    pub fn column_at(&self, column: u16, row: u16) -> Option<&ColumnHit> {
        let position = Position::new(column, row);
        self.columns.iter().find(|hit| hit.area.contains(position))
    }

    /// Returns the card under a cell, with the key of its column.
    #[must_use]
    pub fn card_at(&self, column: u16, row: u16) -> Option<(&ColumnKey, &CardHit)> {
        let position = Position::new(column, row);
        let hit = self.column_at(column, row)?;
        hit.cards
            .iter()
            .find(|card| card.area.contains(position))
            .map(|card| (&hit.key, card))
    }

    /// Returns where the card for `task` landed.
    #[must_use]
    pub fn card(&self, task: &TaskId) -> Option<&CardHit> {
        self.columns
            .iter()
            .flat_map(|hit| hit.cards.iter())
            .find(|card| &card.task == task)
    }

    /// Returns `true` when the cell is on the delete button of `task`'s card.
    #[must_use]
    pub fn is_delete_button(&self, task: &TaskId, column: u16, row: u16) -> bool {
        self.card(task)
            .is_some_and(|card| card.delete_button().contains(Position::new(column, row)))
    }
}

/// First card to show so that `selected` stays in view, keeping it near the
/// middle of the column once the list is scrolled.
fn scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if total <= visible {
        return 0;
    }

    let max_offset = total - visible;
    selected.saturating_sub(visible / 2).min(max_offset)
}

/// The area inside a column's border.
#[must_use]
pub fn column_inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// The delete button inside a card's area.
#[must_use]
pub fn delete_button_area(card: Rect) -> Rect {
    let width = DELETE_BUTTON_WIDTH.min(card.width.saturating_sub(2));
    Rect {
        x: (card.x + card.width).saturating_sub(1 + width),
        y: card.y.saturating_add(1),
        width,
        height: 1.min(card.height.saturating_sub(2)),
    }
}
