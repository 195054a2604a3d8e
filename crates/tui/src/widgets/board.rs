//! Board widget: every column, left to right.

use ratatui::buffer::Buffer;
use tack_protocol::{Board, ColumnKey, TaskId};

use crate::layout::HitMap;
use crate::palette::Palette;
use crate::widgets::lane::{LaneHighlight, render_lane};

/// Selection and drag state the board is drawn with.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView<'a> {
    /// Index of the selected column.
    pub selected_column: usize,
    /// Index of the selected card within that column.
    pub selected_task: Option<usize>,
    /// Column a dragged card hovers.
    pub hovered: Option<&'a ColumnKey>,
    /// The task being dragged.
    pub dragging: Option<&'a TaskId>,
}

/// Renders every column of `board` where `map` placed it.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_protocol::{Theme, seed_board};
/// use tack_tui::layout::HitMap;
/// use tack_tui::palette::Palette;
/// use tack_tui::widgets::{BoardView, render_board};
///
/// let board = seed_board();
/// let area = Rect::new(0, 0, 90, 20);
/// let map = HitMap::compute(&board, area);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, &map, BoardView::default(), &Palette::for_theme(Theme::Dark), &mut buf);
/// ```
pub fn render_board(
    board: &Board,
    map: &HitMap,
    view: BoardView<'_>,
    palette: &Palette,
    buf: &mut Buffer,
) {
    for (index, hit) in map.columns().iter().enumerate() {
        let Some(column) = board.column(hit.key.as_str()) else {
            continue;
        };
        let selected = index == view.selected_column;
        let highlight = LaneHighlight {
            selected,
            selected_task: view.selected_task.filter(|_| selected),
            hovered: view.hovered == Some(&hit.key),
            dragging: view.dragging,
        };
        render_lane(column, hit, highlight, palette, buf);
    }
}
