//! Main application struct and run loop.
//!
//! [`App`] owns the engine's [`BoardController`] and the view state. Every
//! frame it lays the board out, registers each column as a drop region and
//! remembers where cards landed, so mouse presses can be matched to cards
//! and handed to the engine's sensor.

use std::fmt;
use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tack_config::ThemeStore;
use tack_engine::{
    BoardController, DragHandle, DropOutcome, InputEvent, InputKind, InputOutcome, Point,
    PointerId,
};
use tack_protocol::{Message, Theme};
use tracing::{debug, warn};

use crate::{
    AppState, Focus,
    event::{event_to_message, poll_event},
    layout::{HitMap, MIN_HEIGHT, MIN_WIDTH, screen_areas},
    palette::Palette,
    terminal::AppTerminal,
    widgets::{
        BoardView, Status, render_board, render_drag_card, render_help_overlay, render_input_bar,
        render_status_bar,
    },
};

/// The terminal reports a single mouse.
const MOUSE_POINTER: PointerId = 0;

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
pub struct App {
    controller: BoardController,
    state: AppState,
    theme: Theme,
    theme_store: Box<dyn ThemeStore>,
    should_quit: bool,
    /// Last known terminal area.
    last_area: Rect,
    /// Whether the header was shown in the last render.
    header_visible: bool,
    /// Where columns and cards landed in the last render.
    hit_map: HitMap,
    /// Last pointer cell while the button is held.
    pointer: Option<(u16, u16)>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("state", &self.state)
            .field("theme", &self.theme)
            .field("should_quit", &self.should_quit)
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates a new application around a board controller.
    ///
    /// `theme_store` receives the preference every time the theme is toggled.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_config::{MemoryBoardStore, MemoryThemeStore};
    /// use tack_engine::{BoardController, SensorPolicy};
    /// use tack_protocol::Theme;
    /// use tack_tui::App;
    ///
    /// let controller =
    ///     BoardController::load(Box::new(MemoryBoardStore::new()), SensorPolicy::default());
    /// let app = App::new(controller, Theme::Dark, Box::new(MemoryThemeStore::new()));
    /// assert_eq!(app.theme(), Theme::Dark);
    /// ```
    #[must_use]
    pub fn new(controller: BoardController, theme: Theme, theme_store: Box<dyn ThemeStore>) -> Self {
        Self {
            controller,
            state: AppState::new(),
            theme,
            theme_store,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            hit_map: HitMap::default(),
            pointer: None,
        }
    }

    /// Returns the board controller.
    #[must_use]
    pub fn controller(&self) -> &BoardController {
        &self.controller
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// Pointer drags, releases and focus loss always reach the engine so a
    /// gesture in progress can finish. When the help overlay is visible,
    /// every other message except `Quit` dismisses it instead of acting.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Quit => {
                self.should_quit = true;
                return;
            }
            Message::PointerDrag { .. } | Message::PointerUp { .. } | Message::FocusLost => {
                self.handle_pointer(msg);
                return;
            }
            _ => {}
        }

        if self.state.dismiss_help() {
            return;
        }

        if self.state.focus == Focus::Input {
            self.update_input(msg);
            return;
        }

        match msg {
            Message::Escape => {
                // Contextual escape: abandon a drag first, else clear selection
                if self.controller.cancel_drag() {
                    self.pointer = None;
                } else {
                    self.state.clear_selection();
                }
            }
            Message::NavigateLeft => self.state.navigate_left(&self.controller.board()),
            Message::NavigateRight => self.state.navigate_right(&self.controller.board()),
            Message::NavigateUp => self.state.navigate_up(&self.controller.board()),
            Message::NavigateDown => self.state.navigate_down(&self.controller.board()),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::ToggleTheme => self.toggle_theme(),
            Message::DeleteSelected => self.delete_selected(),
            Message::StartInput => self.state.focus = Focus::Input,
            Message::CycleColumn => self.cycle_column(),
            Message::PointerDown { .. } => self.handle_pointer(msg),
            _ => {}
        }
    }

    fn update_input(&mut self, msg: Message) {
        match msg {
            Message::InputChar { ch } => self.state.input.push(ch),
            Message::InputBackspace => self.state.input.backspace(),
            Message::InputSubmit => self.submit_input(),
            Message::CycleColumn => self.cycle_column(),
            Message::Escape => self.state.focus = Focus::Board,
            Message::PointerDown { .. } => self.handle_pointer(msg),
            _ => {}
        }
    }

    fn cycle_column(&mut self) {
        let count = self.controller.board().len();
        self.state.input.cycle_column(count);
    }

    /// Adds the typed task to the picked column and clears the input.
    fn submit_input(&mut self) {
        if self.state.input.is_blank() {
            return;
        }
        let board = self.controller.board();
        let Some((key, _)) = board.column_at(self.state.input.column) else {
            return;
        };
        match self.controller.add_task(key.as_str(), &self.state.input.text) {
            Ok(task) => {
                debug!(column = %key, task = %task.id, "added task from input");
                self.state.input.text.clear();
                let current = self.controller.board();
                let column = current.column_index(key.as_str());
                let index = current
                    .column(key.as_str())
                    .and_then(|c| c.items.iter().position(|t| t.id == task.id));
                if let (Some(column), Some(index)) = (column, index) {
                    self.state.select(column, index);
                }
            }
            Err(e) => warn!(error = %e, column = %key, "could not add task"),
        }
    }

    fn delete_selected(&mut self) {
        let board = self.controller.board();
        let Some((key, task)) = self.state.selected(&board) else {
            return;
        };
        if let Err(e) = self.controller.remove_task(key.as_str(), &task.id) {
            warn!(error = %e, column = %key, task = %task.id, "could not delete task");
        }
        self.clamp_selection();
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        if let Err(e) = self.theme_store.save(self.theme) {
            warn!(error = %e, theme = %self.theme, "failed to save theme preference");
        }
    }

    fn clamp_selection(&mut self) {
        let board = self.controller.board();
        self.state.clamp_selection(&board);
    }

    /// Translates a pointer message into an engine input event.
    fn handle_pointer(&mut self, msg: Message) {
        let at = Instant::now();
        let event = match msg {
            Message::PointerDown { column, row } => {
                self.pointer = Some((column, row));
                let handle = self
                    .hit_map
                    .card_at(column, row)
                    .map(|(key, card)| DragHandle::new(key.clone(), card.task.clone()));
                InputEvent::Down {
                    kind: InputKind::Pointer,
                    pointer: MOUSE_POINTER,
                    position: cell_point(column, row),
                    handle,
                    at,
                }
            }
            Message::PointerDrag { column, row } => {
                self.pointer = Some((column, row));
                InputEvent::Move {
                    pointer: MOUSE_POINTER,
                    position: cell_point(column, row),
                    at,
                }
            }
            Message::PointerUp { column, row } => {
                self.pointer = None;
                InputEvent::Up {
                    pointer: MOUSE_POINTER,
                    position: cell_point(column, row),
                }
            }
            Message::FocusLost => {
                self.pointer = None;
                InputEvent::Interrupt
            }
            _ => return,
        };

        let outcome = self.controller.handle_input(event);
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: InputOutcome) {
        match outcome {
            InputOutcome::Ignored | InputOutcome::Hovered(_) | InputOutcome::Scrolled => {}
            InputOutcome::DragStarted { column, task } => {
                debug!(%column, %task, "card lifted");
            }
            InputOutcome::Dropped(drop) => {
                self.pointer = None;
                if let DropOutcome::Moved { task, to, .. } = &drop {
                    let board = self.controller.board();
                    let column = board.column_index(to.as_str());
                    let index = board
                        .column(to.as_str())
                        .and_then(|c| c.items.iter().position(|t| &t.id == task));
                    if let (Some(column), Some(index)) = (column, index) {
                        self.state.select(column, index);
                    }
                }
                self.clamp_selection();
            }
            InputOutcome::Cancelled => {
                self.pointer = None;
            }
            InputOutcome::Clicked { handle, position } => {
                let (column, row) = (position.x as u16, position.y as u16);
                if self.hit_map.is_delete_button(&handle.task, column, row) {
                    if let Err(e) = self
                        .controller
                        .remove_task(handle.column.as_str(), &handle.task)
                    {
                        warn!(error = %e, task = %handle.task, "could not delete task");
                    }
                    self.clamp_selection();
                } else {
                    let board = self.controller.board();
                    let column = board.column_index(handle.column.as_str());
                    let index = self.hit_map.card(&handle.task).map(|card| card.index);
                    if let (Some(column), Some(index)) = (column, index) {
                        self.state.select(column, index);
                    }
                }
            }
        }
    }

    /// Registers every laid-out column as a drop region.
    fn sync_drop_regions(&mut self) {
        for hit in self.hit_map.columns() {
            self.controller
                .register_drop_region(hit.key.clone(), drop_rect(hit.area));
        }
    }

    /// Forgets the last layout, and with it every drop region.
    fn clear_hit_map(&mut self) {
        let stale = std::mem::take(&mut self.hit_map);
        for hit in stale.columns() {
            self.controller.unregister_drop_region(hit.key.as_str());
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;
        let palette = Palette::for_theme(self.theme);
        frame.render_widget(Block::default().style(palette.base()), area);

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.clear_hit_map();
            self.render_terminal_too_small(frame, area, &palette);
            return;
        }

        let areas = screen_areas(area);
        self.header_visible = areas.header.is_some();
        if let Some(header) = areas.header {
            self.render_header(frame, header, &palette);
        }

        let board = self.controller.board();
        let selection = self
            .state
            .selected_task
            .map(|task| (self.state.selected_column, task));
        self.hit_map = HitMap::compute_with_selection(&board, areas.board, selection);
        self.sync_drop_regions();

        let session = self.controller.drag_session();
        let view = BoardView {
            selected_column: self.state.selected_column,
            selected_task: self.state.selected_task,
            hovered: session.and_then(|s| s.candidate()),
            dragging: session.map(|s| &s.task().id),
        };

        let buf = frame.buffer_mut();
        render_board(&board, &self.hit_map, view, &palette, buf);

        let picked = board
            .column_at(self.state.input.column)
            .map(|(_, column)| column.name.as_str());
        render_input_bar(
            &self.state.input,
            picked,
            self.state.focus == Focus::Input,
            &palette,
            areas.input,
            buf,
        );

        let status = match session {
            Some(session) => Status::Dragging {
                task: &session.task().content,
                target: session
                    .candidate()
                    .and_then(|key| board.column(key.as_str()))
                    .map(|column| column.name.as_str()),
            },
            None => Status::Idle,
        };
        render_status_bar(status, self.theme, &palette, areas.status, buf);

        if let (Some(session), Some(pointer)) = (session, self.pointer) {
            render_drag_card(session.task(), pointer, &palette, area, buf);
        }

        if self.state.help_visible {
            render_help_overlay(&palette, area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(palette.danger))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application. Between
    /// events the engine is ticked so a held press can activate on time.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tack_config::{MemoryBoardStore, MemoryThemeStore};
    /// use tack_engine::{BoardController, SensorPolicy};
    /// use tack_protocol::Theme;
    /// use tack_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let controller =
    ///         BoardController::load(Box::new(MemoryBoardStore::new()), SensorPolicy::default());
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(controller, Theme::Light, Box::new(MemoryThemeStore::new()));
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                let input_focused = self.state.focus == Focus::Input;
                if let Some(msg) = event_to_message(&event, input_focused) {
                    self.update(msg);
                }
            }

            let outcome = self.controller.tick(Instant::now());
            self.apply_outcome(outcome);

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Split inner area: title left, help cue right
        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("tack", palette.title()),
            Span::styled(" - ", palette.hint()),
            Span::styled("Kanban Board", Style::default().fg(palette.text)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", palette.hint()),
            Span::styled("?", Style::default().fg(palette.accent)),
            Span::styled(" for help", palette.hint()),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}

/// The engine position of a terminal cell.
fn cell_point(column: u16, row: u16) -> Point {
    Point::new(f64::from(column), f64::from(row))
}

/// A laid-out area as an engine drop region.
fn drop_rect(area: Rect) -> tack_engine::Rect {
    tack_engine::Rect::new(
        f64::from(area.x),
        f64::from(area.y),
        f64::from(area.width),
        f64::from(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use tack_config::{MemoryBoardStore, MemoryThemeStore};
    use tack_engine::SensorPolicy;
    use tack_protocol::{Board, TaskId, seed_board};

    struct Harness {
        app: App,
        store: MemoryBoardStore,
        themes: MemoryThemeStore,
    }

    fn harness() -> Harness {
        harness_with(seed_board())
    }

    fn harness_with(board: Board) -> Harness {
        let store = MemoryBoardStore::new();
        let themes = MemoryThemeStore::new();
        let controller =
            BoardController::new(board, Box::new(store.clone()), SensorPolicy::default());
        Harness {
            app: App::new(controller, Theme::Light, Box::new(themes.clone())),
            store,
            themes,
        }
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn board(app: &App) -> std::sync::Arc<Board> {
        app.controller().board()
    }

    fn column_ids(app: &App, key: &str) -> Vec<String> {
        board(app)
            .column(key)
            .unwrap()
            .items
            .iter()
            .map(|t| t.id.to_string())
            .collect()
    }

    fn center(area: Rect) -> (u16, u16) {
        (area.x + area.width / 2, area.y + area.height / 2)
    }

    fn card_center(app: &App, id: u64) -> (u16, u16) {
        center(app.hit_map.card(&TaskId::from(id)).unwrap().area)
    }

    fn column_center(app: &App, key: &str) -> (u16, u16) {
        let hit = app
            .hit_map
            .columns()
            .iter()
            .find(|hit| hit.key.as_str() == key)
            .unwrap();
        center(hit.area)
    }

    fn press(app: &mut App, (column, row): (u16, u16)) {
        app.update(Message::PointerDown { column, row });
    }

    fn drag(app: &mut App, (column, row): (u16, u16)) {
        app.update(Message::PointerDrag { column, row });
    }

    fn release(app: &mut App, (column, row): (u16, u16)) {
        app.update(Message::PointerUp { column, row });
    }

    #[test]
    fn quit_message_sets_should_quit() {
        let mut h = harness();

        assert!(!h.app.should_quit());
        h.app.update(Message::Quit);
        assert!(h.app.should_quit());
    }

    #[test]
    fn navigation_updates_state() {
        let mut h = harness();

        h.app.update(Message::NavigateRight);
        assert_eq!(h.app.state().selected_column, 1);

        h.app.update(Message::NavigateDown);
        assert_eq!(h.app.state().selected_task, Some(0));

        h.app.update(Message::Escape);
        assert_eq!(h.app.state().selected_task, None);
    }

    #[test]
    fn help_blocks_actions_until_dismissed() {
        let mut h = harness();

        h.app.update(Message::ToggleHelp);
        assert!(h.app.state().help_visible);

        h.app.update(Message::NavigateRight);
        assert!(!h.app.state().help_visible);
        assert_eq!(h.app.state().selected_column, 0);

        h.app.update(Message::ToggleHelp);
        h.app.update(Message::Quit);
        assert!(h.app.should_quit());
    }

    #[test]
    fn help_closes_on_toggle_or_escape_without_acting() {
        let mut h = harness();

        h.app.update(Message::ToggleHelp);
        h.app.update(Message::ToggleHelp);
        assert!(!h.app.state().help_visible);

        h.app.update(Message::NavigateDown);
        h.app.update(Message::ToggleHelp);
        h.app.update(Message::Escape);
        assert!(!h.app.state().help_visible);
        assert_eq!(h.app.state().selected_task, Some(0), "escape only closed help");
    }

    #[test]
    fn typed_task_is_added_to_picked_column() {
        let mut h = harness();

        h.app.update(Message::StartInput);
        assert_eq!(h.app.state().focus, Focus::Input);
        h.app.update(Message::CycleColumn);
        for ch in "Ship it".chars() {
            h.app.update(Message::InputChar { ch });
        }
        h.app.update(Message::InputSubmit);

        let board = board(&h.app);
        let column = board.column("inProgress").unwrap();
        assert_eq!(column.len(), 2);
        assert_eq!(column.items[1].content, "Ship it");
        assert!(h.app.state().input.text.is_empty());
        assert_eq!(h.app.state().focus, Focus::Input);
        assert_eq!(h.store.save_count(), 1);
        assert_eq!(h.app.state().selected_column, 1);
        assert_eq!(h.app.state().selected_task, Some(1));
    }

    #[test]
    fn blank_input_adds_nothing() {
        let mut h = harness();

        h.app.update(Message::StartInput);
        h.app.update(Message::InputChar { ch: ' ' });
        h.app.update(Message::InputSubmit);

        assert_eq!(*board(&h.app), seed_board());
        assert_eq!(h.store.save_count(), 0);
    }

    #[test]
    fn escape_leaves_input_and_keys_type_while_focused() {
        let mut h = harness();

        h.app.update(Message::StartInput);
        h.app.update(Message::InputChar { ch: 'x' });
        h.app.update(Message::InputBackspace);
        h.app.update(Message::NavigateRight);
        assert_eq!(h.app.state().selected_column, 0);

        h.app.update(Message::Escape);
        assert_eq!(h.app.state().focus, Focus::Board);
    }

    #[test]
    fn delete_selected_removes_card_and_clamps_selection() {
        let mut h = harness();

        h.app.update(Message::NavigateDown);
        h.app.update(Message::NavigateDown);
        h.app.update(Message::DeleteSelected);

        assert_eq!(column_ids(&h.app, "todo"), ["1"]);
        assert_eq!(h.app.state().selected_task, Some(0));

        h.app.update(Message::DeleteSelected);
        assert!(column_ids(&h.app, "todo").is_empty());
        assert_eq!(h.app.state().selected_task, None);

        h.app.update(Message::DeleteSelected);
        assert_eq!(board(&h.app).task_count(), 1);
    }

    #[test]
    fn toggle_theme_saves_preference() {
        let mut h = harness();

        h.app.update(Message::ToggleTheme);
        assert_eq!(h.app.theme(), Theme::Dark);
        assert_eq!(h.themes.current(), Some(Theme::Dark));

        h.app.update(Message::ToggleTheme);
        assert_eq!(h.themes.current(), Some(Theme::Light));
    }

    #[test]
    fn dragging_card_to_another_column_moves_it() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let from = card_center(&h.app, 1);
        let to = column_center(&h.app, "done");
        press(&mut h.app, from);
        drag(&mut h.app, (from.0 + 10, from.1));
        drag(&mut h.app, to);
        release(&mut h.app, to);

        assert_eq!(column_ids(&h.app, "todo"), ["2"]);
        assert_eq!(column_ids(&h.app, "done"), ["1"]);
        assert!(h.app.controller().drag_session().is_none());
        assert_eq!(h.store.save_count(), 1);
        assert_eq!(h.app.state().selected_column, 2);
        assert_eq!(h.app.state().selected_task, Some(0));
    }

    /// The seed board with `done` already holding more cards than fit.
    fn crowded_board() -> Board {
        let mut board = seed_board();
        for n in 0..6 {
            board = board.with_task_added("done", &format!("Chore {n}")).unwrap().0;
        }
        board
    }

    #[test]
    fn card_dropped_into_full_column_stays_visible() {
        let mut h = harness_with(crowded_board());
        let content = draw(&mut h.app, 80, 24);
        assert!(content.contains("↓1 more"));

        let from = card_center(&h.app, 1);
        let to = column_center(&h.app, "done");
        press(&mut h.app, from);
        drag(&mut h.app, to);
        release(&mut h.app, to);
        assert_eq!(column_ids(&h.app, "done").last().map(String::as_str), Some("1"));

        let content = draw(&mut h.app, 80, 24);
        let card = h.app.hit_map.card(&TaskId::from(1u64)).expect("dropped card laid out");
        assert_eq!(card.index, 6);
        assert!(content.contains("Write project"));
        assert!(content.contains("↑2 more"));

        // The dropped card can be picked up again.
        let from = center(card.area);
        let to = column_center(&h.app, "todo");
        press(&mut h.app, from);
        drag(&mut h.app, to);
        release(&mut h.app, to);
        assert_eq!(column_ids(&h.app, "todo"), ["2", "1"]);
    }

    #[test]
    fn task_added_to_full_column_is_laid_out() {
        let mut h = harness_with(crowded_board());
        draw(&mut h.app, 80, 24);

        h.app.update(Message::StartInput);
        h.app.update(Message::CycleColumn);
        h.app.update(Message::CycleColumn);
        for ch in "Late".chars() {
            h.app.update(Message::InputChar { ch });
        }
        h.app.update(Message::InputSubmit);
        draw(&mut h.app, 80, 24);

        let added = board(&h.app).column("done").unwrap().items[6].id.clone();
        assert!(h.app.hit_map.card(&added).is_some());
    }

    #[test]
    fn drag_in_progress_is_drawn() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let from = card_center(&h.app, 1);
        let to = column_center(&h.app, "done");
        press(&mut h.app, from);
        drag(&mut h.app, to);

        let content = draw(&mut h.app, 90, 24);
        assert!(content.contains("Moving \"Write project\" → Done"));
        assert!(content.contains('┏'), "lifted card is drawn");
        assert!(content.contains('╔'), "hovered column is highlighted");
    }

    #[test]
    fn escape_cancels_drag() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let from = card_center(&h.app, 1);
        let to = column_center(&h.app, "done");
        press(&mut h.app, from);
        drag(&mut h.app, to);
        assert!(h.app.controller().drag_session().is_some());

        h.app.update(Message::Escape);
        assert!(h.app.controller().drag_session().is_none());

        release(&mut h.app, to);
        assert_eq!(*board(&h.app), seed_board());
        assert_eq!(h.store.save_count(), 0);
    }

    #[test]
    fn focus_loss_cancels_drag() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let from = card_center(&h.app, 3);
        let to = column_center(&h.app, "todo");
        press(&mut h.app, from);
        drag(&mut h.app, to);
        h.app.update(Message::FocusLost);

        assert!(h.app.controller().drag_session().is_none());
        assert_eq!(*board(&h.app), seed_board());
    }

    #[test]
    fn drop_outside_columns_changes_nothing() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let from = card_center(&h.app, 1);
        press(&mut h.app, from);
        drag(&mut h.app, (40, 1));
        release(&mut h.app, (40, 1));

        assert!(h.app.controller().drag_session().is_none());
        assert_eq!(*board(&h.app), seed_board());
    }

    #[test]
    fn clicking_delete_button_removes_card() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let button = h
            .app
            .hit_map
            .card(&TaskId::from(2u64))
            .unwrap()
            .delete_button();
        let spot = (button.x + 1, button.y);
        press(&mut h.app, spot);
        release(&mut h.app, spot);

        assert_eq!(column_ids(&h.app, "todo"), ["1"]);
        assert_eq!(h.store.save_count(), 1);
    }

    #[test]
    fn clicking_card_body_selects_it() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let card = h.app.hit_map.card(&TaskId::from(3u64)).unwrap().area;
        let spot = (card.x + 2, card.y + 1);
        press(&mut h.app, spot);
        release(&mut h.app, spot);

        assert_eq!(h.app.state().selected_column, 1);
        assert_eq!(h.app.state().selected_task, Some(0));
        assert_eq!(*board(&h.app), seed_board());
    }

    #[test]
    fn small_jitter_is_a_click_not_a_drag() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let (x, y) = card_center(&h.app, 1);
        press(&mut h.app, (x, y));
        drag(&mut h.app, (x + 2, y));
        assert!(h.app.controller().drag_session().is_none());
        release(&mut h.app, (x + 2, y));

        assert_eq!(*board(&h.app), seed_board());
        assert_eq!(h.app.state().selected_task, Some(0));
    }

    #[test]
    fn press_on_empty_space_does_nothing() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let spot = column_center(&h.app, "done");
        press(&mut h.app, spot);
        drag(&mut h.app, (spot.0 - 40, spot.1));
        release(&mut h.app, (spot.0 - 40, spot.1));

        assert_eq!(*board(&h.app), seed_board());
        assert!(h.app.controller().drag_session().is_none());
    }

    // --- Rendering ---

    #[test]
    fn view_shows_columns_counts_and_placeholder() {
        let mut h = harness();
        let content = draw(&mut h.app, 90, 24);

        assert!(content.contains("To do (2)"));
        assert!(content.contains("In Progress (1)"));
        assert!(content.contains("Done (0)"));
        assert!(content.contains("Drop task here"));
        assert!(content.contains("[To do]"));
        assert!(content.contains("light"));
    }

    #[test]
    fn view_registers_drop_regions_for_each_column() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        assert_eq!(h.app.controller().drop_regions().len(), 3);
        let target = h
            .app
            .controller()
            .resolve_target(Point::new(75.0, 10.0))
            .unwrap();
        assert_eq!(target.as_str(), "done");
    }

    #[test]
    fn view_shows_too_small_message_when_height_below_minimum() {
        let mut h = harness();
        draw(&mut h.app, 90, 24);

        let content = draw(&mut h.app, 80, MIN_HEIGHT - 1);

        assert!(!h.app.header_visible);
        assert!(content.contains("Terminal too small"));
        assert!(h.app.controller().drop_regions().is_empty());
    }

    #[test]
    fn view_shows_too_small_message_when_width_below_minimum() {
        let mut h = harness();
        let content = draw(&mut h.app, MIN_WIDTH - 1, 24);

        assert!(!h.app.header_visible);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn view_hides_header_in_compact_mode() {
        let mut h = harness();
        let content = draw(&mut h.app, 80, MIN_HEIGHT);

        assert!(!h.app.header_visible);
        assert!(content.contains("To do"));
        assert!(!content.contains("Press ? for help"));
    }

    #[test]
    fn view_shows_header_when_terminal_large_enough() {
        let mut h = harness();
        let content = draw(&mut h.app, 80, 24);

        assert!(h.app.header_visible);
        assert!(content.contains("tack - Kanban Board"));
        assert!(content.contains("Press ? for help"));
    }

    #[test]
    fn view_renders_help_overlay() {
        let mut h = harness();
        h.app.update(Message::ToggleHelp);

        let content = draw(&mut h.app, 90, 30);
        assert!(content.contains("Navigation"));
        assert!(content.contains("Mouse"));
    }
}
