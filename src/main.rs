//! tack - a Kanban board for the terminal.
//!
//! This is the main binary: it sets up logging, loads the configuration,
//! opens the board and theme stores and runs the TUI.

mod logging;

use anyhow::Context;
use tack_config::store::load_theme;
use tack_config::{Config, FileBoardStore, FileThemeStore};
use tack_engine::{BoardController, SensorPolicy};
use tack_tui::palette::COLORFGBG;
use tack_tui::{App, initial_theme, terminal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging is best-effort; the board works without it
    if let Err(e) = logging::init() {
        eprintln!("tack: logging disabled: {e:#}");
    }

    let config = Config::load().await.context("failed to load configuration")?;
    let board_path = config.storage.board_path()?;
    let theme_path = config.storage.theme_path()?;
    info!(board = %board_path.display(), theme = %theme_path.display(), "starting tack");

    let theme_store = FileThemeStore::new(theme_path);
    let colorfgbg = std::env::var(COLORFGBG).ok();
    let theme = initial_theme(load_theme(&theme_store), colorfgbg.as_deref());

    let controller = BoardController::load(
        Box::new(FileBoardStore::new(board_path)),
        SensorPolicy::from(&config.sensors),
    );

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;
    let mut app = App::new(controller, theme, Box::new(theme_store));

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        warn!(error = %e, "tack exited with an error");
    }
    result
}
