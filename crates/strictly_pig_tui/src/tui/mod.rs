//! Full-screen terminal UI for Strictly Pig.

mod app;
mod input;
mod ui;

pub use app::{PanelView, TableView};
pub use input::{KeyAction, map_key, map_mouse};
pub use ui::{close_marker_area, dice_art, draw, overlay_area};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use strictly_pig::{Dice, Presentation};
use tracing::{debug, error, info, instrument};

/// Runs the terminal UI until the player quits.
///
/// The terminal is restored even when the game loop fails.
pub fn run_tui<D: Dice>(presentation: &mut Presentation<D>) -> Result<()> {
    info!("Starting Strictly Pig TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, presentation);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

#[instrument(skip_all)]
fn run_game<B, D>(terminal: &mut Terminal<B>, presentation: &mut Presentation<D>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    D: Dice,
{
    let mut view = TableView::new();
    presentation.start(&mut view);

    loop {
        let screen = terminal.draw(|f| draw(f, &view))?.area;

        let action = match event::read()? {
            Event::Key(key) => map_key(key, presentation.overlay_visible()),
            Event::Mouse(mouse) => map_mouse(mouse, presentation.overlay_visible(), screen),
            _ => KeyAction::Ignore,
        };

        match action {
            KeyAction::Quit => {
                info!("Player quit");
                return Ok(());
            }
            KeyAction::Input(event) => {
                let outcome = presentation.handle(event, &mut view);
                debug!(?event, ?outcome, "Handled input");
            }
            KeyAction::Ignore => {}
        }
    }
}
