use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::state::{Action, Player};
use crate::ui;

/// How long the loop waits for input before redrawing. Kept under the tick interval so
/// playback stays smooth.
const FRAME: Duration = Duration::from_millis(20);

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI application until the user quits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(mut player: Player) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    loop {
        player.drain_ticks();
        terminal.draw(|f| ui::draw(f, &player))?;

        if event::poll(FRAME)? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                if let Action::Quit = player.handle_key(k.code) {
                    break;
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
