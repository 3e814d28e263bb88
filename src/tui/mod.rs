#![forbid(unsafe_code)]

pub mod app;

use std::io;
use std::io::IsTerminal as _;

use crate::error::TasktuiError;

type Term = ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>;

#[must_use]
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Owns the raw-mode/alternate-screen session; restores the terminal on
/// drop even when the event loop bails with an error.
pub struct TerminalGuard {
    terminal: Option<Term>,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self, TasktuiError> {
        use crossterm::terminal::enable_raw_mode;
        use ratatui::backend::CrosstermBackend;

        enable_raw_mode()
            .map_err(|e| TasktuiError::Other(format!("failed to enable raw mode: {e}")))?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)
            .map_err(|e| TasktuiError::Other(format!("failed to enter alt screen: {e}")))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = ratatui::Terminal::new(backend)
            .map_err(|e| TasktuiError::Other(format!("failed to create terminal: {e}")))?;
        Ok(Self {
            terminal: Some(terminal),
        })
    }

    pub fn terminal(&mut self) -> Result<&mut Term, TasktuiError> {
        self.terminal
            .as_mut()
            .ok_or_else(|| TasktuiError::Other("terminal unavailable".to_owned()))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(terminal) = self.terminal.take() {
            let _ = restore_terminal(terminal);
        }
    }
}

fn restore_terminal(mut terminal: Term) -> Result<(), TasktuiError> {
    use crossterm::terminal::disable_raw_mode;

    disable_raw_mode()
        .map_err(|e| TasktuiError::Other(format!("failed to disable raw mode: {e}")))?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )
    .map_err(|e| TasktuiError::Other(format!("failed to leave alt screen: {e}")))?;
    terminal
        .show_cursor()
        .map_err(|e| TasktuiError::Other(format!("failed to show cursor: {e}")))?;
    Ok(())
}
