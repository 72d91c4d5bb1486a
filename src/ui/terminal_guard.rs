//! Raw mode + alternate screen, undone on drop and on panic.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal exactly once, whichever of drop or panic comes first.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn install_panic_hook(&self) {
        let restored = Arc::clone(&self.restored);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&restored);
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.restored);
    }
}

fn restore_once(restored: &AtomicBool) {
    if restored.swap(true, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard {
        restored: Arc::new(AtomicBool::new(false)),
    };
    guard.install_panic_hook();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
