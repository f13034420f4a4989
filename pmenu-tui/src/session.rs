use std::{
    io,
    ops::{Deref, DerefMut},
    sync::{
        atomic::{AtomicBool, Ordering},
        Once,
    },
};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Exit status used when the process is interrupted by a signal while a
/// session is open. Same as "no selection".
pub const INTERRUPTED_EXIT_CODE: i32 = 1;

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);
static INTERRUPT_HANDLER: Once = Once::new();

/// Owns the terminal in raw mode on the alternate screen.
///
/// Derefs to [`Terminal`] so the menu loop can draw on it directly. Normal
/// mode is restored when the session is dropped, which covers returns, `?`
/// errors and unwinding panics alike. SIGINT/SIGTERM/SIGHUP sent from
/// outside restore the terminal from the signal handler and exit with
/// [`INTERRUPTED_EXIT_CODE`].
pub struct TuiSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TuiSession {
    pub fn new() -> Result<Self> {
        install_interrupt_handler();

        enable_raw_mode()?;
        SESSION_ACTIVE.store(true, Ordering::SeqCst);
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            release(&mut io::stdout());
            return Err(err.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                release(&mut io::stdout());
                return Err(err.into());
            }
        };
        tracing::trace!("terminal acquired");
        Ok(Self { terminal })
    }
}

/// Put the terminal back into normal mode: raw mode off, main screen,
/// cursor visible. Every step runs even if an earlier one fails; the first
/// error is returned.
pub fn restore_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen);
    let cursor = execute!(out, Show);

    let mut first = None;
    for (step, result) in [
        ("disable raw mode", raw),
        ("leave alternate screen", screen),
        ("show cursor", cursor),
    ] {
        if let Err(err) = result {
            tracing::warn!("failed to {step}: {err}");
            first.get_or_insert(err);
        }
    }
    first.map_or(Ok(()), Err)
}

/// Restore once per session; whoever flips the flag first does the work.
fn release<W: io::Write>(out: &mut W) -> bool {
    if SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = restore_terminal(out);
        true
    } else {
        false
    }
}

fn install_interrupt_handler() {
    INTERRUPT_HANDLER.call_once(|| {
        if let Err(err) = ctrlc::set_handler(on_interrupt) {
            tracing::warn!("failed to set interrupt handler: {err}");
        }
    });
}

fn on_interrupt() {
    if release(&mut io::stdout()) {
        tracing::debug!("interrupted, terminal restored");
    }
    std::process::exit(INTERRUPTED_EXIT_CODE);
}

impl Deref for TuiSession {
    type Target = Terminal<CrosstermBackend<io::Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TuiSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TuiSession {
    fn drop(&mut self) {
        if release(self.terminal.backend_mut()) {
            tracing::trace!("terminal restored");
        }
    }
}
