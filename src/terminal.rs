use anyhow::{Context, Result, bail};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, IsTerminal};
use std::sync::Once;

static PANIC_HOOK: Once = Once::new();

/// Fail unless stdout is an interactive terminal.
pub fn require_tty() -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!("wildflower needs an interactive terminal");
    }
    Ok(())
}

/// Terminal size as `(cols, rows)`.
pub fn terminal_size() -> Result<(u16, u16)> {
    terminal::size().context("could not determine terminal size")
}

fn restore() {
    let _ = execute!(io::stdout(), Show);
    let _ = disable_raw_mode();
}

/// Raw keyboard mode with a hidden cursor, held for the guard's lifetime.
///
/// Dropping the guard restores the terminal. A panic hook does the same
/// before the panic message prints, so a crash mid-walk still leaves a
/// usable shell.
pub struct RawMode {
    _private: (),
}

impl RawMode {
    pub fn enable() -> Result<Self> {
        PANIC_HOOK.call_once(|| {
            let original = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                restore();
                original(info);
            }));
        });

        enable_raw_mode().context("failed to enter raw mode")?;
        let guard = Self { _private: () };
        execute!(io::stdout(), Hide)?;
        Ok(guard)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        restore();
    }
}
