//! Terminal mode switching. Restoring must work from every exit path,
//! including a panic, so it never depends on the ratatui `Terminal`.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

pub fn enter<W: Write>(out: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen)
}

pub fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Undo `enter` on stdout. Safe to call when only part of `enter` ran.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    leave(&mut io::stdout())?;
    raw
}

/// Put the terminal back before the default hook prints the panic message.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}
