//! Output handling: board frames and screen clearing.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Writer wrapper that can wipe the terminal between frames.
pub struct Screen<W> {
    out: W,
    clear: bool,
}

impl<W: Write> Screen<W> {
    /// Wraps `out`; with `clear` false, frames simply scroll.
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    /// Clears the terminal and homes the cursor, if enabled.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Writes one line.
    pub fn line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Writes text as-is.
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// Flushes pending output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_disabled_writes_nothing() {
        let mut screen = Screen::new(Vec::new(), false);
        screen.clear().unwrap();
        screen.line("hello").unwrap();
        assert_eq!(screen.into_inner(), b"hello\n");
    }

    #[test]
    fn test_clear_enabled_emits_escape() {
        let mut screen = Screen::new(Vec::new(), true);
        screen.clear().unwrap();
        screen.flush().unwrap();
        assert!(screen.into_inner().starts_with(b"\x1b["));
    }
}
