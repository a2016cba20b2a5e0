//! Where frames go.
//!
//! `Terminal` writes to stdout and clears through crossterm. Clear and write
//! failures are logged and otherwise ignored; the race keeps running.

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

pub trait Screen {
    fn clear(&mut self);
    /// Print `text` as-is. Callers include trailing newlines.
    fn show(&mut self, text: &str);
}

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    fn try_clear(&mut self) -> io::Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?
            .queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for Terminal {
    fn clear(&mut self) {
        if let Err(e) = self.try_clear() {
            log::warn!("failed to clear terminal: {e}");
        }
    }

    fn show(&mut self, text: &str) {
        let mut out = self.stdout.lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            log::warn!("failed to write to terminal: {e}");
        }
    }
}

/// Records everything shown, split into frames at each clear.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Capture {
    pub frames: Vec<String>,
}

#[cfg(test)]
impl Capture {
    pub fn last(&self) -> &str {
        self.frames.last().map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
impl Screen for Capture {
    fn clear(&mut self) {
        self.frames.push(String::new());
    }

    fn show(&mut self, text: &str) {
        if self.frames.is_empty() {
            self.frames.push(String::new());
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.push_str(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_starts_a_frame_per_clear() {
        let mut screen = Capture::default();
        screen.show("before\n");
        screen.clear();
        screen.show("one\n");
        screen.show("two\n");
        screen.clear();
        assert_eq!(screen.frames, vec!["before\n", "one\ntwo\n", ""]);
        assert_eq!(screen.last(), "");
    }
}
