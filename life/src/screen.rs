// screen.rs - Where frames go

use std::io::{self, Write};

use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};

/// Output surface for rendered frames.
pub trait Screen {
    fn render(&mut self, text: &str) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
}

/// Writes frames to any `Write` and clears with crossterm escape sequences.
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl TerminalScreen<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn render(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }
}

/// Something that happened on a [`RecordingScreen`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Render(String),
    Clear,
}

/// Keeps every frame in memory. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub events: Vec<ScreenEvent>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ScreenEvent::Render(text) => Some(text.as_str()),
            ScreenEvent::Clear => None,
        })
    }
}

impl Screen for RecordingScreen {
    fn render(&mut self, text: &str) -> io::Result<()> {
        self.events.push(ScreenEvent::Render(text.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.events.push(ScreenEvent::Clear);
        Ok(())
    }
}
