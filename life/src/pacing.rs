// pacing.rs - What happens between two frames

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

/// Whether the run loop should keep going after a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Continue,
    Stop,
}

pub trait Pacer {
    /// Called after generation `generation` has been shown.
    fn wait(&mut self, generation: u64) -> io::Result<Pace>;
}

/// Blocks until a line arrives on `input`. End of input stops the run.
pub struct StepOnInput<R: BufRead> {
    input: R,
    line: String,
}

impl StepOnInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> StepOnInput<R> {
    pub fn new(input: R) -> Self {
        Self { input, line: String::new() }
    }
}

impl<R: BufRead> Pacer for StepOnInput<R> {
    fn wait(&mut self, _generation: u64) -> io::Result<Pace> {
        self.line.clear();
        match self.input.read_line(&mut self.line)? {
            0 => Ok(Pace::Stop),
            _ => Ok(Pace::Continue),
        }
    }
}

/// Sleeps a fixed interval between frames.
pub struct AutoRun {
    pub interval: Duration,
}

impl AutoRun {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Pacer for AutoRun {
    fn wait(&mut self, _generation: u64) -> io::Result<Pace> {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        Ok(Pace::Continue)
    }
}
