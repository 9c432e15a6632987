// file: src/console.rs
// version: 1.0.0
// guid: 5c7a2e90-3b1d-4f68-9e24-6d0b8a1c3f57

//! Colored status lines on stdout
//!
//! Green for progress and success, yellow for warnings the run survives, red
//! for conditions that end it.

use colored::Colorize;
use std::sync::Mutex;

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Fatal,
}

/// Sink for user-facing progress messages
pub trait StatusReporter {
    fn report(&self, level: Level, message: &str);

    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    fn fatal(&self, message: &str) {
        self.report(Level::Fatal, message);
    }
}

/// Render a message in the color for its level
pub fn colorize(level: Level, message: &str) -> String {
    match level {
        Level::Success => message.green().to_string(),
        Level::Warning => message.yellow().to_string(),
        Level::Fatal => message.red().to_string(),
    }
}

/// Writes colored lines to stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl StatusReporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        println!("{}", colorize(level, message));
    }
}

/// Keeps every line in memory, for callers that inspect the output
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Messages recorded at the given level
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl StatusReporter for RecordingReporter {
    fn report(&self, level: Level, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }
}
