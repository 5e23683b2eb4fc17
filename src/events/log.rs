//! Append-only game event log
//!
//! Every event becomes exactly one line. The file target opens the log in
//! append mode, writes the line and closes it again on every call, so two
//! events are two independent file operations and no handle is held
//! between commands. Each line is also mirrored to `tracing`.

use crate::core::error::Result;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Where event lines end up
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Append to a text file, reopened for every line
    File(PathBuf),
    /// Keep lines in memory
    Memory(Vec<String>),
}

/// The session's single event sink
#[derive(Debug, Clone)]
pub struct EventLog {
    target: LogTarget,
}

impl EventLog {
    /// Open (or create) a log file and append the session header line
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        let mut log = Self {
            target: LogTarget::File(path.into()),
        };
        log.log(format!("Log initiated at {}", unix_seconds()))?;
        Ok(log)
    }

    /// In-memory log with no header line
    pub fn memory() -> Self {
        Self {
            target: LogTarget::Memory(Vec::new()),
        }
    }

    /// Append one event line
    pub fn log(&mut self, event: impl Display) -> Result<()> {
        let line = event.to_string();
        tracing::info!(target: "crypt_keeper::events", "{}", line);
        self.append(line)
    }

    /// Record a recoverable problem. Written like any other event, but at
    /// warn level in `tracing`.
    pub fn warn(&mut self, event: impl Display) -> Result<()> {
        let line = format!("Warning: {}", event);
        tracing::warn!(target: "crypt_keeper::events", "{}", line);
        self.append(line)
    }

    fn append(&mut self, line: String) -> Result<()> {
        match &mut self.target {
            LogTarget::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}", line)?;
            }
            LogTarget::Memory(lines) => lines.push(line),
        }
        Ok(())
    }

    /// Lines held by a memory log. File logs return an empty slice.
    pub fn lines(&self) -> &[String] {
        match &self.target {
            LogTarget::Memory(lines) => lines.as_slice(),
            LogTarget::File(_) => &[],
        }
    }

    /// Path of a file log
    pub fn path(&self) -> Option<&Path> {
        match &self.target {
            LogTarget::File(path) => Some(path.as_path()),
            LogTarget::Memory(_) => None,
        }
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
