//! Per-command tracking records owned by a stream.

/// Tracking state a stream keeps for one command (e.g. `track`).
///
/// Only the identity lives here; the tracking subsystem owns everything
/// else about the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    command: String,
}

impl LogRecord {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The command this record tracks.
    pub fn command(&self) -> &str {
        &self.command
    }
}
