//! Recall of previously submitted lines.
//!
//! Independent of the rendered transcript: `clear` wipes the transcript but
//! not this buffer, and every submission is recorded verbatim, including
//! empty lines and lines that failed.

/// Submitted lines plus a navigation cursor.
///
/// The cursor stays within `0..=len`; `len` means no recall in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecallBuffer {
    commands: Vec<String>,
    index: usize,
}

impl RecallBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a buffer with the cursor past the end.
    pub fn from_commands(commands: Vec<String>) -> Self {
        let index = commands.len();
        Self { commands, index }
    }

    /// Record a submitted line and reset the cursor past the end.
    pub fn push(&mut self, raw: &str) {
        self.commands.push(raw.to_string());
        self.index = self.commands.len();
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.index
    }

    /// Move the cursor, clamped to `0..=len`.
    pub fn set_cursor(&mut self, index: usize) {
        self.index = index.min(self.commands.len());
    }

    pub fn has_prev_command(&self) -> bool {
        self.index > 0
    }

    /// Step back one line and return it. `None` (cursor unchanged) at 0.
    pub fn prev_command(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.commands.get(self.index).map(String::as_str)
    }

    /// True unless the cursor sits on the most recent line.
    ///
    /// An empty buffer therefore reports `true`, and so does a cursor past
    /// the end; [`RecallBuffer::next_command`] returns `None` in both cases.
    pub fn has_next_command(&self) -> bool {
        self.index + 1 != self.commands.len()
    }

    /// Step forward one line and return it. `None` once past the end.
    pub fn next_command(&mut self) -> Option<&str> {
        if self.index < self.commands.len() {
            self.index += 1;
        }
        self.commands.get(self.index).map(String::as_str)
    }
}
