//! The session snapshot threaded through every operation.

use serde::{Deserialize, Serialize};

use reef_types::error::Result;
use reef_vfs::Node;

/// One line of the transcript.
///
/// `cwd` is set only on echo entries (a submitted line) and records the
/// working directory at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

impl HistoryEntry {
    /// The echo of a submitted line.
    pub fn echo(value: impl Into<String>, cwd: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            cwd: Some(cwd.into()),
        }
    }

    /// Command output or an error message.
    pub fn output(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            cwd: None,
        }
    }

    pub fn is_echo(&self) -> bool {
        self.cwd.is_some()
    }

    /// The prompt shown in front of an echo entry, e.g. `hacker@default ~/dir1 $`.
    ///
    /// The cwd is absolute, so the root renders as `~/ $` rather than `~ $`.
    pub fn prompt(&self, prefix: &str) -> Option<String> {
        self.cwd.as_deref().map(|cwd| prompt_for(prefix, cwd))
    }
}

fn prompt_for(prefix: &str, cwd: &str) -> String {
    format!("{prefix} ~{cwd} $")
}

fn root_cwd() -> String {
    "/".to_string()
}

/// Transcript, filesystem, working directory and opaque settings.
///
/// `cwd` always names the root or a directory reachable from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub structure: Node,
    #[serde(default = "root_cwd")]
    pub cwd: String,
    /// Passed through untouched.
    #[serde(default)]
    pub settings: serde_json::Value,
}

impl SessionState {
    /// A fresh session rooted at `structure`, with an empty transcript.
    pub fn new(structure: Node) -> Self {
        Self {
            history: Vec::new(),
            structure,
            cwd: root_cwd(),
            settings: serde_json::Value::Null,
        }
    }

    /// Restore a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The prompt for the line currently being typed.
    pub fn prompt(&self, prefix: &str) -> String {
        prompt_for(prefix, &self.cwd)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Node::root())
    }
}
