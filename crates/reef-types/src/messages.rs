//! Transcript message templates.
//!
//! Every template carries a single `$1` placeholder that is replaced with
//! the offending token (a command name or a path as typed).

use serde::{Deserialize, Serialize};

use crate::error::ReefError;

/// Placeholder substituted by [`render_template`].
pub const PLACEHOLDER: &str = "$1";

/// Message templates used to render command failures into the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub command_not_found: String,
    pub no_such_file: String,
    pub not_a_directory: String,
    pub is_a_directory: String,
    pub file_exists: String,
    pub missing_operand: String,
    pub invalid_name: String,
    pub busy: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            command_not_found: "command not found: $1".to_string(),
            no_such_file: "no such file or directory: $1".to_string(),
            not_a_directory: "not a directory: $1".to_string(),
            is_a_directory: "is a directory: $1".to_string(),
            file_exists: "file exists: $1".to_string(),
            missing_operand: "missing operand: $1".to_string(),
            invalid_name: "invalid name: $1".to_string(),
            busy: "device or resource busy: $1".to_string(),
        }
    }
}

impl Messages {
    /// Template for an error kind, or `None` for errors without one.
    pub fn template_for(&self, err: &ReefError) -> Option<&str> {
        let t = match err {
            ReefError::CommandNotFound(_) => &self.command_not_found,
            ReefError::NoSuchFile(_) => &self.no_such_file,
            ReefError::NotADirectory(_) => &self.not_a_directory,
            ReefError::IsADirectory(_) => &self.is_a_directory,
            ReefError::FileExists(_) => &self.file_exists,
            ReefError::MissingOperand(_) => &self.missing_operand,
            ReefError::InvalidName(_) => &self.invalid_name,
            ReefError::Busy(_) => &self.busy,
            ReefError::Config(_)
            | ReefError::Io(_)
            | ReefError::TomlParse(_)
            | ReefError::Json(_) => return None,
        };
        Some(t)
    }

    /// Render an error as a transcript line.
    ///
    /// Errors without a template fall back to their `Display` output.
    pub fn render(&self, err: &ReefError) -> String {
        match (self.template_for(err), err.token()) {
            (Some(template), Some(token)) => render_template(template, token),
            _ => err.to_string(),
        }
    }
}

/// Replace every `$1` in `template` with `token`.
pub fn render_template(template: &str, token: &str) -> String {
    template.replace(PLACEHOLDER, token)
}
