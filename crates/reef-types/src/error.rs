//! Error types for reef.

use std::io;

/// Errors produced by the reef shell core.
///
/// The first group are the recoverable conditions a command can hit; each
/// carries the offending token so the executor can render it into the
/// transcript through a message template. The rest are startup errors that
/// only the hosting application ever sees.
#[derive(Debug, thiserror::Error)]
pub enum ReefError {
    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("no such file or directory: {0}")]
    NoSuchFile(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("is a directory: {0}")]
    IsADirectory(String),

    #[error("file exists: {0}")]
    FileExists(String),

    #[error("missing operand: {0}")]
    MissingOperand(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("device or resource busy: {0}")]
    Busy(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReefError {
    /// The token substituted for `$1` when this error is rendered.
    ///
    /// Ambient errors have no single offending token and return `None`.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::CommandNotFound(t)
            | Self::NoSuchFile(t)
            | Self::NotADirectory(t)
            | Self::IsADirectory(t)
            | Self::FileExists(t)
            | Self::MissingOperand(t)
            | Self::InvalidName(t)
            | Self::Busy(t) => Some(t),
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) | Self::Json(_) => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ReefError>;
