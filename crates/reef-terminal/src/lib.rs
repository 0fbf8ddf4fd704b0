//! Shell simulator core.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. A submitted line is parsed
//! into `;`-separated groups of `&&`-chained invocations, each invocation is
//! dispatched against a copy of the caller's `SessionState`, and the
//! updated copy is handed back. Failures never escape: they become
//! transcript entries.

mod commands;
mod complete;
mod history;
mod interpreter;
mod parser;
mod session;
mod shell;
#[cfg(test)]
mod test_utils;

/// Register the built-in commands (help, clear, ls, cat, mkdir, cd, pwd, ...).
pub use commands::register_builtins;
/// Propose a completed line for partial input.
pub use complete::autocomplete;
/// Raw-input recall buffer with a navigation cursor.
pub use history::RecallBuffer;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command.
pub use interpreter::CommandOutput;
/// Registry of available commands with chain dispatch.
pub use interpreter::CommandRegistry;
/// Mutable view handed to every command.
pub use interpreter::Environment;
/// Parsed command-line pieces.
pub use parser::{Args, Chain, Flags, Invocation, parse, parse_input};
/// Transcript entries and the session snapshot.
pub use session::{HistoryEntry, SessionState};
/// The shell facade: registry + recall + message templates.
pub use shell::Shell;
