//! Command trait, registry, and chain execution.
//!
//! Failures never leave [`CommandRegistry::execute`]: every error a command
//! returns is rendered through the message templates and appended to the
//! transcript, and the step that failed stops the rest of its `&&` group.

use std::collections::HashMap;

use reef_types::error::{ReefError, Result};
use reef_types::messages::Messages;

use crate::parser::{Args, Flags, Invocation, parse};
use crate::session::{HistoryEntry, SessionState};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Appended to the transcript as one entry.
    Text(String),
    /// Command produced no visible output.
    None,
}

/// Mutable view handed to every command.
pub struct Environment<'a> {
    /// The working copy of the session. Changes become visible to the
    /// caller only through the snapshot returned by `execute`.
    pub state: &'a mut SessionState,
    /// The registry dispatching this command (used by `help`).
    pub registry: &'a CommandRegistry,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls \[path\] \[-l\] \[-a\]").
    fn usage(&self) -> &str;

    /// Execute the command. An `Err` marks the step as failed.
    fn execute(
        &self,
        args: &Args,
        flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in commands.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        crate::commands::register_builtins(&mut reg);
        reg
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        if self.commands.insert(name.clone(), cmd).is_some() {
            log::debug!("registry: replaced command '{name}'");
        }
    }

    /// Register every command in `cmds`, later entries winning.
    pub fn extend(&mut self, cmds: impl IntoIterator<Item = Box<dyn Command>>) {
        for cmd in cmds {
            self.register(cmd);
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sorted `(name, description)` pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut list: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        list.sort_unstable_by_key(|&(name, _)| name);
        list
    }

    /// Sorted names starting with `prefix` (case-sensitive).
    pub fn completions(&self, prefix: &str) -> Vec<&str> {
        self.names()
            .into_iter()
            .filter(|n| n.starts_with(prefix))
            .collect()
    }

    /// Run a submitted line against a copy of `state` and return the copy.
    ///
    /// The first entry appended is the echo of `raw` with the working
    /// directory it was typed in. `;` groups always run; inside a group the
    /// first failing step renders its error and skips the remaining steps.
    pub fn execute(&self, raw: &str, state: &SessionState, messages: &Messages) -> SessionState {
        let mut next = state.clone();
        next.history.push(HistoryEntry::echo(raw, state.cwd.as_str()));

        for group in parse(raw) {
            for (i, inv) in group.iter().enumerate() {
                if let Err(e) = self.dispatch(inv, &mut next) {
                    let skipped = group.len() - i - 1;
                    if skipped > 0 {
                        log::debug!("'{}' failed, skipping {skipped} chained step(s)", inv.name);
                    }
                    next.history.push(HistoryEntry::output(messages.render(&e)));
                    break;
                }
            }
        }
        next
    }

    /// Dispatch one invocation. An empty name is a silent no-op.
    fn dispatch(&self, inv: &Invocation, state: &mut SessionState) -> Result<()> {
        if inv.name.is_empty() {
            return Ok(());
        }
        let cmd = self
            .get(&inv.name)
            .ok_or_else(|| ReefError::CommandNotFound(inv.name.clone()))?;
        log::debug!("dispatch: {} {:?}", inv.name, inv.args.positional());

        let mut env = Environment {
            state: &mut *state,
            registry: self,
        };
        if let CommandOutput::Text(text) = cmd.execute(&inv.args, &inv.flags, &mut env)? {
            state.history.push(HistoryEntry::output(text));
        }
        Ok(())
    }
}
