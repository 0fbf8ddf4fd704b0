//! The shell facade handed to callers.

use reef_types::config::ShellConfig;
use reef_types::messages::Messages;

use crate::complete::autocomplete;
use crate::history::RecallBuffer;
use crate::interpreter::{Command, CommandRegistry};
use crate::session::SessionState;

/// Command registry, recall buffer and message templates for one session.
///
/// Session data itself lives in the [`SessionState`] the caller passes to
/// [`Shell::execute`]; the shell only keeps what survives a `clear`.
pub struct Shell {
    registry: CommandRegistry,
    recall: RecallBuffer,
    messages: Messages,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// A shell with the built-in commands and default messages.
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::with_builtins(),
            recall: RecallBuffer::new(),
            messages: Messages::default(),
        }
    }

    /// A shell using the message templates from `config`.
    pub fn with_config(config: &ShellConfig) -> Self {
        Self {
            messages: config.messages.clone(),
            ..Self::new()
        }
    }

    /// A shell with extra commands merged over the built-ins.
    pub fn with_extensions(cmds: impl IntoIterator<Item = Box<dyn Command>>) -> Self {
        let mut shell = Self::new();
        shell.extend(cmds);
        shell
    }

    /// Merge commands in; a same-named command replaces the existing one.
    pub fn extend(&mut self, cmds: impl IntoIterator<Item = Box<dyn Command>>) {
        self.registry.extend(cmds);
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn recall(&self) -> &RecallBuffer {
        &self.recall
    }

    pub fn recall_mut(&mut self) -> &mut RecallBuffer {
        &mut self.recall
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Record `raw` for recall, run it, and return the updated snapshot.
    pub fn execute(&mut self, raw: &str, state: &SessionState) -> SessionState {
        self.recall.push(raw);
        self.registry.execute(raw, state, &self.messages)
    }

    /// Propose a completed line for `partial`.
    pub fn autocomplete(&self, partial: &str, state: &SessionState) -> Option<String> {
        autocomplete(&self.registry, partial, state)
    }

    pub fn has_prev_command(&self) -> bool {
        self.recall.has_prev_command()
    }

    pub fn prev_command(&mut self) -> Option<&str> {
        self.recall.prev_command()
    }

    pub fn has_next_command(&self) -> bool {
        self.recall.has_next_command()
    }

    pub fn next_command(&mut self) -> Option<&str> {
        self.recall.next_command()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use reef_types::error::Result;

    use super::*;
    use crate::interpreter::{CommandOutput, Environment};
    use crate::parser::{Args, Flags};
    use crate::test_utils::sample_state;

    /// Records that it ran, under any name.
    struct Spy {
        name: &'static str,
        called: Rc<Cell<bool>>,
    }

    impl Command for Spy {
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            "spy"
        }
        fn usage(&self) -> &str {
            self.name
        }
        fn execute(
            &self,
            _args: &Args,
            _flags: &Flags,
            _env: &mut Environment<'_>,
        ) -> Result<CommandOutput> {
            self.called.set(true);
            Ok(CommandOutput::None)
        }
    }

    fn spy(name: &'static str) -> (Box<dyn Command>, Rc<Cell<bool>>) {
        let called = Rc::new(Cell::new(false));
        let cmd = Box::new(Spy {
            name,
            called: Rc::clone(&called),
        });
        (cmd, called)
    }

    #[test]
    fn starts_with_empty_recall() {
        let shell = Shell::new();
        assert!(shell.recall().is_empty());
        assert_eq!(shell.recall().cursor(), 0);
    }

    #[test]
    fn extensions_are_registered() {
        let (cmd, _) = spy("test");
        let shell = Shell::with_extensions([cmd]);
        assert!(shell.registry().contains("test"));
        assert!(shell.registry().contains("ls"));
    }

    #[test]
    fn execute_records_raw_input() {
        let mut shell = Shell::new();
        shell.execute("test", &sample_state());
        assert_eq!(shell.recall().commands(), ["test"]);
        assert_eq!(shell.recall().cursor(), 1);
    }

    #[test]
    fn execute_adds_echo_entry() {
        let mut shell = Shell::new();
        let out = shell.execute("ls", &sample_state());
        assert_eq!(out.history.len(), 2);
        assert_eq!(out.history[0].value, "ls");
        assert_eq!(out.history[0].cwd.as_deref(), Some("/"));
    }

    #[test]
    fn empty_input_is_recorded() {
        let mut shell = Shell::new();
        let out = shell.execute("", &sample_state());
        assert_eq!(out.history.len(), 1);
        assert_eq!(out.history[0].value, "");
        assert_eq!(shell.recall().len(), 1);
    }

    #[test]
    fn extensions_override_builtins() {
        for (name, args) in [
            ("help", ""),
            ("clear", ""),
            ("ls", "dir1"),
            ("cat", "file1"),
            ("mkdir", "testDir"),
            ("cd", "dir1"),
            ("pwd", ""),
        ] {
            let (cmd, called) = spy(name);
            let mut shell = Shell::with_extensions([cmd]);
            shell.execute(&format!("{name} {args}"), &sample_state());
            assert!(called.get(), "{name}");
        }
    }

    #[test]
    fn unknown_command() {
        let mut shell = Shell::new();
        let out = shell.execute("commandDoesNotExist -la test/file.txt", &sample_state());
        assert_eq!(out.history.len(), 2);
        assert_eq!(out.history[1].value, "command not found: commandDoesNotExist");
    }

    #[test]
    fn semicolon_chain() {
        let mut shell = Shell::new();
        let out = shell.execute("cd dir1; pwd", &sample_state());
        assert_eq!(out.history.len(), 2);
        assert_eq!(out.history[1].value, "/dir1");
    }

    #[test]
    fn and_chain_success() {
        let mut shell = Shell::new();
        let out = shell.execute("cd dir1 && pwd", &sample_state());
        assert_eq!(out.history.len(), 2);
        assert_eq!(out.history[1].value, "/dir1");
    }

    #[test]
    fn and_chain_failure() {
        let mut shell = Shell::new();
        let input = "cd doesNotExist && pwd";
        let out = shell.execute(input, &sample_state());
        assert_eq!(out.history.len(), 2);
        assert_eq!(out.history[0].value, input);
        assert_eq!(out.history[1].value, "no such file or directory: doesNotExist");
    }

    #[test]
    fn semicolon_runs_after_failure() {
        let mut shell = Shell::new();
        let out = shell.execute("cd doesNotExist; pwd", &sample_state());
        assert_eq!(out.history.len(), 3);
        assert_eq!(out.history[2].value, "/");
    }

    #[test]
    fn caller_state_is_untouched() {
        let mut shell = Shell::new();
        let state = sample_state();
        let before = state.clone();
        let out = shell.execute("mkdir a; cd a", &state);
        assert_eq!(state, before);
        assert_eq!(out.cwd, "/a");
    }

    #[test]
    fn mkdir_twice() {
        let mut shell = Shell::new();
        let state = shell.execute("mkdir testDir", &sample_state());
        let state = shell.execute("ls", &state);
        assert_eq!(state.history.last().unwrap().value, "dir1  file1  testDir");
        let again = shell.execute("mkdir testDir", &state);
        assert_eq!(again.history.last().unwrap().value, "file exists: testDir");
        assert_eq!(again.structure, state.structure);
    }

    #[test]
    fn config_messages_are_used() {
        let config = ShellConfig::from_toml_str(
            r#"
            [messages]
            command_not_found = "no such command: $1"
            "#,
        )
        .unwrap();
        let mut shell = Shell::with_config(&config);
        let out = shell.execute("frob", &sample_state());
        assert_eq!(out.history[1].value, "no such command: frob");
    }

    #[test]
    fn recall_navigation() {
        let mut shell = Shell::new();
        let mut state = sample_state();
        for line in ["pwd", "ls", "cd dir1"] {
            state = shell.execute(line, &state);
        }
        assert!(shell.has_prev_command());
        assert_eq!(shell.prev_command(), Some("cd dir1"));
        assert_eq!(shell.prev_command(), Some("ls"));
        assert_eq!(shell.prev_command(), Some("pwd"));
        assert!(!shell.has_prev_command());
        assert!(shell.has_next_command());
        assert_eq!(shell.next_command(), Some("ls"));
        assert_eq!(shell.next_command(), Some("cd dir1"));
        assert!(!shell.has_next_command());
        assert_eq!(shell.next_command(), None);
    }

    #[test]
    fn recall_cursor_is_settable() {
        let mut shell = Shell::new();
        for line in ["0", "1", "2"] {
            shell.execute(line, &sample_state());
        }
        shell.recall_mut().set_cursor(2);
        assert_eq!(shell.prev_command(), Some("1"));
        shell.recall_mut().set_cursor(1);
        assert_eq!(shell.next_command(), Some("2"));
    }

    #[test]
    fn has_next_on_fresh_shell() {
        let shell = Shell::new();
        assert!(shell.has_next_command());
        assert!(!shell.has_prev_command());
    }

    #[test]
    fn autocomplete_through_shell() {
        let shell = Shell::new();
        let state = sample_state();
        assert_eq!(shell.autocomplete("he", &state).as_deref(), Some("help"));
        assert_eq!(shell.autocomplete("ls di", &state).as_deref(), Some("ls dir1"));
    }

    #[test]
    fn autocomplete_sees_extensions() {
        let (cmd, _) = spy("hello");
        let shell = Shell::with_extensions([cmd]);
        assert_eq!(shell.autocomplete("he", &sample_state()), None);
        assert_eq!(shell.autocomplete("hel", &sample_state()), None);
        assert_eq!(shell.autocomplete("hell", &sample_state()).as_deref(), Some("hello"));
    }
}
