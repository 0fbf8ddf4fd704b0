//! Built-in commands for the reef terminal.

use reef_types::error::{ReefError, Result};
use reef_vfs::{Node, insert_at, normalize, remove_at, resolve};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::parser::{Args, Flags};

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(MkdirCmd));
    reg.register(Box::new(TouchCmd));
    reg.register(Box::new(RmCmd));
    reg.register(Box::new(EchoCmd));
}

/// Positional arguments, or `MissingOperand` naming the command.
fn operands<'a>(args: &'a Args, cmd: &str) -> Result<&'a [String]> {
    if args.is_empty() {
        return Err(ReefError::MissingOperand(cmd.to_string()));
    }
    Ok(args.positional())
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn execute(
        &self,
        args: &Args,
        _flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        if let Some(name) = args.get(0) {
            let cmd = env
                .registry
                .get(name)
                .ok_or_else(|| ReefError::CommandNotFound(name.to_string()))?;
            return Ok(CommandOutput::Text(format!(
                "usage: {}\n{}",
                cmd.usage(),
                cmd.description()
            )));
        }

        let list = env.registry.list_commands();
        let width = list.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let lines: Vec<String> = list
            .iter()
            .map(|(name, desc)| format!("{name:<width$}  {desc}"))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal transcript"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(
        &self,
        _args: &Args,
        _flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        env.state.history.clear();
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;

impl LsCmd {
    fn long_line(name: &str, node: &Node) -> String {
        let kind = if node.is_dir() { 'd' } else { '-' };
        format!("{kind} {:>6} {name}", node.size())
    }
}

impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls [path] [-l] [-a]"
    }
    fn execute(
        &self,
        args: &Args,
        flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        let root = &env.state.structure;
        let target = resolve(root, &env.state.cwd, args.get(0).unwrap_or("."))?;
        let all = flags.has('a');
        let long = flags.has('l');

        let mut entries: Vec<(&str, &Node)> = Vec::new();
        if !target.node.is_dir() {
            entries.push((target.node.name(), target.node));
        } else {
            if all {
                let parent = resolve(root, &target.path, "..")?;
                entries.push((".", target.node));
                entries.push(("..", parent.node));
            }
            entries.extend(
                target
                    .node
                    .children()
                    .iter()
                    .filter(|c| all || !c.name().starts_with('.'))
                    .map(|c| (c.name(), c)),
            );
        }

        if entries.is_empty() {
            return Ok(CommandOutput::None);
        }
        let text = if long {
            entries
                .iter()
                .map(|(name, node)| Self::long_line(name, node))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            entries
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join("  ")
        };
        Ok(CommandOutput::Text(text))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change working directory"
    }
    fn usage(&self) -> &str {
        "cd [path]"
    }
    fn execute(
        &self,
        args: &Args,
        _flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        let expr = args.get(0).unwrap_or("/");
        let target = resolve(&env.state.structure, &env.state.cwd, expr)?;
        if !target.node.is_dir() {
            return Err(ReefError::NotADirectory(expr.to_string()));
        }
        env.state.cwd = target.path;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn execute(
        &self,
        _args: &Args,
        _flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(normalize(&env.state.cwd).into_owned()))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Display file contents"
    }
    fn usage(&self) -> &str {
        "cat <file...>"
    }
    fn execute(
        &self,
        args: &Args,
        _flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        let mut parts = Vec::new();
        for expr in operands(args, self.name())? {
            let target = resolve(&env.state.structure, &env.state.cwd, expr)?;
            let content = target
                .node
                .content()
                .ok_or_else(|| ReefError::IsADirectory(expr.clone()))?;
            parts.push(content);
        }
        Ok(CommandOutput::Text(parts.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// mkdir
// ---------------------------------------------------------------------------

struct MkdirCmd;
impl Command for MkdirCmd {
    fn name(&self) -> &str {
        "mkdir"
    }
    fn description(&self) -> &str {
        "Create directories"
    }
    fn usage(&self) -> &str {
        "mkdir <path...>"
    }
    fn execute(
        &self,
        args: &Args,
        _flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        let state = &mut *env.state;
        let mut first_err = None;
        for expr in operands(args, self.name())? {
            let made = insert_at(&mut state.structure, &state.cwd, expr, |name| {
                Node::dir(name, Vec::new())
            });
            if let Err(e) = made {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(CommandOutput::None),
        }
    }
}

// ---------------------------------------------------------------------------
// touch
// ---------------------------------------------------------------------------

struct TouchCmd;
impl Command for TouchCmd {
    fn name(&self) -> &str {
        "touch"
    }
    fn description(&self) -> &str {
        "Create empty files"
    }
    fn usage(&self) -> &str {
        "touch <file...>"
    }
    fn execute(
        &self,
        args: &Args,
        _flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        let state = &mut *env.state;
        for expr in operands(args, self.name())? {
            if let Ok(existing) = resolve(&state.structure, &state.cwd, expr) {
                if existing.node.is_dir() {
                    return Err(ReefError::IsADirectory(expr.clone()));
                }
                continue;
            }
            insert_at(&mut state.structure, &state.cwd, expr, |name| {
                Node::file(name, "")
            })?;
        }
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// rm
// ---------------------------------------------------------------------------

struct RmCmd;
impl Command for RmCmd {
    fn name(&self) -> &str {
        "rm"
    }
    fn description(&self) -> &str {
        "Remove files or directories"
    }
    fn usage(&self) -> &str {
        "rm [-r] <path...>"
    }
    fn execute(
        &self,
        args: &Args,
        flags: &Flags,
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        let recursive = flags.has('r') || flags.has('R');
        let state = &mut *env.state;
        for expr in operands(args, self.name())? {
            remove_at(&mut state.structure, &state.cwd, expr, recursive)?;
        }
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(
        &self,
        args: &Args,
        _flags: &Flags,
        _env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.positional().join(" ")))
    }
}
