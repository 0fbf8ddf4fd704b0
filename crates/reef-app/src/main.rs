//! reef terminal entry point.
//!
//! Reads lines from stdin, runs them through the shell core and prints the
//! new transcript entries. A line ending in a tab prints the completion for
//! the text before it instead of running it. `exit` or end of input quits.
//!
//! Usage: `reef [config.toml]`

mod vfs_setup;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use reef_terminal::{HistoryEntry, SessionState, Shell};
use reef_types::config::ShellConfig;

/// ANSI clear-screen and cursor-home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn print_entries(out: &mut impl Write, entries: &[HistoryEntry], prefix: &str) -> io::Result<()> {
    for entry in entries {
        match entry.prompt(prefix) {
            Some(prompt) => writeln!(out, "{prompt} {}", entry.value)?,
            None if entry.value.is_empty() => {},
            None => writeln!(out, "{}", entry.value)?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ShellConfig::load(Path::new(&path))?,
        None => ShellConfig::default(),
    };
    let structure = match &config.structure {
        Some(path) => vfs_setup::load_structure(path)?,
        None => vfs_setup::demo_structure(),
    };
    let prefix = config.prompt.prefix.as_str();
    log::info!("Starting reef ({prefix})");

    let mut shell = Shell::with_config(&config);
    let mut state = SessionState::new(structure);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{} ", state.prompt(prefix))?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            break;
        }
        let raw = line.trim_end_matches(['\n', '\r']);

        if let Some(partial) = raw.strip_suffix('\t') {
            if let Some(suggestion) = shell.autocomplete(partial, &state) {
                writeln!(stdout, "{suggestion}")?;
            }
            continue;
        }
        if raw.trim() == "exit" {
            break;
        }

        let before = state.history.len();
        state = shell.execute(raw, &state);

        // The echo is already on screen unless the transcript was cleared.
        let echoed = state
            .history
            .get(before)
            .is_some_and(|h| h.is_echo() && h.value == raw);
        if echoed {
            print_entries(&mut stdout, &state.history[before + 1..], prefix)?;
        } else {
            write!(stdout, "{CLEAR_SCREEN}")?;
            print_entries(&mut stdout, &state.history, prefix)?;
        }
    }

    log::info!("reef exiting after {} command(s)", shell.recall().len());
    Ok(())
}
