//! Command-line parsing.
//!
//! A line is split on `;` into groups that always run, each group is split
//! on `&&` into steps that stop at the first failure, and each step is
//! tokenized on whitespace into a name, arguments and flags.

use std::collections::{BTreeSet, HashMap};

/// Positional and named arguments of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    positional: Vec<String>,
    named: HashMap<String, String>,
}

impl Args {
    /// Positional argument `i`.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.positional.get(i).map(String::as_str)
    }

    /// Positional arguments in source order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Value of a `--key value` argument.
    pub fn named(&self, key: &str) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }

    pub fn named_args(&self) -> &HashMap<String, String> {
        &self.named
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }
}

/// Single-character boolean flags (`-l`, `-la`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(BTreeSet<char>);

impl Flags {
    pub fn has(&self, flag: char) -> bool {
        self.0.contains(&flag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

/// One parsed command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    /// The chunk this invocation was parsed from, unmodified.
    pub input: String,
    pub args: Args,
    pub flags: Flags,
}

/// `;`-separated groups of `&&`-chained invocations.
pub type Chain = Vec<Vec<Invocation>>;

/// Parse a single command chunk (no `;` or `&&`).
///
/// - `--key value` stores `value` under `key` (an empty value if the line
///   ends first).
/// - `-abc` sets flags `a`, `b` and `c`.
/// - Anything else, including a bare `-` or `--`, is positional.
///
/// Empty input gives an invocation with an empty name.
pub fn parse_input(raw: &str) -> Invocation {
    let mut tokens = raw.split_whitespace();
    let name = tokens.next().unwrap_or_default().to_string();
    let mut args = Args::default();
    let mut flags = Flags::default();

    while let Some(tok) = tokens.next() {
        if let Some(key) = tok.strip_prefix("--")
            && !key.is_empty()
        {
            let value = tokens.next().unwrap_or_default();
            args.named.insert(key.to_string(), value.to_string());
        } else if let Some(letters) = tok.strip_prefix('-')
            && !letters.is_empty()
            && !letters.starts_with('-')
        {
            flags.0.extend(letters.chars());
        } else {
            args.positional.push(tok.to_string());
        }
    }

    Invocation {
        name,
        input: raw.to_string(),
        args,
        flags,
    }
}

/// Parse a full line into groups of steps.
///
/// Blank chunks between separators are dropped. A line with no commands
/// at all parses to one group holding one empty invocation.
pub fn parse(raw: &str) -> Chain {
    let chain: Chain = raw
        .split(';')
        .map(|group| {
            group
                .split("&&")
                .filter(|step| !step.trim().is_empty())
                .map(parse_input)
                .collect::<Vec<_>>()
        })
        .filter(|group| !group.is_empty())
        .collect();

    if chain.is_empty() {
        let empty = Invocation {
            input: raw.to_string(),
            ..Invocation::default()
        };
        return vec![vec![empty]];
    }
    log::trace!(
        "parsed {} group(s): {:?}",
        chain.len(),
        chain
            .iter()
            .map(|g| g.iter().map(|i| i.name.as_str()).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    );
    chain
}
