//! Tab completion for partial input.
//!
//! A single token completes against command names; anything after the
//! first token completes the last token against the filesystem. A trailing
//! space counts as an empty last token.

use reef_vfs::{resolve, split_parent};

use crate::interpreter::CommandRegistry;
use crate::session::SessionState;

/// The only item of `candidates`, or `None` for zero or several.
fn unique<'a>(mut candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let first = candidates.next()?;
    match candidates.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Propose a completed line for `partial`.
///
/// Returns `None` unless exactly one candidate matches. Matching is a
/// case-sensitive prefix test. Never mutates `state`.
pub fn autocomplete(registry: &CommandRegistry, partial: &str, state: &SessionState) -> Option<String> {
    let mut tokens: Vec<&str> = partial.split_whitespace().collect();
    // A trailing space starts a new, empty argument.
    if !tokens.is_empty() && partial.ends_with(char::is_whitespace) {
        tokens.push("");
    }

    let Some((last, head)) = tokens.split_last().filter(|_| tokens.len() > 1) else {
        let prefix = tokens.first().copied().unwrap_or_default();
        return unique(registry.completions(prefix).into_iter()).map(str::to_string);
    };

    let (dir_expr, leaf) = split_parent(last);
    let dir = resolve(&state.structure, &state.cwd, dir_expr.unwrap_or(".")).ok()?;
    if !dir.node.is_dir() {
        return None;
    }
    let name = unique(
        dir.node
            .children()
            .iter()
            .map(|c| c.name())
            .filter(|n| n.starts_with(leaf)),
    )?;

    let completed = match dir_expr {
        Some("/") => format!("/{name}"),
        Some(parent) => format!("{parent}/{name}"),
        None => name.to_string(),
    };
    log::trace!("autocomplete: {last} -> {completed}");
    Some(format!("{} {completed}", head.join(" ")))
}
