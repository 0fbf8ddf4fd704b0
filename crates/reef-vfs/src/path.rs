//! Path normalization and tree traversal.

use std::borrow::Cow;

use reef_types::error::{ReefError, Result};

use crate::tree::Node;

/// Check whether a path is already in normal form (starts with `/`, no `//`,
/// no trailing `/` unless root).
fn is_normalized(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }
    if path.len() > 1 && path.ends_with('/') {
        return false;
    }
    !path.contains("//")
}

/// Normalize a path: ensure leading `/`, collapse `//`, strip trailing `/`
/// (except for root). Returns the input unchanged (zero-alloc) when already
/// in normal form.
///
/// `.` and `..` are left alone; use [`resolve`] to walk them.
pub fn normalize(path: &str) -> Cow<'_, str> {
    if is_normalized(path) {
        return Cow::Borrowed(path);
    }
    let path_str = if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    };
    let mut result = String::with_capacity(path_str.len());
    let mut prev_slash = false;
    for ch in path_str.chars() {
        if ch == '/' {
            if !prev_slash {
                result.push(ch);
            }
            prev_slash = true;
        } else {
            result.push(ch);
            prev_slash = false;
        }
    }
    if result.len() > 1 && result.ends_with('/') {
        result.pop();
    }
    Cow::Owned(result)
}

/// Split `expr` at its last `/`.
///
/// `"a/b"` gives `(Some("a"), "b")`, `"/b"` gives `(Some("/"), "b")` and a
/// bare `"b"` gives `(None, "b")`.
pub fn split_parent(expr: &str) -> (Option<&str>, &str) {
    match expr.rfind('/') {
        Some(0) => (Some("/"), &expr[1..]),
        Some(i) => (Some(&expr[..i]), &expr[i + 1..]),
        None => (None, expr),
    }
}

/// A node found by [`resolve`], with its canonical absolute path.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub path: String,
    pub node: &'a Node,
}

/// Advance the walk by one segment. Returns `false` if the walk fails.
fn step<'a>(stack: &mut Vec<&'a Node>, seg: &str) -> bool {
    if seg.is_empty() {
        return true;
    }
    let Some(&top) = stack.last() else {
        return false;
    };
    // Nothing, not even `.` or `..`, descends through a file.
    if !top.is_dir() {
        return false;
    }
    match seg {
        "." => {},
        ".." => {
            if stack.len() > 1 {
                stack.pop();
            }
        },
        name => match top.child(name) {
            Some(child) => stack.push(child),
            None => return false,
        },
    }
    true
}

/// Resolve path expression `expr` against `root`.
///
/// Absolute expressions walk from the root; relative ones walk `cwd` first.
/// `..` at the root stays at the root. Fails with
/// [`ReefError::NoSuchFile`] (token `expr`) when a segment is missing or
/// when the walk would continue through a file.
pub fn resolve<'a>(root: &'a Node, cwd: &str, expr: &str) -> Result<Resolved<'a>> {
    let base = if expr.starts_with('/') { "" } else { cwd };
    let mut stack: Vec<&'a Node> = vec![root];
    for seg in base.split('/').chain(expr.split('/')) {
        if !step(&mut stack, seg) {
            return Err(ReefError::NoSuchFile(expr.to_string()));
        }
    }

    let names: Vec<&str> = stack[1..].iter().map(|n| n.name()).collect();
    let path = format!("/{}", names.join("/"));
    let node = stack.last().copied().unwrap_or(root);
    Ok(Resolved { path, node })
}

/// Mutable lookup of a canonical absolute path (no `.` or `..`).
pub fn resolve_mut<'a>(root: &'a mut Node, path: &str) -> Option<&'a mut Node> {
    let mut node = root;
    for seg in path.split('/').filter(|s| !s.is_empty()) {
        node = node.child_mut(seg)?;
    }
    Some(node)
}
