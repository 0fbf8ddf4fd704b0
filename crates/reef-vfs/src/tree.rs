//! The filesystem tree and its mutation helpers.

use serde::{Deserialize, Serialize};

use reef_types::error::{ReefError, Result};

use crate::path::{normalize, resolve, resolve_mut, split_parent};

/// A directory or file.
///
/// Directories own their children in creation order. Sibling names are
/// unique; [`Node::insert`] enforces this for every node added after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Directory {
        name: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    File {
        name: String,
        #[serde(default)]
        content: String,
    },
}

impl Node {
    /// An empty root directory.
    pub fn root() -> Self {
        Self::dir("/", Vec::new())
    }

    pub fn dir(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Children in creation order (empty for files).
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Directory { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name() == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        match self {
            Self::Directory { children, .. } => children.iter_mut().find(|c| c.name() == name),
            Self::File { .. } => None,
        }
    }

    /// File content, or `None` for a directory.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content, .. } => Some(content),
            Self::Directory { .. } => None,
        }
    }

    /// Byte length of a file, child count of a directory.
    pub fn size(&self) -> usize {
        match self {
            Self::File { content, .. } => content.len(),
            Self::Directory { children, .. } => children.len(),
        }
    }

    /// Append a child, rejecting a duplicate name.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        match self {
            Self::Directory { children, .. } => {
                if children.iter().any(|c| c.name() == node.name()) {
                    return Err(ReefError::FileExists(node.name().to_string()));
                }
                children.push(node);
                Ok(())
            },
            Self::File { name, .. } => Err(ReefError::NotADirectory(name.clone())),
        }
    }

    /// Detach a child by name, keeping the order of the remaining siblings.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        match self {
            Self::Directory { children, .. } => {
                let idx = children.iter().position(|c| c.name() == name)?;
                Some(children.remove(idx))
            },
            Self::File { .. } => None,
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::root()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

/// Create the node built by `make` at path expression `expr`.
///
/// The parent must already exist and be a directory, and the final segment
/// must not be taken. Returns the canonical path of the new node. Every
/// error carries `expr` as its token.
pub fn insert_at(
    root: &mut Node,
    cwd: &str,
    expr: &str,
    make: impl FnOnce(&str) -> Node,
) -> Result<String> {
    let trimmed = if expr.len() > 1 {
        expr.trim_end_matches('/')
    } else {
        expr
    };
    let (parent_expr, leaf) = split_parent(trimmed);
    if !is_valid_name(leaf) {
        return Err(ReefError::InvalidName(expr.to_string()));
    }

    let parent_path = {
        let parent = resolve(root, cwd, parent_expr.unwrap_or("."))
            .map_err(|_| ReefError::NoSuchFile(expr.to_string()))?;
        if !parent.node.is_dir() {
            return Err(ReefError::NotADirectory(expr.to_string()));
        }
        if parent.node.child(leaf).is_some() {
            return Err(ReefError::FileExists(expr.to_string()));
        }
        parent.path
    };

    let dir = resolve_mut(root, &parent_path)
        .ok_or_else(|| ReefError::NoSuchFile(expr.to_string()))?;
    dir.insert(make(leaf))?;

    let created = if parent_path == "/" {
        format!("/{leaf}")
    } else {
        format!("{parent_path}/{leaf}")
    };
    log::debug!("vfs: created {created}");
    Ok(created)
}

/// Remove the node at path expression `expr`.
///
/// Directories need `recursive`. The root, the working directory and any
/// of its ancestors cannot be removed, so `cwd` stays valid.
pub fn remove_at(root: &mut Node, cwd: &str, expr: &str, recursive: bool) -> Result<Node> {
    let (target_path, is_dir) = {
        let target = resolve(root, cwd, expr)?;
        (target.path, target.node.is_dir())
    };

    let cwd_path = match resolve(root, cwd, ".") {
        Ok(r) => r.path,
        Err(_) => normalize(cwd).into_owned(),
    };
    let busy = target_path == "/"
        || cwd_path == target_path
        || cwd_path.starts_with(&format!("{target_path}/"));
    if busy {
        return Err(ReefError::Busy(expr.to_string()));
    }
    if is_dir && !recursive {
        return Err(ReefError::IsADirectory(expr.to_string()));
    }

    let (parent_path, leaf) = split_parent(&target_path);
    let parent = resolve_mut(root, parent_path.unwrap_or("/"))
        .ok_or_else(|| ReefError::NoSuchFile(expr.to_string()))?;
    let removed = parent
        .remove(leaf)
        .ok_or_else(|| ReefError::NoSuchFile(expr.to_string()))?;
    log::debug!("vfs: removed {target_path}");
    Ok(removed)
}
