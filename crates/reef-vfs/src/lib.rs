//! In-memory virtual filesystem for reef.
//!
//! The filesystem is a single owned tree of [`Node`]s. Directories keep
//! their children in creation order and sibling names are unique. Paths are
//! `/`-separated, absolute from the root or relative to a working
//! directory, and may contain `.` and `..`.

mod path;
mod tree;

/// Normalize an absolute path string (leading `/`, no `//`, no trailing `/`).
pub use path::normalize;
/// Walk a path expression from the root or a working directory.
pub use path::resolve;
/// Mutable lookup by canonical absolute path.
pub use path::resolve_mut;
/// Split a path expression into its parent expression and final segment.
pub use path::split_parent;
/// The result of a successful [`resolve`].
pub use path::Resolved;
/// Create a node at a path expression.
pub use tree::insert_at;
/// A directory or file in the tree.
pub use tree::Node;
/// Remove the node at a path expression.
pub use tree::remove_at;
