//! Shared fixtures for unit tests.

use reef_vfs::Node;

use crate::session::SessionState;

/// `/dir1/childDir` plus `/file1`.
pub fn sample_structure() -> Node {
    Node::dir(
        "/",
        vec![
            Node::dir("dir1", vec![Node::dir("childDir", Vec::new())]),
            Node::file("file1", "contents of file1"),
        ],
    )
}

/// A fresh session at the root of [`sample_structure`].
pub fn sample_state() -> SessionState {
    SessionState::new(sample_structure())
}
