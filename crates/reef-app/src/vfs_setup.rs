use std::path::Path;

use anyhow::{Context, Result};
use reef_vfs::Node;

/// Demo filesystem used when no structure file is configured.
pub fn demo_structure() -> Node {
    Node::dir(
        "/",
        vec![
            Node::dir(
                "home",
                vec![Node::dir(
                    "user",
                    vec![
                        Node::file(
                            "readme.txt",
                            "Welcome to reef!\nType 'help' for available commands.",
                        ),
                        Node::dir("projects", Vec::new()),
                        Node::file(".profile", "prompt=hacker@default"),
                    ],
                )],
            ),
            Node::dir(
                "etc",
                vec![
                    Node::file("hostname", "reef"),
                    Node::file("version", env!("CARGO_PKG_VERSION")),
                ],
            ),
            Node::dir("tmp", Vec::new()),
        ],
    )
}

/// Read an initial filesystem tree from a JSON file.
pub fn load_structure(path: &Path) -> Result<Node> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading structure {}", path.display()))?;
    let node: Node = serde_json::from_str(&json)
        .with_context(|| format!("parsing structure {}", path.display()))?;
    if !node.is_dir() {
        anyhow::bail!("structure root in {} is not a directory", path.display());
    }
    log::info!(
        "Loaded structure from {} ({} top-level entries)",
        path.display(),
        node.children().len()
    );
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_structure_has_home() {
        let root = demo_structure();
        let user = root.child("home").and_then(|h| h.child("user")).unwrap();
        assert!(user.child("readme.txt").is_some());
        let hostname = root.child("etc").and_then(|e| e.child("hostname"));
        assert_eq!(hostname.and_then(Node::content), Some("reef"));
    }

    #[test]
    fn load_structure_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(
            &path,
            r#"{"type":"directory","name":"/","children":[{"type":"file","name":"a","content":"x"}]}"#,
        )
        .unwrap();
        let node = load_structure(&path).unwrap();
        assert_eq!(node.child("a").and_then(Node::content), Some("x"));
    }

    #[test]
    fn load_structure_rejects_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(&path, r#"{"type":"file","name":"/"}"#).unwrap();
        assert!(load_structure(&path).is_err());
        assert!(load_structure(&dir.path().join("missing.json")).is_err());
    }
}
