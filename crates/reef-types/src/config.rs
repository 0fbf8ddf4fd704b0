//! Shell configuration loaded from TOML.
//!
//! ```toml
//! structure = "seed.json"
//!
//! [prompt]
//! prefix = "guest@reef"
//!
//! [messages]
//! command_not_found = "no such command: $1"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ReefError, Result};
use crate::messages::Messages;

/// Prompt rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "hacker@default".to_string()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

/// Top-level shell configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub messages: Messages,
    /// JSON snapshot of the initial filesystem tree, relative to the config file.
    #[serde(default)]
    pub structure: Option<PathBuf>,
}

impl ShellConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        if config.prompt.prefix.trim().is_empty() {
            return Err(ReefError::Config("prompt.prefix must not be empty".into()));
        }
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// A relative `structure` path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(structure) = config.structure.as_mut()
            && structure.is_relative()
            && let Some(dir) = path.parent()
        {
            *structure = dir.join(&*structure);
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        let c = ShellConfig::from_toml_str("").unwrap();
        assert_eq!(c, ShellConfig::default());
        assert_eq!(c.prompt.prefix, "hacker@default");
        assert!(c.structure.is_none());
    }

    #[test]
    fn prompt_and_messages_override() {
        let c = ShellConfig::from_toml_str(
            "[prompt]\nprefix = \"guest@reef\"\n\n[messages]\ncommand_not_found = \"no such command: $1\"\n",
        )
        .unwrap();
        assert_eq!(c.prompt.prefix, "guest@reef");
        assert_eq!(c.messages.command_not_found, "no such command: $1");
        assert_eq!(c.messages.busy, Messages::default().busy);
    }

    #[test]
    fn blank_prefix_is_config_error() {
        let err = ShellConfig::from_toml_str("[prompt]\nprefix = \"  \"").unwrap_err();
        assert!(matches!(err, ReefError::Config(_)));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = ShellConfig::from_toml_str("[prompt\nprefix=").unwrap_err();
        assert!(matches!(err, ReefError::TomlParse(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn load_resolves_structure_relative_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reef.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "structure = \"seed.json\"").unwrap();
        let c = ShellConfig::load(&path).unwrap();
        assert_eq!(c.structure, Some(dir.path().join("seed.json")));
    }

    #[test]
    fn load_keeps_absolute_structure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reef.toml");
        std::fs::write(&path, "structure = \"/srv/seed.json\"\n").unwrap();
        let c = ShellConfig::load(&path).unwrap();
        assert_eq!(c.structure, Some(PathBuf::from("/srv/seed.json")));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ReefError::Io(_)));
    }
}
