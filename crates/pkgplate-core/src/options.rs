//! Named option set accepted by template construction
//!
//! Every option is optional. Options can be assembled in code, read from a
//! YAML file, collected by the interactive flow, or layered on top of each
//! other with [`TemplateOptions::overlay`].

use crate::plugins::Plugin;
use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Author input: a single string or a list of names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    One(String),
    Many(Vec<String>),
}

impl Authors {
    /// Single string form, joining lists with `", "`
    pub fn joined(&self) -> String {
        match self {
            Authors::One(name) => name.clone(),
            Authors::Many(names) => names.join(", "),
        }
    }
}

impl From<&str> for Authors {
    fn from(name: &str) -> Self {
        Authors::One(name.to_string())
    }
}

impl From<String> for Authors {
    fn from(name: String) -> Self {
        Authors::One(name)
    }
}

impl From<Vec<String>> for Authors {
    fn from(names: Vec<String>) -> Self {
        Authors::Many(names)
    }
}

impl From<Vec<&str>> for Authors {
    fn from(names: Vec<&str>) -> Self {
        Authors::Many(names.into_iter().map(str::to_string).collect())
    }
}

/// Options for building a [`crate::PackageTemplate`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateOptions {
    /// Hosting username; falls back to the `github.user` git setting
    pub owner: Option<String>,
    /// Hostname or URL of the code hosting service
    pub host: Option<String>,
    /// License identifier; empty means no license, absent means MIT
    pub license: Option<String>,
    pub authors: Option<Authors>,
    /// Parent directory of the package; `~` and relative paths are allowed
    pub directory: Option<PathBuf>,
    pub minimum_version: Option<Version>,
    pub use_ssh_remote: Option<bool>,
    pub plugins: Option<Vec<Plugin>>,
}

impl TemplateOptions {
    /// Read options from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse options file {}", path.display()))
    }

    /// Combine two option sets; values set in `overrides` win
    pub fn overlay(self, overrides: TemplateOptions) -> Self {
        Self {
            owner: overrides.owner.or(self.owner),
            host: overrides.host.or(self.host),
            license: overrides.license.or(self.license),
            authors: overrides.authors.or(self.authors),
            directory: overrides.directory.or(self.directory),
            minimum_version: overrides.minimum_version.or(self.minimum_version),
            use_ssh_remote: overrides.use_ssh_remote.or(self.use_ssh_remote),
            plugins: overrides.plugins.or(self.plugins),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::{PluginKind, Readme};
    use std::io::Write;

    #[test]
    fn test_authors_joined() {
        assert_eq!(Authors::from(vec!["Alice", "Bob"]).joined(), "Alice, Bob");
        assert_eq!(Authors::from("Carol").joined(), "Carol");
        assert_eq!(Authors::Many(Vec::new()).joined(), "");
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let base = TemplateOptions {
            owner: Some("base".to_string()),
            host: Some("gitlab.com".to_string()),
            ..Default::default()
        };
        let overrides = TemplateOptions {
            owner: Some("cli".to_string()),
            use_ssh_remote: Some(true),
            ..Default::default()
        };

        let merged = base.overlay(overrides);
        assert_eq!(merged.owner.as_deref(), Some("cli"));
        assert_eq!(merged.host.as_deref(), Some("gitlab.com"));
        assert_eq!(merged.use_ssh_remote, Some(true));
        assert_eq!(merged.license, None);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "owner: alice\n\
             license: Apache-2.0\n\
             authors: [Alice, Bob]\n\
             directory: ~/code\n\
             minimum_version: 1.74.0\n\
             plugins:\n  - kind: readme\n  - kind: gitignore\n    ignore_lockfile: false"
        )
        .unwrap();

        let options = TemplateOptions::from_yaml_file(file.path()).unwrap();
        assert_eq!(options.owner.as_deref(), Some("alice"));
        assert_eq!(options.authors, Some(Authors::from(vec!["Alice", "Bob"])));
        assert_eq!(options.directory, Some(PathBuf::from("~/code")));
        assert_eq!(options.minimum_version, Some(Version::new(1, 74, 0)));

        let plugins = options.plugins.unwrap();
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0], Plugin::Readme(Readme::default()));
        assert_eq!(plugins[1].kind(), PluginKind::Gitignore);
    }

    #[test]
    fn test_from_yaml_file_rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ownr: alice").unwrap();

        let err = TemplateOptions::from_yaml_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse options file"));
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let err = TemplateOptions::from_yaml_file(Path::new("/nonexistent/pkgplate.yaml"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
