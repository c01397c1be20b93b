//! Validated package template configuration
//!
//! [`PackageTemplate`] describes how a new package should be scaffolded. It is
//! only ever produced by [`PackageTemplate::build`] (or its logging wrapper
//! [`PackageTemplate::new`]), which resolves every option to a concrete value
//! or fails; there is no way to obtain a partially validated template.

use crate::environment::Environment;
use crate::error::ConfigError;
use crate::identity::{HOSTING_USER, USER_EMAIL, USER_NAME};
use crate::options::TemplateOptions;
use crate::plugins::{Plugin, PluginKind};
use semver::Version;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Hosting service used when none is given
pub const DEFAULT_HOST: &str = "github.com";

/// Package directory used when none is given
pub const DEFAULT_DIRECTORY: &str = ".";

/// License used when prompts are skipped
pub const DEFAULT_LICENSE: &str = "MIT";

/// Non-fatal problem found while building a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Git identity keys that are not configured
    MissingGitIdentity { keys: Vec<&'static str> },
    /// Plugin kinds that were supplied more than once
    DuplicatePlugins { kinds: Vec<PluginKind> },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingGitIdentity { keys } => write!(
                f,
                "git config {} not set; package generation will fail without it \
                 (set with `git config --global <key> <value>`)",
                keys.join(" and ")
            ),
            Warning::DuplicatePlugins { kinds } => {
                let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
                write!(
                    f,
                    "plugins supplied more than once, keeping the last of each: {}",
                    names.join(", ")
                )
            }
        }
    }
}

/// Immutable description of how to generate a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageTemplate {
    owner: String,
    host: String,
    license: Option<String>,
    authors: String,
    directory: PathBuf,
    minimum_version: Version,
    use_ssh_remote: bool,
    plugins: BTreeMap<PluginKind, Plugin>,
}

impl PackageTemplate {
    /// Build a template, logging any warnings
    pub fn new(options: TemplateOptions, env: &Environment) -> Result<Self, ConfigError> {
        let (template, warnings) = Self::build(options, env)?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        Ok(template)
    }

    /// Build a template and return the non-fatal warnings found on the way
    pub fn build(
        options: TemplateOptions,
        env: &Environment,
    ) -> Result<(Self, Vec<Warning>), ConfigError> {
        let mut warnings = Vec::new();

        let missing: Vec<&'static str> = [USER_NAME, USER_EMAIL]
            .into_iter()
            .filter(|key| env.identity.get_value(key, "").is_empty())
            .collect();
        if !missing.is_empty() {
            warnings.push(Warning::MissingGitIdentity { keys: missing });
        }

        let owner = resolve_owner(options.owner.as_deref(), env)?;
        let host = normalize_host(options.host.as_deref().unwrap_or(DEFAULT_HOST))?;
        let license = validate_license(options.license, env)?;

        let authors = options
            .authors
            .map(|authors| authors.joined())
            .filter(|authors| !authors.is_empty())
            .unwrap_or_else(|| env.identity.get_value(USER_NAME, ""));

        let directory = resolve_directory(
            options
                .directory
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_DIRECTORY)),
            env,
        );

        let minimum_version = options
            .minimum_version
            .unwrap_or_else(|| env.system_version.clone());
        let use_ssh_remote = options.use_ssh_remote.unwrap_or(false);

        let (plugins, duplicates) = collect_plugins(options.plugins.unwrap_or_default());
        if !duplicates.is_empty() {
            warnings.push(Warning::DuplicatePlugins { kinds: duplicates });
        }

        tracing::debug!(%owner, %host, directory = %directory.display(), "resolved template");

        Ok((
            Self {
                owner,
                host,
                license,
                authors,
                directory,
                minimum_version,
                use_ssh_remote,
                plugins,
            },
            warnings,
        ))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Bare hostname of the code hosting service
    pub fn host(&self) -> &str {
        &self.host
    }

    /// License identifier, `None` when no license file is generated
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    /// Absolute parent directory of the package
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn minimum_version(&self) -> &Version {
        &self.minimum_version
    }

    pub fn use_ssh_remote(&self) -> bool {
        self.use_ssh_remote
    }

    pub fn plugins(&self) -> &BTreeMap<PluginKind, Plugin> {
        &self.plugins
    }

    pub fn plugin(&self, kind: PluginKind) -> Option<&Plugin> {
        self.plugins.get(&kind)
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugins.contains_key(&kind)
    }
}

fn resolve_owner(explicit: Option<&str>, env: &Environment) -> Result<String, ConfigError> {
    let owner = match explicit.map(str::trim) {
        Some(owner) if !owner.is_empty() => owner.to_string(),
        _ => env.identity.get_value(HOSTING_USER, ""),
    };
    if owner.is_empty() {
        return Err(ConfigError::MissingRequiredField { field: "owner" });
    }
    Ok(owner)
}

/// Accept a bare hostname or a URL and return the hostname
pub(crate) fn normalize_host(input: &str) -> Result<String, ConfigError> {
    let trimmed = input.trim();
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };
    let url = Url::parse(&with_scheme).map_err(|e| ConfigError::invalid("host", input, e))?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(ConfigError::invalid("host", input, "URL has no host")),
    }
}

fn validate_license(
    license: Option<String>,
    env: &Environment,
) -> Result<Option<String>, ConfigError> {
    let id = license.unwrap_or_else(|| DEFAULT_LICENSE.to_string());
    if id.is_empty() {
        Ok(None)
    } else if env.licenses.exists(&id) {
        Ok(Some(id))
    } else {
        Err(ConfigError::invalid("license", id, "no such license"))
    }
}

/// Expand `~`, anchor relative paths at the current directory and drop
/// `.`/`..` components without touching the filesystem
pub(crate) fn resolve_directory(input: &Path, env: &Environment) -> PathBuf {
    let expanded = match (input.strip_prefix("~"), &env.home_dir) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => input.to_path_buf(),
    };
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env.current_dir.join(expanded)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Key plugins by kind, keeping the last of each; also returns the kinds
/// that occurred more than once
fn collect_plugins(plugins: Vec<Plugin>) -> (BTreeMap<PluginKind, Plugin>, Vec<PluginKind>) {
    let supplied = plugins.len();
    let mut by_kind = BTreeMap::new();
    let mut duplicates = Vec::new();
    for plugin in plugins {
        let kind = plugin.kind();
        if by_kind.insert(kind, plugin).is_some() && !duplicates.contains(&kind) {
            duplicates.push(kind);
        }
    }
    debug_assert_eq!(supplied != by_kind.len(), !duplicates.is_empty());
    (by_kind, duplicates)
}
