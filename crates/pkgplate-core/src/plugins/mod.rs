//! Generation plugins and their registry
//!
//! Each plugin contributes one discrete piece of generated output. Plugins are
//! identified by a [`PluginKind`] tag, and every kind is described once in a
//! static registry that knows how to build a default instance and, for kinds
//! that support it, how to ask the user for the plugin's parameters.

pub mod codecov;
pub mod github_actions;
pub mod gitignore;
pub mod readme;
pub mod test_suite;

use crate::prompt::{parse_yes_no, Prompter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;

pub use codecov::Codecov;
pub use github_actions::GitHubActions;
pub use gitignore::Gitignore;
pub use readme::Readme;
pub use test_suite::TestSuite;

/// Unique tag of a plugin kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    Readme,
    Gitignore,
    TestSuite,
    GitHubActions,
    Codecov,
}

impl PluginKind {
    /// Name used on the command line, in option files and in menus
    pub fn name(&self) -> &'static str {
        match self {
            PluginKind::Readme => "readme",
            PluginKind::Gitignore => "gitignore",
            PluginKind::TestSuite => "test-suite",
            PluginKind::GitHubActions => "github-actions",
            PluginKind::Codecov => "codecov",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PluginKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        registry()
            .iter()
            .map(|descriptor| descriptor.kind)
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = registry().iter().map(|d| d.kind.name()).collect();
                format!("Unknown plugin '{}'. Known plugins: {}", s, known.join(", "))
            })
    }
}

/// A configured plugin instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Plugin {
    Readme(Readme),
    Gitignore(Gitignore),
    TestSuite(TestSuite),
    GitHubActions(GitHubActions),
    Codecov(Codecov),
}

impl Plugin {
    pub fn kind(&self) -> PluginKind {
        match self {
            Plugin::Readme(_) => PluginKind::Readme,
            Plugin::Gitignore(_) => PluginKind::Gitignore,
            Plugin::TestSuite(_) => PluginKind::TestSuite,
            Plugin::GitHubActions(_) => PluginKind::GitHubActions,
            Plugin::Codecov(_) => PluginKind::Codecov,
        }
    }
}

/// Textual description of the plugin and its parameters
impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plugin::Readme(p) => fmt::Display::fmt(p, f),
            Plugin::Gitignore(p) => fmt::Display::fmt(p, f),
            Plugin::TestSuite(p) => fmt::Display::fmt(p, f),
            Plugin::GitHubActions(p) => fmt::Display::fmt(p, f),
            Plugin::Codecov(p) => fmt::Display::fmt(p, f),
        }
    }
}

/// Interactive entry point of a plugin kind
pub type InteractiveFn = fn(&mut dyn Prompter) -> io::Result<Plugin>;

/// Registry entry for one plugin kind
#[derive(Clone, Copy)]
pub struct PluginDescriptor {
    pub kind: PluginKind,
    /// Build an instance with default parameters
    pub instantiate: fn() -> Plugin,
    /// Ask the user for the plugin's parameters, if the kind supports it
    pub interactive: Option<InteractiveFn>,
}

impl fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("kind", &self.kind)
            .field("interactive", &self.interactive.is_some())
            .finish()
    }
}

static REGISTRY: [PluginDescriptor; 5] = [
    PluginDescriptor {
        kind: PluginKind::Readme,
        instantiate: readme::instantiate,
        interactive: Some(readme::interactive),
    },
    // Nothing worth asking about; always built from defaults
    PluginDescriptor {
        kind: PluginKind::Gitignore,
        instantiate: gitignore::instantiate,
        interactive: None,
    },
    PluginDescriptor {
        kind: PluginKind::TestSuite,
        instantiate: test_suite::instantiate,
        interactive: Some(test_suite::interactive),
    },
    PluginDescriptor {
        kind: PluginKind::GitHubActions,
        instantiate: github_actions::instantiate,
        interactive: Some(github_actions::interactive),
    },
    PluginDescriptor {
        kind: PluginKind::Codecov,
        instantiate: codecov::instantiate,
        interactive: Some(codecov::interactive),
    },
];

/// All known plugin kinds
pub fn registry() -> &'static [PluginDescriptor] {
    &REGISTRY
}

/// Registry entry for `kind`
pub fn descriptor(kind: PluginKind) -> &'static PluginDescriptor {
    // Entries are stored in declaration order of `PluginKind`
    &REGISTRY[kind as usize]
}

/// Kinds that offer interactive elicitation, in registry order
pub fn discover_interactive() -> Vec<&'static PluginDescriptor> {
    let found: Vec<_> = registry()
        .iter()
        .filter(|descriptor| descriptor.interactive.is_some())
        .collect();
    tracing::debug!("discovered {} interactive plugin kinds", found.len());
    found
}

/// Ask a yes/no question through a line prompt
pub(crate) fn ask_bool(
    prompter: &mut dyn Prompter,
    label: &str,
    default: bool,
) -> io::Result<bool> {
    let shown = if default { "yes" } else { "no" };
    let answer = prompter.input(label, shown)?;
    parse_yes_no(&answer, default).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("expected yes or no for '{}', got '{}'", label, answer),
        )
    })
}

/// Write a "Name:" heading followed by `→ key: value` lines
pub(crate) fn write_params(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    params: &[(&str, String)],
) -> fmt::Result {
    write!(f, "{}:", name)?;
    for (key, value) in params {
        write!(f, "\n  → {}: {}", key, value)?;
    }
    Ok(())
}

pub(crate) fn yes_no(value: bool) -> String {
    let text = if value { "Yes" } else { "No" };
    text.to_string()
}
