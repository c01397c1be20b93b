//! GitHub Actions CI workflow

use super::{ask_bool, write_params, yes_no, Plugin};
use crate::prompt::{split_list, Prompter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Creates `.github/workflows/ci.yml` running tests on a toolchain/OS matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubActions {
    pub toolchains: Vec<String>,
    pub os: Vec<String>,
    /// Upload coverage from the first matrix entry
    pub coverage: bool,
}

impl Default for GitHubActions {
    fn default() -> Self {
        Self {
            toolchains: vec!["stable".to_string()],
            os: vec!["ubuntu-latest".to_string()],
            coverage: false,
        }
    }
}

impl fmt::Display for GitHubActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_params(
            f,
            "GitHubActions",
            &[
                ("Toolchains", self.toolchains.join(", ")),
                ("OS", self.os.join(", ")),
                ("Coverage", yes_no(self.coverage)),
            ],
        )
    }
}

pub fn instantiate() -> Plugin {
    Plugin::GitHubActions(GitHubActions::default())
}

pub fn interactive(prompter: &mut dyn Prompter) -> io::Result<Plugin> {
    let defaults = GitHubActions::default();

    let toolchains = split_list(&prompter.input(
        "GitHubActions: toolchains (comma-separated)",
        &defaults.toolchains.join(", "),
    )?);
    let os = split_list(&prompter.input(
        "GitHubActions: operating systems (comma-separated)",
        &defaults.os.join(", "),
    )?);
    let coverage = ask_bool(prompter, "GitHubActions: collect coverage?", defaults.coverage)?;

    Ok(Plugin::GitHubActions(GitHubActions {
        toolchains: if toolchains.is_empty() {
            defaults.toolchains
        } else {
            toolchains
        },
        os: if os.is_empty() { defaults.os } else { os },
        coverage,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::{Answer, ScriptedPrompter};

    #[test]
    fn test_interactive_matrix() {
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Line("stable, nightly"),
            Answer::Line("ubuntu-latest,macos-latest"),
            Answer::Line("no"),
        ]);
        let plugin = interactive(&mut prompter).unwrap();
        assert_eq!(
            plugin.to_string(),
            "GitHubActions:\n  → Toolchains: stable, nightly\n  → OS: ubuntu-latest, macos-latest\n  → Coverage: No"
        );
    }

    #[test]
    fn test_blank_lists_fall_back_to_defaults() {
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Line(" , "),
            Answer::Line(""),
            Answer::Line(""),
        ]);
        assert_eq!(interactive(&mut prompter).unwrap(), instantiate());
    }
}
