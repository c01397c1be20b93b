//! README generation

use super::{ask_bool, write_params, yes_no, Plugin};
use crate::prompt::Prompter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Creates a README with the package name, badges and a short usage section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Readme {
    /// File name relative to the package root
    pub file: String,
    /// Put badges on the title line instead of below it
    pub inline_badges: bool,
}

impl Default for Readme {
    fn default() -> Self {
        Self {
            file: "README.md".to_string(),
            inline_badges: false,
        }
    }
}

impl fmt::Display for Readme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_params(
            f,
            "Readme",
            &[
                ("File", self.file.clone()),
                ("Inline badges", yes_no(self.inline_badges)),
            ],
        )
    }
}

pub fn instantiate() -> Plugin {
    Plugin::Readme(Readme::default())
}

pub fn interactive(prompter: &mut dyn Prompter) -> io::Result<Plugin> {
    let defaults = Readme::default();
    let file = prompter.input("Readme: file name", &defaults.file)?;
    let inline_badges = ask_bool(prompter, "Readme: inline badges?", defaults.inline_badges)?;
    Ok(Plugin::Readme(Readme {
        file: if file.trim().is_empty() {
            defaults.file
        } else {
            file.trim().to_string()
        },
        inline_badges,
    }))
}
