//! Integration test scaffolding

use super::{ask_bool, write_params, yes_no, Plugin};
use crate::prompt::Prompter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Creates an integration test directory with a smoke test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestSuite {
    pub directory: String,
    /// Also create a `benches/` directory
    pub benches: bool,
}

impl Default for TestSuite {
    fn default() -> Self {
        Self {
            directory: "tests".to_string(),
            benches: false,
        }
    }
}

impl fmt::Display for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_params(
            f,
            "TestSuite",
            &[
                ("Directory", self.directory.clone()),
                ("Benchmarks", yes_no(self.benches)),
            ],
        )
    }
}

pub fn instantiate() -> Plugin {
    Plugin::TestSuite(TestSuite::default())
}

pub fn interactive(prompter: &mut dyn Prompter) -> io::Result<Plugin> {
    let defaults = TestSuite::default();
    let directory = prompter.input("TestSuite: test directory", &defaults.directory)?;
    let benches = ask_bool(prompter, "TestSuite: add benchmarks?", defaults.benches)?;
    let directory = match directory.trim() {
        "" => defaults.directory,
        dir => dir.to_string(),
    };
    Ok(Plugin::TestSuite(TestSuite { directory, benches }))
}
