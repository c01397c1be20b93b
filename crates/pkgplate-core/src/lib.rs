//! pkgplate core - validated package scaffolding configuration
//!
//! This library builds a [`PackageTemplate`]: an immutable description of how
//! a new package should be generated (owner, hosting service, license,
//! authors, target directory, minimum Rust version, remote transport and a set
//! of generation plugins). Generating files from it is left to the plugins'
//! consumers.
//!
//! # Architecture
//!
//! - **Builder** - [`PackageTemplate::new`] validates a [`TemplateOptions`]
//!   and resolves missing values through an [`Environment`]
//! - **Interactive flow** - [`interactive_template`] asks for the same options
//!   through a [`Prompter`] and hands them to the builder
//! - **Renderer** - `Display for PackageTemplate` prints a summary
//! - **CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompter and [`run`]
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use pkgplate_core::{Environment, PackageTemplate, TemplateOptions};
//!
//! let env = Environment::detect();
//! let options = TemplateOptions {
//!     license: Some("MIT".to_string()),
//!     ..Default::default()
//! };
//! let template = PackageTemplate::new(options, &env)?;
//! println!("{}", template);
//! # Ok::<(), pkgplate_core::ConfigError>(())
//! ```

pub mod environment;
pub mod error;
pub mod identity;
pub mod interactive;
pub mod license;
pub mod options;
pub mod plugins;
pub mod prompt;
mod render;
pub mod runtime;
pub mod template;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use environment::Environment;
pub use error::{ConfigError, InteractiveError};
pub use identity::{GitConfig, IdentitySource, StaticIdentity};
pub use interactive::{complete_options, interactive_options, interactive_template};
pub use license::{BuiltinLicenses, LicenseCatalog};
pub use options::{Authors, TemplateOptions};
pub use plugins::{Plugin, PluginKind};
pub use prompt::Prompter;
pub use template::{PackageTemplate, Warning};

#[cfg(feature = "tui")]
pub use tui::run;
