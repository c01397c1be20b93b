//! Human-readable summary of a [`PackageTemplate`]

use crate::template::PackageTemplate;
use chrono::Datelike;
use std::fmt;
use std::path::{Path, PathBuf};

/// Summary of a template pinned to a year and home directory
struct Summary<'a> {
    template: &'a PackageTemplate,
    year: i32,
    home_dir: Option<&'a Path>,
}

impl PackageTemplate {
    /// Render the summary for a given year and home directory
    pub fn render_at(&self, year: i32, home_dir: Option<&Path>) -> String {
        Summary {
            template: self,
            year,
            home_dir,
        }
        .to_string()
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = self.template;
        writeln!(f, "PackageTemplate:")?;
        writeln!(f, "  → Owner: {}", template.owner())?;
        writeln!(f, "  → Host: {}", template.host())?;

        match template.license() {
            Some(license) if template.authors().is_empty() => {
                writeln!(f, "  → License: {} ({})", license, self.year)?
            }
            Some(license) => writeln!(
                f,
                "  → License: {} ({}, {})",
                license,
                template.authors(),
                self.year
            )?,
            None => writeln!(f, "  → License: None")?,
        }

        writeln!(
            f,
            "  → Package directory: {}",
            abbreviate_home(template.directory(), self.home_dir)
        )?;
        writeln!(f, "  → Minimum Rust version: {}", template.minimum_version())?;
        writeln!(
            f,
            "  → SSH remote: {}",
            if template.use_ssh_remote() { "Yes" } else { "No" }
        )?;

        if template.plugins().is_empty() {
            return write!(f, "  → Plugins: None");
        }

        write!(f, "  → Plugins:")?;
        let mut described: Vec<String> =
            template.plugins().values().map(|p| p.to_string()).collect();
        described.sort();
        for text in described {
            let mut lines = text.lines();
            if let Some(first) = lines.next() {
                write!(f, "\n    • {}", first)?;
            }
            for line in lines {
                write!(f, "\n      {}", line)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PackageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let home = dirs::home_dir();
        let summary = Summary {
            template: self,
            year: chrono::Local::now().year(),
            home_dir: home.as_deref(),
        };
        fmt::Display::fmt(&summary, f)
    }
}

/// Replace a leading home directory with `~`
fn abbreviate_home(path: &Path, home_dir: Option<&Path>) -> String {
    match home_dir.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => PathBuf::from("~").join(rest).display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::testing::environment;
    use crate::identity::{StaticIdentity, HOSTING_USER, USER_EMAIL, USER_NAME};
    use crate::options::TemplateOptions;
    use crate::plugins::{Codecov, GitHubActions, Plugin, Readme};

    const HOME: &str = "/home/alice";

    fn identity() -> StaticIdentity {
        StaticIdentity::new()
            .with(USER_NAME, "Alice")
            .with(USER_EMAIL, "alice@example.com")
            .with(HOSTING_USER, "alice")
    }

    fn build(options: TemplateOptions) -> PackageTemplate {
        PackageTemplate::new(options, &environment(identity())).unwrap()
    }

    #[test]
    fn test_render_without_license_or_plugins() {
        let template = build(TemplateOptions {
            license: Some(String::new()),
            directory: Some("~/code".into()),
            ..Default::default()
        });
        assert_eq!(
            template.render_at(2026, Some(Path::new(HOME))),
            "PackageTemplate:\n\
             \x20 → Owner: alice\n\
             \x20 → Host: github.com\n\
             \x20 → License: None\n\
             \x20 → Package directory: ~/code\n\
             \x20 → Minimum Rust version: 1.80.0\n\
             \x20 → SSH remote: No\n\
             \x20 → Plugins: None"
        );
    }

    #[test]
    fn test_render_with_license_and_sorted_plugins() {
        let template = build(TemplateOptions {
            license: Some("MIT".to_string()),
            use_ssh_remote: Some(true),
            plugins: Some(vec![
                Plugin::Readme(Readme::default()),
                Plugin::GitHubActions(GitHubActions::default()),
                Plugin::Codecov(Codecov::default()),
            ]),
            ..Default::default()
        });
        let text = template.render_at(2026, Some(Path::new(HOME)));

        assert!(text.contains("  → License: MIT (Alice, 2026)\n"));
        assert!(text.contains("  → Package directory: /work\n"));
        assert!(text.contains("  → SSH remote: Yes\n"));
        assert!(text.ends_with(
            "  → Plugins:\n\
             \x20   • Codecov:\n\
             \x20       → Config file: None\n\
             \x20   • GitHubActions:\n\
             \x20       → Toolchains: stable\n\
             \x20       → OS: ubuntu-latest\n\
             \x20       → Coverage: No\n\
             \x20   • Readme:\n\
             \x20       → File: README.md\n\
             \x20       → Inline badges: No"
        ));
    }

    #[test]
    fn test_render_license_without_authors() {
        let env = environment(StaticIdentity::new().with(HOSTING_USER, "alice"));
        let template = PackageTemplate::new(
            TemplateOptions {
                license: Some("ISC".to_string()),
                ..Default::default()
            },
            &env,
        )
        .unwrap();
        assert!(template
            .render_at(2026, None)
            .contains("  → License: ISC (2026)\n"));
    }

    #[test]
    fn test_render_defaults_to_mit() {
        let template = build(TemplateOptions::default());
        assert!(template
            .render_at(2026, Some(Path::new(HOME)))
            .contains("  → License: MIT (Alice, 2026)\n"));
    }

    #[test]
    fn test_display_matches_render_at() {
        let template = build(TemplateOptions {
            plugins: Some(vec![Plugin::Codecov(Codecov::default())]),
            ..Default::default()
        });
        let year = chrono::Local::now().year();
        let home = dirs::home_dir();
        assert_eq!(template.to_string(), template.render_at(year, home.as_deref()));
    }

    #[test]
    fn test_render_is_stable() {
        let template = build(TemplateOptions {
            license: Some("Apache-2.0".to_string()),
            plugins: Some(vec![Plugin::Readme(Readme::default())]),
            ..Default::default()
        });
        assert_eq!(template.to_string(), template.to_string());
        assert_eq!(
            template.render_at(2030, Some(Path::new(HOME))),
            template.render_at(2030, Some(Path::new(HOME)))
        );
    }

    #[test]
    fn test_abbreviate_home() {
        let home = Some(Path::new(HOME));
        assert_eq!(abbreviate_home(Path::new(HOME), home), "~");
        assert_eq!(abbreviate_home(Path::new("/home/alice/x/y"), home), "~/x/y");
        assert_eq!(abbreviate_home(Path::new("/home/alicia"), home), "/home/alicia");
        assert_eq!(abbreviate_home(Path::new("/srv"), None), "/srv");
    }
}
