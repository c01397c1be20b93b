//! Prompt abstraction used by the interactive flow and plugin elicitation

use std::io;

/// Line input and selection menus
///
/// Implementations block until the user answers. The interactive flow and
/// each plugin's own elicitation talk to the terminal only through this trait.
pub trait Prompter {
    /// Read one line. The default is displayed in brackets and returned
    /// unchanged when the user enters nothing.
    fn input(&mut self, label: &str, default: &str) -> io::Result<String>;

    /// Single-choice menu. `Ok(None)` means the user aborted the selection.
    fn select(&mut self, label: &str, options: &[String]) -> io::Result<Option<usize>>;

    /// Multi-choice menu returning the selected indices in ascending order.
    fn multiselect(&mut self, label: &str, options: &[String]) -> io::Result<Vec<usize>>;
}

/// Parse a yes/no answer, treating empty input as `default`
pub fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

/// Split a comma-separated answer into trimmed, non-empty items
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("", false), Some(false));
        assert_eq!(parse_yes_no("", true), Some(true));
        assert_eq!(parse_yes_no("Y", false), Some(true));
        assert_eq!(parse_yes_no(" yes ", false), Some(true));
        assert_eq!(parse_yes_no("no", true), Some(false));
        assert_eq!(parse_yes_no("maybe", false), None);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("stable, beta,,nightly "), vec!["stable", "beta", "nightly"]);
        assert!(split_list(" , ").is_empty());
    }
}
