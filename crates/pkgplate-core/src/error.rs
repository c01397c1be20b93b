//! Error types for template construction and interactive elicitation

use std::io;
use thiserror::Error;

/// Fatal validation failure while building a [`crate::PackageTemplate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field could not be resolved from any source
    #[error("missing required field `{field}`: no explicit value and nothing configured")]
    MissingRequiredField { field: &'static str },

    /// A field was given a value that does not pass validation
    #[error("invalid value {value:?} for `{field}`: {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(
        field: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        ConfigError::InvalidFieldValue {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Name of the field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::MissingRequiredField { field } => field,
            ConfigError::InvalidFieldValue { field, .. } => field,
        }
    }
}

/// Failure of the interactive prompt flow
#[derive(Debug, Error)]
pub enum InteractiveError {
    /// The collected options failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading from the terminal failed
    #[error("prompt failed: {0}")]
    Prompt(#[from] io::Error),

    /// The background plugin discovery task did not complete
    #[error("plugin discovery failed: {0}")]
    Discovery(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let missing = ConfigError::MissingRequiredField { field: "owner" };
        assert!(missing.to_string().contains("`owner`"));
        assert_eq!(missing.field(), "owner");

        let invalid = ConfigError::invalid("license", "NOPE", "unknown license");
        assert_eq!(
            invalid.to_string(),
            "invalid value \"NOPE\" for `license`: unknown license"
        );
        assert_eq!(invalid.field(), "license");
    }

    #[test]
    fn test_config_error_passes_through_interactive_error() {
        let err: InteractiveError = ConfigError::MissingRequiredField { field: "owner" }.into();
        match err {
            InteractiveError::Config(inner) => assert_eq!(inner.field(), "owner"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
