//! CLI error type
//!
//! Separates configuration problems, which abort the process as they are,
//! from failures of the command itself, which are logged and turned into a
//! failing exit code.

use std::fmt::{self, Display, Formatter};

use pnc_client::ClientError;

#[derive(Debug)]
pub enum CliError {
    /// The CLI cannot run at all (bad or missing configuration)
    Fatal(anyhow::Error),
    /// The command ran and failed
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn fatal(error: impl Into<anyhow::Error>) -> Self {
        Self::Fatal(error.into())
    }

    pub fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatal(error) | Self::Failure(error) => write!(f, "{error:#}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ClientError> for CliError {
    fn from(error: ClientError) -> Self {
        Self::Failure(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};

    #[test]
    fn test_client_errors_are_failures() {
        let err: CliError = ClientError::api_error(500, "boom").into();
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "API error (status 500): boom");
    }

    #[test]
    fn test_display_includes_context_chain() {
        let source: anyhow::Result<()> = Err(anyhow!("file not found"));
        let err = CliError::fatal(source.context("Failed to read config").unwrap_err());
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "Failed to read config: file not found");
    }
}
