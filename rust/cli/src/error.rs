//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the error to an exit code.
//!
//! ## Batch Validation Errors
//!
//! `BatchValidationError<T>` attaches the failing item to a message. The
//! `verify` command uses it to say which game broke a rule.

use std::fmt;

use vegas_engine::errors::GameError;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),

    /// Input ended before the game did
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

/// Error for one item of a batch, carrying what identifies that item.
///
/// # Examples
///
/// ```rust
/// use vegas_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: "game 3 (seed 44)".to_string(),
///     message: "round 2: casino 5 holds $40, below the $50 floor".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "game 3 (seed 44): round 2: casino 5 holds $40, below the $50 floor"
/// );
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_validation_error_with_usize() {
        let error = BatchValidationError {
            item_context: 42,
            message: "Test error".to_string(),
        };
        assert_eq!(error.to_string(), "42: Test error");
    }

    #[test]
    fn engine_errors_keep_their_message() {
        let err = CliError::from(GameError::InvalidPlayerCount { count: 7 });
        assert!(matches!(err, CliError::Engine(_)));
        assert!(err.to_string().starts_with("Engine error: "));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn config_errors_map_to_config_variant() {
        let err = CliError::from(ConfigError::Invalid("bad players".into()));
        assert_eq!(err.to_string(), "Configuration error: bad players");
    }
}
