//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::EmptyInput => crate::exitcode::DATAERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(_) | ApplicationError::Render { .. } => {
                    crate::exitcode::SOFTWARE
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_input_when_exit_code_then_data_error() {
        let err = CliError::from(ApplicationError::EmptyInput);
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_config_error_when_exit_code_then_config() {
        let err = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(err.to_string(), "config error: bad");
    }

    #[test]
    fn given_io_error_when_exit_code_then_ioerr() {
        let err = CliError::io(
            "read stdin",
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
        assert_eq!(err.to_string(), "I/O error: read stdin");
    }
}
