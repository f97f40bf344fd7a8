use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between argument mistakes
/// and failures reported by the remote servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested operation completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (lookup, network, script execution, config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the administration clients.
///
/// Every variant names the high-level operation that failed. The underlying
/// cause is reachable through `source()` and is not repeated in the message.
/// Request payloads (component descriptors, rendered
/// statements) are never part of the message.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Looking up an application or organization failed
    #[error("Failed to resolve {scope} '{identifier}'")]
    Resolution {
        scope: &'static str,
        identifier: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to build the {operation} request")]
    Encoding {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to {operation}")]
    Transport {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to parse the {operation} response")]
    Decoding {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The statement for a repository could not be rendered
    #[error("Could not render {kind} repository statement for format '{format}': {reason}")]
    Template {
        kind: String,
        format: String,
        reason: String,
    },

    #[error("Could not create {kind} repository")]
    Execution {
        kind: String,
        #[source]
        source: anyhow::Error,
    },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
