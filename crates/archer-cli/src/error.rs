//! CLI error types with miette diagnostics.
//!
//! Maps `archer_api::Error` variants into user-facing errors with
//! actionable help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes for process termination.
#[allow(dead_code)]
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("could not reach the router at {url}")]
    #[diagnostic(
        code(archerctl::connection_failed),
        help(
            "Check that the router is powered on and the URL is right.\n\
             URL: {url}\n\
             Use --timeout to wait longer for a slow router."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: archer_api::Error,
    },

    #[error("the router rejected the configured credentials")]
    #[diagnostic(
        code(archerctl::auth_rejected),
        help(
            "Pass the admin credentials with --user/--password, or set the\n\
             ARCHER_USER and ARCHER_PASSWORD environment variables."
        )
    )]
    AuthRejected {
        #[source]
        source: archer_api::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    #[diagnostic(code(archerctl::validation))]
    Validation { field: &'static str, reason: String },

    #[error("the router answered unexpectedly")]
    #[diagnostic(
        code(archerctl::router),
        help("Run again with -vv to log the raw exchange.")
    )]
    Router {
        #[source]
        source: archer_api::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthRejected { .. } => exit_code::AUTH,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── archer_api::Error → CliError mapping ─────────────────────────────

impl From<archer_api::Error> for CliError {
    fn from(err: archer_api::Error) -> Self {
        use archer_api::Error as ApiError;

        match &err {
            ApiError::InvalidCredentials { .. } => Self::Validation {
                field: "credentials",
                reason: err.to_string(),
            },

            ApiError::InvalidAddress { .. }
            | ApiError::InvalidMethod { .. }
            | ApiError::InvalidUrl { .. } => Self::Validation {
                field: "url",
                reason: err.to_string(),
            },

            ApiError::Transport(e) => Self::ConnectionFailed {
                url: e
                    .url()
                    .map_or_else(|| "(unknown)".into(), ToString::to_string),
                source: err,
            },

            ApiError::AuthenticationPage { .. } => Self::AuthRejected { source: err },

            _ => Self::Router { source: err },
        }
    }
}
