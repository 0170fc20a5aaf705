use reqwest::Method;
use thiserror::Error;
use url::Url;

use crate::connections::LinkType;

/// Top-level error type for the `archer-api` crate.
///
/// Covers every failure mode of the client: configuration validation,
/// request construction, transport, HTTP status classification, and
/// payload decoding. The CLI maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// User name or password was empty at construction.
    #[error("invalid credentials: {reason}")]
    InvalidCredentials { reason: &'static str },

    /// Base address failed to parse, or lacked an http(s) scheme or a host.
    #[error("invalid router address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    // ── Request construction ────────────────────────────────────────
    /// Method is not a syntactically valid HTTP verb token.
    #[error("invalid HTTP method '{method}'")]
    InvalidMethod { method: String },

    /// Relative path could not be resolved against the base address.
    #[error("cannot resolve '{path}' against {base}")]
    InvalidUrl {
        path: String,
        base: Url,
        #[source]
        source: url::ParseError,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Status code outside the 2xx range.
    #[error("got status code {status} (want 200-299) from {method} {url}")]
    HttpStatus {
        status: u16,
        method: Method,
        url: Url,
    },

    // ── Payload decoding ────────────────────────────────────────────
    /// The router answered with a zero-length body.
    #[error("got empty body in response to {context}")]
    EmptyBody { context: &'static str },

    /// The router served its login page instead of data. The credentials
    /// were rejected even though the status code was 200.
    #[error(
        "got the router's login page as the {link} connections response \
         (want JSON), check your login credentials"
    )]
    AuthenticationPage { link: LinkType },

    /// The body was not the expected JSON device-list shape.
    #[error("cannot decode {link} connections response as JSON: {message}")]
    MalformedPayload {
        link: LinkType,
        message: String,
        body: String,
    },

    /// The reboot response was missing one or both completion markers.
    #[error("reboot response does not indicate a completed reboot: {body}")]
    IncompleteReboot { body: String },
}

impl Error {
    /// Returns `true` if this error means the router rejected the
    /// configured credentials.
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::AuthenticationPage { .. })
    }

    /// Returns `true` for failures below the HTTP layer (DNS, connect,
    /// timeout), where the router was never reached or never answered.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
