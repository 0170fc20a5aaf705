// Transport configuration for building reqwest::Client instances.
//
// The client accepts a pre-built `reqwest::Client` for callers that want
// their own deadline or proxy policy; everyone else gets one built from
// this config.

use std::time::Duration;

use crate::error::Error;

/// TLS verification mode.
#[derive(Debug, Clone, Copy, Default)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Accept any certificate. Consumer routers almost always serve a
    /// self-signed certificate on https.
    DangerAcceptInvalid,
}

/// Transport settings for the default HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("archerctl/", env!("CARGO_PKG_VERSION")));

        if let TlsMode::DangerAcceptInvalid = self.tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(Error::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_a_client() {
        let config = TransportConfig::default();
        assert!(config.build_client().is_ok());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn accept_invalid_certs_builds_a_client() {
        let config = TransportConfig {
            tls: TlsMode::DangerAcceptInvalid,
            timeout: Duration::from_secs(5),
        };
        assert!(config.build_client().is_ok());
    }
}
