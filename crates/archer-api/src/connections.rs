// Connected-device queries
//
// The wired and wireless client grids share one wire format and one
// decoder; `LinkType` picks the endpoint and labels diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::ArcherClient;
use crate::error::Error;

/// Title substring the firmware serves (with a 200 status) when the
/// credentials are rejected and it falls back to its login page.
///
/// Known heuristic: this is the exact text of the C9 v1 firmware and a
/// firmware update that changes the page title would silently break
/// detection. Matched case-insensitively.
pub(crate) const LOGIN_PAGE_MARKER: &str = "<title>tp-link archer c9";

/// Which client grid to query. Also names the link in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Wired,
    Wireless,
}

impl LinkType {
    pub(crate) fn endpoint(self) -> &'static str {
        match self {
            Self::Wired => "data/map_access_wire_client_grid.json",
            Self::Wireless => "data/map_access_wireless_client_grid.json",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wired => f.write_str("wired"),
            Self::Wireless => f.write_str("wireless"),
        }
    }
}

/// One device attached to the router, by wire or wireless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(rename = "mac_addr")]
    pub mac_address: String,
    #[serde(rename = "ip_addr")]
    pub ip_address: String,
    #[serde(rename = "name")]
    pub host_name: String,
}

/// Wire shape of a client-grid response. The firmware also sends
/// `success`/`timeout` fields; they carry no extra signal, so only
/// `data` is modeled and a missing key decodes to an empty list.
#[derive(Debug, Deserialize)]
struct ConnectionsPayload {
    #[serde(default)]
    data: Vec<Connection>,
}

impl ArcherClient {
    /// List the devices currently attached to the router by wire.
    ///
    /// `POST data/map_access_wire_client_grid.json`
    pub async fn wired_connections(&self) -> Result<Vec<Connection>, Error> {
        self.connections(LinkType::Wired).await
    }

    /// List the devices currently attached to the router wirelessly.
    ///
    /// `POST data/map_access_wireless_client_grid.json`
    pub async fn wireless_connections(&self) -> Result<Vec<Connection>, Error> {
        self.connections(LinkType::Wireless).await
    }

    async fn connections(&self, link: LinkType) -> Result<Vec<Connection>, Error> {
        let req = self.build_request("POST", link.endpoint(), &[])?;
        debug!(%link, "querying connected clients");

        let resp = self.dispatch(req).await?;
        let body = resp.bytes().await.map_err(Error::Transport)?;
        decode_connections(&body, link)
    }
}

/// Decode a client-grid response body, preserving router-reported order.
///
/// Runs the login-page check before JSON parsing: the firmware signals
/// rejected credentials with a 200 status and an HTML login page, so the
/// status classifier cannot catch it.
pub(crate) fn decode_connections(body: &[u8], link: LinkType) -> Result<Vec<Connection>, Error> {
    if body.is_empty() {
        return Err(Error::EmptyBody {
            context: match link {
                LinkType::Wired => "wired connections query",
                LinkType::Wireless => "wireless connections query",
            },
        });
    }

    let text = String::from_utf8_lossy(body);
    if text.to_lowercase().contains(LOGIN_PAGE_MARKER) {
        return Err(Error::AuthenticationPage { link });
    }

    let payload: ConnectionsPayload =
        serde_json::from_slice(body).map_err(|e| Error::MalformedPayload {
            link,
            message: e.to_string(),
            body: text.into_owned(),
        })?;

    Ok(payload.data)
}
