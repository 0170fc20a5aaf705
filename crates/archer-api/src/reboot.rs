// Reboot action
//
// The reboot page answers a single synchronous GET with an HTML fragment
// that must contain both progress markers; the firmware blocks until
// reboot processing has been accepted before responding.

use tracing::debug;

use crate::client::ArcherClient;
use crate::error::Error;

pub(crate) const REBOOT_STARTED_MARKER: &str = "Rebooting...";
pub(crate) const REBOOT_COMPLETED_MARKER: &str = "Completed!";

impl ArcherClient {
    /// Reboot the router.
    ///
    /// `GET userRpm/SysRebootRpm.htm?Reboot=Reboot`
    ///
    /// Returns `Ok(())` only if the router confirms the reboot completed;
    /// a response carrying just one of the two markers is treated as a
    /// failure (mid-reboot or unrelated content).
    pub async fn reboot(&self) -> Result<(), Error> {
        let mut req = self.build_request("GET", "userRpm/SysRebootRpm.htm", &[])?;
        req.url_mut()
            .query_pairs_mut()
            .append_pair("Reboot", "Reboot");

        let resp = self.dispatch(req).await?;
        let body = resp.bytes().await.map_err(Error::Transport)?;
        decode_reboot_confirmation(&body)?;

        debug!(
            body = %String::from_utf8_lossy(&body),
            "reboot completed successfully"
        );
        Ok(())
    }
}

/// Confirm a reboot response: both literal markers must be present.
pub(crate) fn decode_reboot_confirmation(body: &[u8]) -> Result<(), Error> {
    if body.is_empty() {
        return Err(Error::EmptyBody { context: "reboot" });
    }

    let text = String::from_utf8_lossy(body);
    if !text.contains(REBOOT_STARTED_MARKER) || !text.contains(REBOOT_COMPLETED_MARKER) {
        return Err(Error::IncompleteReboot {
            body: text.into_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const VALID_REBOOT_BODY: &str = r#"
    <TR>
        <TD class="h2" id="t_restart">Rebooting...</TD>
    </TR>
    <TR>
        <TD class="h2" id="t_complete" style="display:none">Completed!</TD>
    </TR>
    "#;

    #[test]
    fn both_markers_confirm_the_reboot() {
        assert!(decode_reboot_confirmation(VALID_REBOOT_BODY.as_bytes()).is_ok());
    }

    #[test]
    fn empty_body_is_an_error() {
        let err = decode_reboot_confirmation(b"").unwrap_err();
        assert!(matches!(err, Error::EmptyBody { .. }), "{err}");
    }

    #[test]
    fn started_marker_alone_is_incomplete() {
        let err = decode_reboot_confirmation(b"Rebooting...").unwrap_err();
        assert!(matches!(err, Error::IncompleteReboot { .. }), "{err}");
    }

    #[test]
    fn completed_marker_alone_is_incomplete() {
        let err = decode_reboot_confirmation(b"Completed!").unwrap_err();
        assert!(matches!(err, Error::IncompleteReboot { .. }), "{err}");
    }

    #[test]
    fn unrelated_content_is_incomplete() {
        let err =
            decode_reboot_confirmation(b"<title>TP-Link Archer C9</title>").unwrap_err();
        assert!(matches!(err, Error::IncompleteReboot { .. }), "{err}");
    }
}
