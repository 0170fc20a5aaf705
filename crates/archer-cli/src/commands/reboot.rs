//! Reboot command handler.

use archer_api::ArcherClient;

use crate::cli::GlobalOpts;
use crate::error::CliError;

use super::util;

pub async fn handle(client: &ArcherClient, global: &GlobalOpts) -> Result<(), CliError> {
    let prompt = format!(
        "Reboot the router at {}? Connectivity drops until it comes back up.",
        client.base_url()
    );
    if !util::confirm(&prompt, global.yes)? {
        return Ok(());
    }

    client.reboot().await?;
    eprintln!("Router rebooted");
    Ok(())
}
