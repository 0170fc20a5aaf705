//! Command dispatch: bridges CLI args -> client operations -> output.

pub mod list;
pub mod reboot;
pub mod util;

use archer_api::ArcherClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a router-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &ArcherClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Reboot => reboot::handle(client, global).await,
        Command::List(cmd) => list::handle(client, cmd).await,
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
