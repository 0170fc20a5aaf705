//! Connected-client listing handlers.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use archer_api::{ArcherClient, Connection};

use crate::cli::ListCommand;
use crate::error::CliError;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ConnectionRow {
    #[tabled(rename = "IP_ADDRESS")]
    ip_address: String,
    #[tabled(rename = "MAC_ADDRESS")]
    mac_address: String,
    #[tabled(rename = "HOST_NAME")]
    host_name: String,
}

impl From<&Connection> for ConnectionRow {
    fn from(c: &Connection) -> Self {
        Self {
            ip_address: c.ip_address.clone(),
            mac_address: c.mac_address.clone(),
            host_name: c.host_name.clone(),
        }
    }
}

pub async fn handle(client: &ArcherClient, cmd: ListCommand) -> Result<(), CliError> {
    let (connections, label) = match cmd {
        ListCommand::Wired => (client.wired_connections().await?, "wired"),
        ListCommand::Wireless => (client.wireless_connections().await?, "wireless"),
    };

    // An empty grid is a successful result, not an error.
    if connections.is_empty() {
        println!("No {label} connections found");
        return Ok(());
    }

    let rows: Vec<ConnectionRow> = connections.iter().map(ConnectionRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::blank());
    println!("{table}");
    Ok(())
}
