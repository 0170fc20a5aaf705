// archer-api: Async Rust client for the TP-Link Archer C9 v1 web admin interface

pub mod client;
pub mod connections;
pub mod error;
pub mod reboot;
pub mod transport;

pub use client::ArcherClient;
pub use connections::{Connection, LinkType};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
