//! Argument definitions for the `archerctl` binary.

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "archerctl",
    version,
    about = "Minimal admin CLI for a TP-Link Archer C9 v1 wifi router",
    long_about = "archerctl provides a very minimal admin interface to a TP-Link Archer C9 v1 \
                  home wifi router: it can list the currently connected wired and wireless \
                  clients and reboot the router."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Router URL
    #[arg(
        long,
        global = true,
        env = "ARCHER_URL",
        default_value = "http://192.168.168.1"
    )]
    pub url: String,

    /// Router admin user name
    #[arg(
        short = 'U',
        long,
        global = true,
        env = "ARCHER_USER",
        default_value = "admin"
    )]
    pub user: String,

    /// Router admin password
    #[arg(
        short = 'P',
        long,
        global = true,
        env = "ARCHER_PASSWORD",
        default_value = "admin",
        hide_env_values = true
    )]
    pub password: String,

    /// Accept the router's self-signed TLS certificate
    #[arg(short = 'k', long, global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Skip confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reboot the router
    Reboot,

    /// List clients currently connected to the router
    #[command(subcommand)]
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// Currently connected wired clients
    Wired,

    /// Currently connected wireless clients
    Wireless,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
