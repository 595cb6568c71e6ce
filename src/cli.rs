//! Command-line interface of the client.

use clap::{ArgAction, Parser};

use crate::configuration::Configuration;

/// Software Challenge client
///
/// Connects to a game server and plays "Hase und Igel" until the server closes the connection.
#[derive(Parser, Debug)]
#[command(name = "hase-client", version, about, disable_help_flag = true)]
pub struct Cli {
    /// Hostname or IP address of the game server
    #[arg(short = 'h', long, default_value = "localhost")]
    pub host: String,

    /// Port of the game server
    #[arg(short, long, default_value_t = 13050)]
    pub port: u16,

    /// Reservation id for the game to join (if empty, a new game will be joined)
    #[arg(short, long, default_value = "")]
    pub reservation: String,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    pub fn configuration(&self) -> Configuration {
        Configuration::new()
            .with_host(self.host.as_str())
            .with_port(self.port)
            .with_reservation(self.reservation.as_str())
    }
}
