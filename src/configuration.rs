//! Where to connect and which game to join.
//!
//! A [`Configuration`] is created with [`Configuration::new()`] and adjusted with the chained
//! `with_*` setters. The binary fills it from the command line.

use quick_xml::escape::escape;

/// Game type requested when no reservation code is given.
pub const GAME_TYPE: &str = "swc_2018_hase_und_igel";

/// Configuration of the connection to the game server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) reservation: Option<String>,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - The server is expected on `localhost:13050`.
    /// - No reservation: a fresh game of [`GAME_TYPE`] is requested.
    pub fn new() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 13050,
            reservation: None,
        }
    }

    /// Hostname or IP address of the game server.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Join a prepared game instead of a fresh one. An empty code means no reservation.
    pub fn with_reservation(mut self, code: impl Into<String>) -> Self {
        let code = code.into();
        self.reservation = if code.is_empty() { None } else { Some(code) };
        self
    }

    pub fn reservation(&self) -> Option<&str> {
        self.reservation.as_deref()
    }

    /// `host:port`, as accepted by [`std::net::TcpStream::connect`].
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The first bytes sent to the server: open the protocol and ask for a game.
    pub fn join_preamble(&self) -> String {
        match &self.reservation {
            None => format!("<protocol><join gameType=\"{GAME_TYPE}\"/>"),
            Some(code) => format!(
                "<protocol><joinPrepared reservationCode=\"{}\"/>",
                escape(code.as_str())
            ),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod configuration_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::new();
        assert_eq!(config.address(), "localhost:13050");
        assert_eq!(config.reservation(), None);
        assert_eq!(
            config.join_preamble(),
            "<protocol><join gameType=\"swc_2018_hase_und_igel\"/>"
        );
    }

    #[test]
    fn test_reservation() {
        let config = Configuration::new()
            .with_host("10.0.0.2")
            .with_port(13055)
            .with_reservation("f00-b4r");
        assert_eq!(config.address(), "10.0.0.2:13055");
        assert_eq!(
            config.join_preamble(),
            "<protocol><joinPrepared reservationCode=\"f00-b4r\"/>"
        );
    }

    #[test]
    fn test_empty_reservation_joins_fresh_game() {
        let config = Configuration::new().with_reservation("");
        assert_eq!(config, Configuration::new());
    }
}
