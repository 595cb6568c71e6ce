use std::io::{BufReader, Write};
use std::net::TcpStream;

use anyhow::Context;
use tracing::{info, instrument};

use crate::configuration::Configuration;

/// Both halves of the duplex socket to the game server, preamble already sent.
#[derive(Debug)]
pub struct Connection {
    pub reader: BufReader<TcpStream>,
    pub writer: TcpStream,
}

/// Connects to the server and asks to join a game.
///
/// # Errors
/// If the server is unreachable or the preamble could not be written.
#[instrument(skip_all, fields(address = %config.address()))]
pub fn connect(config: &Configuration) -> anyhow::Result<Connection> {
    let address = config.address();
    let mut writer = TcpStream::connect(&address)
        .with_context(|| format!("could not connect to server at {address}"))?;
    info!("connected to server");

    writer
        .write_all(config.join_preamble().as_bytes())
        .context("could not send join request")?;
    writer.flush().context("could not send join request")?;

    let reader = BufReader::new(
        writer
            .try_clone()
            .context("could not split connection into reader and writer")?,
    );
    Ok(Connection { reader, writer })
}
