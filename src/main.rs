use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use hase_client::cli::Cli;
use hase_client::connection::connect;
use hase_client::engine::ProtocolEngine;
use hase_client::error::ProtocolError;
use hase_client::strategy::CarrotHopper;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    hase_client::logger::init_logger()?;

    let connection = connect(&cli.configuration())?;

    let mut engine = ProtocolEngine::new(connection.reader, connection.writer, CarrotHopper);
    match engine.run() {
        ProtocolError::ConnectionClosed => {
            info!("server closed the connection");
            Ok(ExitCode::SUCCESS)
        }
        reason => {
            error!("session ended: {reason}");
            Ok(ExitCode::FAILURE)
        }
    }
}
