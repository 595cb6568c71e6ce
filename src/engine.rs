//! The blocking read-dispatch-react loop.
//!
//! [`ProtocolEngine`] connects a [`MessageDecoder`] to a [`Session`]: each decoded message is
//! applied to the session and, when it was a move request, the answer is written and flushed
//! before the next token is read. The loop has no exit of its own, it only stops on an error
//! (the peer closing the connection being one of them), which is then handed back to the caller.

use std::io::{BufRead, Write};

use tracing::{info, instrument};

use crate::decoder::MessageDecoder;
use crate::error::ProtocolError;
use crate::session::Session;
use crate::strategy::{CarrotHopper, Strategy};

pub struct ProtocolEngine<R, W, S> {
    decoder: MessageDecoder<R>,
    output: W,
    strategy: S,
    session: Session,
}

impl<R: BufRead, W: Write, S: Strategy> ProtocolEngine<R, W, S> {
    pub fn new(input: R, output: W, strategy: S) -> ProtocolEngine<R, W, S> {
        ProtocolEngine {
            decoder: MessageDecoder::new(input),
            output,
            strategy,
            session: Session::new(),
        }
    }

    /// What has been learned from the server so far.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads and handles one message.
    pub fn step(&mut self) -> Result<(), ProtocolError> {
        let message = self.decoder.next_message()?;
        if let Some(answer) = self.session.handle(message, &self.strategy)? {
            self.output.write_all(answer.as_bytes())?;
            self.output.flush()?;
            info!("sent {answer}");
        }
        Ok(())
    }

    /// Handles messages until the stream ends or breaks, and returns why it stopped.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> ProtocolError {
        loop {
            if let Err(e) = self.step() {
                return e;
            }
        }
    }
}

/// Plays a whole session with the default [`CarrotHopper`] strategy.
pub fn process<R: BufRead, W: Write>(input: R, output: W) -> ProtocolError {
    ProtocolEngine::new(input, output, CarrotHopper).run()
}
