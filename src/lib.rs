//! # Hase Client
//!
//! A Software Challenge client for the 2018 board game "Hase und Igel".
//!
//! It provides:
//! - A streaming decoder for the server's XML protocol (`MessageDecoder`)
//! - The game state delivered by the server (`GameState` and friends)
//! - Move selection via the `Strategy` trait, with the greedy `CarrotHopper`
//! - A blocking protocol loop answering every move request (`ProtocolEngine`)
//!
//! The server streams one never-ending `<protocol>` document. The client reads it token by
//! token, keeps the latest state snapshot, and answers each move request with exactly one move
//! wrapped in the room envelope.
//!
//! # Documentation Overview
//!
//! - For the loop itself, see the [`engine`] module.
//! - For what is learned from the server and when a move is sent, see [`Session`](crate::session::Session).
//! - For the decision rule, see [`CarrotHopper`](crate::strategy::CarrotHopper).
//! - For connection settings, see [`Configuration`](crate::configuration::Configuration).
//!
//! # Usage Example
//!
//! ```no_run
//! use hase_client::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Configuration::new().with_host("localhost").with_port(13050);
//!     let connection = connect(&config)?;
//!
//!     let mut engine = ProtocolEngine::new(connection.reader, connection.writer, CarrotHopper);
//!     let reason = engine.run();
//!     println!("game over: {reason}");
//!     Ok(())
//! }
//! ```
//!
//! # Protocol
//!
//! - Client -> Server : `<protocol><join gameType="swc_2018_hase_und_igel"/>` once, then one
//!   `<room roomId=".."><data class="move">..</data></room>` per move request
//! - Server -> Client : `<joined>`, then `<data>` messages of class `welcomeMessage`,
//!   `memento` and `sc.framework.plugins.protocol.MoveRequest` (others are ignored)

pub mod cli;
pub mod configuration;
pub mod connection;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod logger;
pub mod message;
pub mod session;
pub mod state;
pub mod strategy;

/// Commonly used types and traits for quick access.
///
/// ```rust
/// use hase_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::connection::connect;
    pub use crate::engine::{process, ProtocolEngine};
    pub use crate::error::ProtocolError;
    pub use crate::message::{Message, Move};
    pub use crate::session::Session;
    pub use crate::state::{GameState, PlayerColor};
    pub use crate::strategy::{CarrotHopper, Strategy};
}
