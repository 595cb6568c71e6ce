use std::num::ParseIntError;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Everything that can stop the protocol loop.
///
/// There is no recoverable variant: any of these ends the session.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed stream: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("could not send move: {0}")]
    Io(#[from] std::io::Error),

    #[error("<{element}> has no '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("<{parent}> has no <{child}> element")]
    MissingElement {
        parent: &'static str,
        child: &'static str,
    },

    #[error("attribute '{attribute}' is not a number: '{value}'")]
    InvalidNumber {
        attribute: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("<{element}> stands on field {index}, outside the board")]
    OffBoard { element: &'static str, index: usize },

    #[error("unknown player color '{0}'")]
    UnknownColor(String),

    #[error("stream ended inside <{0}>")]
    UnexpectedEof(&'static str),

    #[error("move requested before {0} is known")]
    NotReady(&'static str),

    #[error("connection closed by server")]
    ConnectionClosed,
}
