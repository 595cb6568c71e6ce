//! Typed protocol messages.
//!
//! Inbound traffic is reduced to [`Message`] once, at the decoder boundary, so that the rest of
//! the client matches on a closed set of variants instead of comparing `class` strings.
//! Outbound traffic is always a single [`Move`] wrapped in a room envelope, see [`room_message`].

use std::fmt::Display;

use quick_xml::escape::escape;

use crate::state::{GameState, PlayerColor};

/// `class` discriminator of a full state snapshot.
pub const MEMENTO_CLASS: &str = "memento";
/// `class` discriminator of the color assignment.
pub const WELCOME_CLASS: &str = "welcomeMessage";
/// `class` discriminator of a move request.
pub const MOVE_REQUEST_CLASS: &str = "sc.framework.plugins.protocol.MoveRequest";

/// One recognized event read from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// `<joined roomId="..."/>`
    Joined { room_id: String },
    /// `<data class="welcomeMessage" color="..."/>`
    Welcome { color: PlayerColor },
    /// `<data class="memento">...</data>`
    Memento(Box<GameState>),
    /// `<data class="sc.framework.plugins.protocol.MoveRequest"/>`
    MoveRequest,
    /// Any other `<data class="...">`.
    Unrecognized { class: String },
}

/// The action sent in answer to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Move forward `distance` fields.
    Advance { distance: usize },
    /// Retreat to the previous hedgehog field.
    FallBack,
}

impl Move {
    /// Both actions are the only one sent in their turn, so the order is always 0.
    pub const ORDER: u32 = 0;
}

impl Display for Move {
    /// Renders the action element as it appears inside `<data class="move">`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Advance { distance } => write!(
                f,
                "<advance order=\"{}\" distance=\"{distance}\" />",
                Move::ORDER
            ),
            Move::FallBack => write!(f, "<fallBack order=\"{}\" />", Move::ORDER),
        }
    }
}

/// Wraps `mv` in the room envelope the server expects.
pub fn room_message(room_id: &str, mv: &Move) -> String {
    format!(
        "<room roomId=\"{}\"><data class=\"move\">{mv}</data></room>",
        escape(room_id)
    )
}

#[cfg(test)]
mod message_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_advance_envelope() {
        let msg = room_message("abc123", &Move::Advance { distance: 4 });
        assert_eq!(
            msg,
            "<room roomId=\"abc123\"><data class=\"move\"><advance order=\"0\" distance=\"4\" /></data></room>"
        );
    }

    #[test]
    fn test_fall_back_envelope() {
        let msg = room_message("abc123", &Move::FallBack);
        assert_eq!(
            msg,
            "<room roomId=\"abc123\"><data class=\"move\"><fallBack order=\"0\" /></data></room>"
        );
    }

    #[test]
    fn test_room_id_is_escaped() {
        let msg = room_message("a\"b", &Move::FallBack);
        assert!(msg.starts_with("<room roomId=\"a&quot;b\">"));
    }
}
