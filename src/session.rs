//! Per-connection context.
//!
//! A [`Session`] holds everything the client has learned so far (room, color, latest snapshot)
//! and is updated by exactly one [`Message`] at a time. It never reads the network itself,
//! which keeps the protocol rules testable without any I/O.

use tracing::{debug, info};

use crate::error::ProtocolError;
use crate::message::{room_message, Message};
use crate::state::{GameState, PlayerColor};
use crate::strategy::Strategy;

#[derive(Debug, Clone, Default)]
pub struct Session {
    room_id: Option<String>,
    color: Option<PlayerColor>,
    state: Option<GameState>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    pub fn color(&self) -> Option<PlayerColor> {
        self.color
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Applies `message` and returns what has to be sent back, if anything.
    ///
    /// Only [`Message::MoveRequest`] produces output. Later joins, welcomes and mementos
    /// overwrite what an earlier one set.
    ///
    /// # Errors
    /// [`ProtocolError::NotReady`] if a move is requested before the room, the color and a
    /// snapshot are all known.
    pub fn handle<S: Strategy + ?Sized>(
        &mut self,
        message: Message,
        strategy: &S,
    ) -> Result<Option<String>, ProtocolError> {
        match message {
            Message::Joined { room_id } => {
                info!("joined room {room_id}");
                self.room_id = Some(room_id);
            }
            Message::Welcome { color } => {
                info!("we have color {color}");
                self.color = Some(color);
            }
            Message::Memento(state) => {
                debug!("got memento {state:?}");
                self.state = Some(*state);
            }
            Message::MoveRequest => return self.answer_move_request(strategy).map(Some),
            Message::Unrecognized { class } => debug!("got data of class {class}"),
        }
        Ok(None)
    }

    fn answer_move_request<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
    ) -> Result<String, ProtocolError> {
        let room_id = self.room_id.as_deref().ok_or(ProtocolError::NotReady("the room"))?;
        let color = self.color.ok_or(ProtocolError::NotReady("our color"))?;
        let state = self
            .state
            .as_ref()
            .ok_or(ProtocolError::NotReady("the game state"))?;

        let mv = strategy.select_move(state, color);
        Ok(room_message(room_id, &mv))
    }
}

#[cfg(test)]
mod session_tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::message::Move;
    use crate::state::{Board, Player};
    use crate::strategy::CarrotHopper;

    /// Always advances by the position of the requesting player, to tell snapshots apart.
    struct EchoIndex;

    impl Strategy for EchoIndex {
        fn select_move(&self, state: &GameState, color: PlayerColor) -> Move {
            Move::Advance {
                distance: state.player(color).index,
            }
        }
    }

    fn state(red_index: usize, blue_index: usize) -> GameState {
        let player = |color, index| Player {
            display_name: String::new(),
            color,
            index,
            carrots: 0,
            salads: 0,
            cards: vec![],
        };
        GameState {
            red: player(PlayerColor::Red, red_index),
            blue: player(PlayerColor::Blue, blue_index),
            board: Board::default(),
            turn: None,
            current_player: None,
        }
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        let messages = [
            Message::Joined {
                room_id: "r".to_string(),
            },
            Message::Welcome {
                color: PlayerColor::Red,
            },
            Message::Memento(Box::new(state(1, 2))),
        ];
        for message in messages {
            assert_eq!(session.handle(message, &EchoIndex).unwrap(), None);
        }
        session
    }

    #[test]
    fn test_only_move_request_answers() {
        let mut session = ready_session();
        assert_eq!(
            session
                .handle(
                    Message::Unrecognized {
                        class: "unknownThing".to_string()
                    },
                    &EchoIndex
                )
                .unwrap(),
            None
        );
        assert_eq!(session.room_id(), Some("r"));

        let answer = session.handle(Message::MoveRequest, &EchoIndex).unwrap();
        assert_eq!(
            answer.as_deref(),
            Some("<room roomId=\"r\"><data class=\"move\"><advance order=\"0\" distance=\"1\" /></data></room>")
        );
    }

    #[test]
    fn test_latest_welcome_wins() {
        let mut session = ready_session();
        session
            .handle(
                Message::Welcome {
                    color: PlayerColor::Blue,
                },
                &EchoIndex,
            )
            .unwrap();
        assert_eq!(session.color(), Some(PlayerColor::Blue));

        let answer = session.handle(Message::MoveRequest, &EchoIndex).unwrap();
        assert!(answer.unwrap().contains("distance=\"2\""));
    }

    #[test]
    fn test_memento_replaces_snapshot() {
        let mut session = ready_session();
        session
            .handle(Message::Memento(Box::new(state(7, 8))), &EchoIndex)
            .unwrap();
        assert_eq!(session.state(), Some(&state(7, 8)));

        let answer = session.handle(Message::MoveRequest, &EchoIndex).unwrap();
        assert!(answer.unwrap().contains("distance=\"7\""));
    }

    #[test]
    fn test_request_before_ready_is_fatal() {
        let mut session = Session::new();
        let err = session
            .handle(Message::MoveRequest, &CarrotHopper)
            .unwrap_err();
        assert!(matches!(err, ProtocolError::NotReady("the room")));

        session
            .handle(
                Message::Joined {
                    room_id: "r".to_string(),
                },
                &CarrotHopper,
            )
            .unwrap();
        let err = session
            .handle(Message::MoveRequest, &CarrotHopper)
            .unwrap_err();
        assert!(matches!(err, ProtocolError::NotReady("our color")));
    }
}
