//! Pull-based decoding of the server's XML stream into [`Message`]s.
//!
//! The server never closes its `<protocol>` root while a game runs, so the input cannot be
//! parsed as a document. Instead [`MessageDecoder`] walks the token stream one event at a time,
//! descends into every element it does not know (messages usually arrive wrapped in
//! `<room roomId="...">`), and only materializes the three message shapes it recognizes.
//!
//! Recognized structures are decoded strictly: a missing attribute, an unparsable number or an
//! early end of input is an error, there is no partial message.

use std::io::BufRead;
use std::num::ParseIntError;
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{trace, warn};

use crate::error::ProtocolError;
use crate::message::{Message, MEMENTO_CLASS, MOVE_REQUEST_CLASS, WELCOME_CLASS};
use crate::state::{Board, Card, Field, FieldType, GameState, Player, PlayerColor, BOARD_SIZE};

/// Turns a byte stream into a sequence of typed [`Message`]s.
pub struct MessageDecoder<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    skip_buf: Vec<u8>,
}

impl<R: BufRead> MessageDecoder<R> {
    pub fn new(input: R) -> MessageDecoder<R> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);
        MessageDecoder {
            reader,
            buf: Vec::new(),
            skip_buf: Vec::new(),
        }
    }

    /// Blocks until the next recognized message is complete.
    ///
    /// # Errors
    /// [`ProtocolError::ConnectionClosed`] once the input ends (or `</protocol>` is read),
    /// any other variant if the stream or a recognized message is malformed.
    pub fn next_message(&mut self) -> Result<Message, ProtocolError> {
        loop {
            let (start, is_empty) = match self.next_event()? {
                Event::Start(start) => (start, false),
                Event::Empty(start) => (start, true),
                Event::End(end) if end.local_name().as_ref() == b"protocol" => {
                    return Err(ProtocolError::ConnectionClosed)
                }
                Event::Eof => return Err(ProtocolError::ConnectionClosed),
                _ => continue,
            };

            match start.local_name().as_ref() {
                b"data" => return self.read_data(&start, is_empty),
                b"joined" => match attribute(&start, "roomId")? {
                    Some(room_id) => return Ok(Message::Joined { room_id }),
                    None => warn!("<joined> without roomId, keeping the previous room"),
                },
                // descend: <protocol>, <room>, ...
                _ => {}
            }
        }
    }

    fn next_event(&mut self) -> Result<Event<'static>, ProtocolError> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf)?;
        Ok(event.into_owned())
    }

    /// Returns the next child element of the currently open element, or `None` once it closes.
    fn next_child(
        &mut self,
        parent: &'static str,
    ) -> Result<Option<(BytesStart<'static>, bool)>, ProtocolError> {
        loop {
            match self.next_event()? {
                Event::Start(start) => return Ok(Some((start, false))),
                Event::Empty(start) => return Ok(Some((start, true))),
                Event::End(_) => return Ok(None),
                Event::Eof => return Err(ProtocolError::UnexpectedEof(parent)),
                _ => {}
            }
        }
    }

    /// Consumes everything up to and including the end tag matching `start`.
    fn skip(&mut self, start: &BytesStart<'_>) -> Result<(), ProtocolError> {
        trace!(
            "skipping <{}>",
            String::from_utf8_lossy(start.local_name().as_ref())
        );
        self.skip_buf.clear();
        self.reader.read_to_end_into(start.name(), &mut self.skip_buf)?;
        Ok(())
    }

    fn read_data(
        &mut self,
        start: &BytesStart<'_>,
        is_empty: bool,
    ) -> Result<Message, ProtocolError> {
        let class = attribute(start, "class")?.unwrap_or_default();
        let message = match class.as_str() {
            MEMENTO_CLASS => {
                if is_empty {
                    return Err(ProtocolError::MissingElement {
                        parent: "data",
                        child: "state",
                    });
                }
                // read_memento consumes the closing </data> itself
                return Ok(Message::Memento(Box::new(self.read_memento()?)));
            }
            WELCOME_CLASS => Message::Welcome {
                color: required(start, "data", "color")?.parse()?,
            },
            MOVE_REQUEST_CLASS => Message::MoveRequest,
            _ => Message::Unrecognized { class },
        };
        if !is_empty {
            self.skip(start)?;
        }
        Ok(message)
    }

    fn read_memento(&mut self) -> Result<GameState, ProtocolError> {
        let mut state = None;
        while let Some((child, is_empty)) = self.next_child("data")? {
            if child.local_name().as_ref() == b"state" {
                state = Some(self.read_state(&child, is_empty)?);
            } else if !is_empty {
                self.skip(&child)?;
            }
        }
        state.ok_or(ProtocolError::MissingElement {
            parent: "data",
            child: "state",
        })
    }

    fn read_state(
        &mut self,
        start: &BytesStart<'_>,
        is_empty: bool,
    ) -> Result<GameState, ProtocolError> {
        let turn = optional_number(start, "turn")?;
        let current_player = attribute(start, "currentPlayer")?
            .map(|color| color.parse())
            .transpose()?;

        let mut red = None;
        let mut blue = None;
        let mut board = None;
        if !is_empty {
            while let Some((child, child_empty)) = self.next_child("state")? {
                match child.local_name().as_ref() {
                    b"red" => red = Some(self.read_player(&child, child_empty, PlayerColor::Red)?),
                    b"blue" => {
                        blue = Some(self.read_player(&child, child_empty, PlayerColor::Blue)?)
                    }
                    b"board" => board = Some(self.read_board(child_empty)?),
                    _ if !child_empty => self.skip(&child)?,
                    _ => {}
                }
            }
        }

        let missing = |child| ProtocolError::MissingElement {
            parent: "state",
            child,
        };
        Ok(GameState {
            red: red.ok_or_else(|| missing("red"))?,
            blue: blue.ok_or_else(|| missing("blue"))?,
            board: board.ok_or_else(|| missing("board"))?,
            turn,
            current_player,
        })
    }

    fn read_player(
        &mut self,
        start: &BytesStart<'_>,
        is_empty: bool,
        slot: PlayerColor,
    ) -> Result<Player, ProtocolError> {
        let element = match slot {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
        };
        let color = match attribute(start, "color")? {
            Some(color) => color.parse()?,
            None => slot,
        };
        let index = number(start, element, "index")?;
        if index >= BOARD_SIZE {
            return Err(ProtocolError::OffBoard { element, index });
        }
        let mut player = Player {
            display_name: attribute(start, "displayName")?.unwrap_or_default(),
            color,
            index,
            carrots: number(start, element, "carrots")?,
            salads: number(start, element, "salads")?,
            cards: Vec::new(),
        };

        if !is_empty {
            while let Some((child, child_empty)) = self.next_child(element)? {
                if child.local_name().as_ref() == b"cards" {
                    if let Some(card_type) = attribute(&child, "type")? {
                        player.cards.push(Card { card_type });
                    }
                    if !child_empty {
                        self.read_cards(&mut player.cards)?;
                    }
                } else if !child_empty {
                    self.skip(&child)?;
                }
            }
        }
        Ok(player)
    }

    /// `<cards><type>EAT_SALAD</type>...</cards>`, the opening tag already consumed.
    fn read_cards(&mut self, cards: &mut Vec<Card>) -> Result<(), ProtocolError> {
        while let Some((child, is_empty)) = self.next_child("cards")? {
            if is_empty {
                continue;
            }
            if child.local_name().as_ref() == b"type" {
                let card_type = self.read_text("type")?;
                cards.push(Card { card_type });
            } else {
                self.skip(&child)?;
            }
        }
        Ok(())
    }

    fn read_text(&mut self, element: &'static str) -> Result<String, ProtocolError> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                Event::Text(t) => text.push_str(&t.unescape()?),
                Event::Start(start) => self.skip(&start)?,
                Event::End(_) => return Ok(text),
                Event::Eof => return Err(ProtocolError::UnexpectedEof(element)),
                _ => {}
            }
        }
    }

    fn read_board(&mut self, is_empty: bool) -> Result<Board, ProtocolError> {
        let mut board = Board::default();
        if is_empty {
            return Ok(board);
        }
        while let Some((child, child_empty)) = self.next_child("board")? {
            let element = match child.local_name().as_ref() {
                b"fields" => Some("fields"),
                b"field" => Some("field"),
                _ => None,
            };
            if let Some(element) = element {
                board.fields.push(Field {
                    field_type: FieldType::from_wire(&required(&child, element, "type")?),
                    index: number(&child, element, "index")?,
                });
            }
            if !child_empty {
                self.skip(&child)?;
            }
        }
        Ok(board)
    }
}

/// Looks an attribute up by local name, ignoring any namespace prefix.
fn attribute(start: &BytesStart<'_>, name: &str) -> Result<Option<String>, ProtocolError> {
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn required(
    start: &BytesStart<'_>,
    element: &'static str,
    name: &'static str,
) -> Result<String, ProtocolError> {
    attribute(start, name)?.ok_or(ProtocolError::MissingAttribute {
        element,
        attribute: name,
    })
}

fn number<T: FromStr<Err = ParseIntError>>(
    start: &BytesStart<'_>,
    element: &'static str,
    name: &'static str,
) -> Result<T, ProtocolError> {
    let value = required(start, element, name)?;
    parse_number(name, value)
}

fn optional_number<T: FromStr<Err = ParseIntError>>(
    start: &BytesStart<'_>,
    name: &'static str,
) -> Result<Option<T>, ProtocolError> {
    attribute(start, name)?
        .map(|value| parse_number(name, value))
        .transpose()
}

fn parse_number<T: FromStr<Err = ParseIntError>>(
    attribute: &'static str,
    value: String,
) -> Result<T, ProtocolError> {
    match value.trim().parse() {
        Ok(n) => Ok(n),
        Err(source) => Err(ProtocolError::InvalidNumber {
            attribute,
            value,
            source,
        }),
    }
}
