//! Passive value types describing one snapshot of a "Hase und Igel" match.
//!
//! Everything in here is filled in by the [`decoder`](crate::decoder) and read by the
//! [`strategy`](crate::strategy); nothing in this module has behavior of its own beyond
//! lookups and parsing of enumerated names.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::ProtocolError;

/// Number of fields on the track, goal included.
pub const BOARD_SIZE: usize = 65;

/// Terrain kind of a board field.
///
/// Only [`FieldType::Carrot`] and [`FieldType::Hedgehog`] matter to the move decision, the
/// remaining kinds are kept so that diagnostics show what the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Start,
    Carrot,
    Hare,
    Hedgehog,
    Salad,
    Position1,
    Position2,
    Goal,
    Invalid,
    /// Any terrain name this client does not know about.
    Other(String),
}

impl FieldType {
    /// Maps a wire name to a terrain kind. Never fails: unknown names become [`FieldType::Other`].
    pub fn from_wire(name: &str) -> FieldType {
        match name {
            "START" => FieldType::Start,
            "CARROT" => FieldType::Carrot,
            "HARE" => FieldType::Hare,
            "HEDGEHOG" => FieldType::Hedgehog,
            "SALAD" => FieldType::Salad,
            "POSITION_1" => FieldType::Position1,
            "POSITION_2" => FieldType::Position2,
            "GOAL" => FieldType::Goal,
            "INVALID" => FieldType::Invalid,
            other => FieldType::Other(other.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            FieldType::Start => "START",
            FieldType::Carrot => "CARROT",
            FieldType::Hare => "HARE",
            FieldType::Hedgehog => "HEDGEHOG",
            FieldType::Salad => "SALAD",
            FieldType::Position1 => "POSITION_1",
            FieldType::Position2 => "POSITION_2",
            FieldType::Goal => "GOAL",
            FieldType::Invalid => "INVALID",
            FieldType::Other(name) => name,
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// One cell of the track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub field_type: FieldType,
    pub index: usize,
}

/// An action card held by a player. The tag is kept as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub card_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    pub fn opponent(self) -> PlayerColor {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }
}

impl FromStr for PlayerColor {
    type Err = ProtocolError;

    /// Case-insensitive: the welcome message says `red`, player elements say `RED`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("red") {
            Ok(PlayerColor::Red)
        } else if s.eq_ignore_ascii_case("blue") {
            Ok(PlayerColor::Blue)
        } else {
            Err(ProtocolError::UnknownColor(s.to_string()))
        }
    }
}

impl Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "red"),
            PlayerColor::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub display_name: String,
    pub color: PlayerColor,
    /// Current position on the track, always below [`BOARD_SIZE`] once decoded.
    pub index: usize,
    pub carrots: u32,
    pub salads: u32,
    pub cards: Vec<Card>,
}

/// The track, in the order the server sent it.
///
/// `fields[i].index == i` is expected but not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub fields: Vec<Field>,
}

impl Board {
    /// Number of fields received; only diagnostics and tests look at it.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True before any field was received. Not used by the move decision.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Full authoritative snapshot ("memento") of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub red: Player,
    pub blue: Player,
    pub board: Board,
    /// Turn counter as sent by the server; decoded and logged only.
    pub turn: Option<u32>,
    /// Whose turn the server says it is; decoded and logged only.
    pub current_player: Option<PlayerColor>,
}

impl GameState {
    pub fn player(&self, color: PlayerColor) -> &Player {
        match color {
            PlayerColor::Red => &self.red,
            PlayerColor::Blue => &self.blue,
        }
    }
}
