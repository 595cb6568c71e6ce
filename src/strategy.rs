//! Move selection.
//!
//! A [`Strategy`] turns the last known [`GameState`] into exactly one [`Move`]. The only
//! strategy shipped is [`CarrotHopper`], a single-step greedy rule: hop to the next free
//! carrot field if it can be paid for, otherwise fall back to the previous hedgehog field.

use tracing::{info, trace};

use crate::message::Move;
use crate::state::{Board, FieldType, GameState, Player, PlayerColor};

/// Fields at or beyond this index are never targeted by the carrot scan.
pub const SCAN_LIMIT: usize = 64;

/// What a client needs to answer move requests.
pub trait Strategy {
    /// Chooses the move to play for `color` in `state`.
    ///
    /// Must not depend on anything but its arguments: the same snapshot and color always give
    /// the same move.
    fn select_move(&self, state: &GameState, color: PlayerColor) -> Move;
}

/// Advances to the nearest carrot field not held by the opponent when it is affordable,
/// falls back otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarrotHopper;

impl Strategy for CarrotHopper {
    fn select_move(&self, state: &GameState, color: PlayerColor) -> Move {
        let us = state.player(color);
        let opponent = state.player(color.opponent());

        let Some(target) = next_carrot_field(&state.board, us, opponent) else {
            info!("no carrot field ahead of {}, falling back", us.index);
            return Move::FallBack;
        };
        trace!("we are at {}, next carrot field is at {target}", us.index);

        // fields are not guaranteed to be ordered, a target behind us is as good as none
        let distance = match target.checked_sub(us.index) {
            Some(distance) if distance > 0 => distance,
            _ => {
                info!("carrot field {target} is not ahead of {}, falling back", us.index);
                return Move::FallBack;
            }
        };

        let cost = advance_cost(distance);
        if cost > u64::from(us.carrots) {
            info!(
                cost,
                carrots = us.carrots,
                "not enough carrots to advance {distance}, falling back"
            );
            Move::FallBack
        } else {
            info!(cost, carrots = us.carrots, "advancing {distance} fields");
            Move::Advance { distance }
        }
    }
}

/// Index of the first carrot field strictly ahead of `us` (and before [`SCAN_LIMIT`]) that the
/// opponent is not standing on.
///
/// Fields are visited in board order, starting at position `us.index + 1`.
pub fn next_carrot_field(board: &Board, us: &Player, opponent: &Player) -> Option<usize> {
    board
        .fields
        .iter()
        .take(SCAN_LIMIT)
        .skip(us.index.saturating_add(1))
        .inspect(|field| trace!("{} : {}", field.index, field.field_type))
        .find(|field| field.field_type == FieldType::Carrot && field.index != opponent.index)
        .map(|field| field.index)
}

/// Carrots needed to move `distance` fields forward: `1 + 2 + ... + distance`.
pub fn advance_cost(distance: usize) -> u64 {
    let distance = distance as u64;
    distance * (distance + 1) / 2
}
