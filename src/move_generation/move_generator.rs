use std::error::Error;
use std::fmt;

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

/// Internal invariant violation found while searching. Never caused by
/// caller input that passed the parser; seeing one means the position was
/// impossible or the generator is broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// Source of strictly legal moves for the side to move.
///
/// The state is borrowed mutably so implementations can test candidates with
/// make/unmake; it must be left exactly as it was received.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveGenResult<Vec<Move>>;
}
