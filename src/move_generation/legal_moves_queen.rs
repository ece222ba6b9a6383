//! Queen move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_moves_for_kind;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<Move>) {
    push_moves_for_kind(game_state, PieceKind::Queen, queen_attacks, out);
}
