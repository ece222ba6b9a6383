//! Rook move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_moves_for_kind;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    push_moves_for_kind(game_state, PieceKind::Rook, rook_attacks, out);
}
