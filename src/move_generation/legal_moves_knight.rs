//! Knight move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_moves_for_kind;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    push_moves_for_kind(game_state, PieceKind::Knight, |from, _| knight_attacks(from), out);
}
