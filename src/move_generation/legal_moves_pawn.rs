//! Pseudo-legal pawn move generation: pushes, double pushes, captures,
//! promotions (all four pieces) and en passant onto the recorded target.

use crate::game_state::chess_rules::{pawn_start_rank, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{enemy_piece_on, squares_of, PROMOTION_PIECES};
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::{pawn_attacks, pawn_push_square};

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let enemy_occ = game_state.occupancy(side.opposite());
    let empty = !game_state.occupancy_all();
    let en_passant_mask = game_state.en_passant_square().map_or(0, square_bit);

    for from in squares_of(game_state.pieces(side, PieceKind::Pawn)) {
        if let Some(to) = pawn_push_square(side, from) {
            if square_bit(to) & empty != 0 {
                push_pawn_move(from, to, None, side, out);

                if rank_of(from) == pawn_start_rank(side) {
                    if let Some(two_step) = pawn_push_square(side, to) {
                        if square_bit(two_step) & empty != 0 {
                            out.push(Move::double_pawn_push(from, two_step));
                        }
                    }
                }
            }
        }

        let attacks = pawn_attacks(side, from);
        for to in squares_of(attacks & enemy_occ) {
            push_pawn_move(from, to, enemy_piece_on(game_state, to), side, out);
        }
        if attacks & en_passant_mask != 0 {
            out.push(Move::en_passant(from, en_passant_mask.trailing_zeros() as Square));
        }
    }
}

#[inline]
fn push_pawn_move(
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    side: Color,
    out: &mut Vec<Move>,
) {
    if rank_of(to) == promotion_rank(side) {
        for promo in PROMOTION_PIECES {
            out.push(Move::promotion(from, to, captured, promo));
        }
    } else {
        out.push(Move::normal(from, to, PieceKind::Pawn, captured));
    }
}
