//! Attack and check queries.
//!
//! Attacks on a square are found in reverse: place each piece kind on the
//! target square and intersect its attack set with the attacker's pieces of
//! that kind.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.king_square(color)
}

/// Whether `color`'s king is attacked. A side without a king is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    attackers_to_square_with(game_state, square, attacker_color, game_state.occupancy_all()) != 0
}

/// Bitboard of `attacker_color` pieces attacking `square` on the current board.
#[inline]
pub fn attackers_to_square(game_state: &GameState, square: Square, attacker_color: Color) -> u64 {
    attackers_to_square_with(game_state, square, attacker_color, game_state.occupancy_all())
}

/// Attackers of `square` computed against an explicit occupancy, so callers
/// can ask "what if these squares were empty".
pub fn attackers_to_square_with(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
    occupancy: u64,
) -> u64 {
    let pieces = |piece| game_state.pieces(attacker_color, piece);

    let queens = pieces(PieceKind::Queen);

    (pawn_attacks(attacker_color.opposite(), square) & pieces(PieceKind::Pawn))
        | (knight_attacks(square) & pieces(PieceKind::Knight))
        | (king_attacks(square) & pieces(PieceKind::King))
        | (bishop_attacks(square, occupancy) & (pieces(PieceKind::Bishop) | queens))
        | (rook_attacks(square, occupancy) & (pieces(PieceKind::Rook) | queens))
}
