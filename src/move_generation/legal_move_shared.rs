use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

pub const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<PieceKind> {
    match game_state.piece_on(square) {
        Some((color, piece)) if color != game_state.side_to_move() => Some(piece),
        _ => None,
    }
}

/// Iterate the squares of a bitboard, lowest first.
#[inline]
pub fn squares_of(mut bitboard: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if bitboard == 0 {
            return None;
        }
        let square = bitboard.trailing_zeros() as Square;
        bitboard &= bitboard - 1;
        Some(square)
    })
}

/// Emit one move per target square for a non-pawn piece. `targets` must
/// already exclude squares held by the mover's own pieces.
#[inline]
pub fn push_piece_moves(
    game_state: &GameState,
    from: Square,
    piece: PieceKind,
    targets: u64,
    out: &mut Vec<Move>,
) {
    for to in squares_of(targets) {
        out.push(Move::normal(from, to, piece, enemy_piece_on(game_state, to)));
    }
}

/// Emit moves for every piece of `piece` kind using its attack function.
#[inline]
pub fn push_moves_for_kind(
    game_state: &GameState,
    piece: PieceKind,
    attacks: impl Fn(Square, u64) -> u64,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move();
    let own_occ = game_state.occupancy(side);
    let occupancy = game_state.occupancy_all();

    for from in squares_of(game_state.pieces(side, piece)) {
        push_piece_moves(game_state, from, piece, attacks(from, occupancy) & !own_occ, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_of_walks_bits_in_order() {
        let squares: Vec<Square> = squares_of((1 << 3) | (1 << 17) | (1 << 63)).collect();
        assert_eq!(squares, vec![3, 17, 63]);
        assert_eq!(squares_of(0).count(), 0);
    }

    #[test]
    fn enemy_lookup_ignores_own_pieces() {
        let game = GameState::new_game();
        assert_eq!(enemy_piece_on(&game, 60), Some(PieceKind::King));
        assert_eq!(enemy_piece_on(&game, 4), None);
        assert_eq!(enemy_piece_on(&game, 28), None);
    }
}
