//! King move generation including castling candidates.
//!
//! Castling is emitted only when the right is held, king and rook stand on
//! their home squares, the squares between them are empty, and neither the
//! king's square nor the square it crosses is attacked. Whether the
//! destination is attacked is left to the legality filter.

use crate::game_state::chess_rules::{CastlingPath, CASTLING_PATHS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_piece_moves;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let Some(from) = game_state.king_square(side) else {
        return;
    };

    let targets = king_attacks(from) & !game_state.occupancy(side);
    push_piece_moves(game_state, from, PieceKind::King, targets, out);

    generate_castling_moves(game_state, out, from);
}

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>, king_from: Square) {
    let side = game_state.side_to_move();
    if game_state.castling_rights() & CASTLE_ALL == 0 {
        return;
    }

    let mut king_is_safe = None;
    for path in CASTLING_PATHS.iter().filter(|path| path.color == side) {
        if !castling_path_is_open(game_state, path, king_from) {
            continue;
        }

        let enemy = side.opposite();
        let safe = *king_is_safe.get_or_insert_with(|| !is_square_attacked(game_state, king_from, enemy));
        if !safe {
            return;
        }

        if !is_square_attacked(game_state, path.transit, enemy) {
            out.push(Move::castle(path.king_from, path.king_to, path.kingside));
        }
    }
}

#[inline]
fn castling_path_is_open(game_state: &GameState, path: &CastlingPath, king_from: Square) -> bool {
    game_state.castling_rights() & path.right != 0
        && king_from == path.king_from
        && game_state.pieces(path.color, PieceKind::Rook) & square_bit(path.rook_from) != 0
        && game_state.occupancy_all() & path.empty_mask == 0
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{Move, MoveKind};

    fn castles(fen: &str) -> Vec<MoveKind> {
        let game = GameState::from_fen(fen).expect("fen should parse");
        let mut out = Vec::new();
        generate_king_moves(&game, &mut out);
        out.iter().filter(|mv| mv.is_castle()).map(Move::kind).collect()
    }

    #[test]
    fn both_sides_available_when_clear() {
        let kinds = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(kinds, vec![MoveKind::CastleKingside, MoveKind::CastleQueenside]);

        let kinds = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(kinds, vec![MoveKind::CastleKingside, MoveKind::CastleQueenside]);
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").len() == 2);
        assert!(castles("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1").is_empty());
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // f1 attacked by the f8 rook: kingside gone, queenside kept.
        let kinds = castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(kinds, vec![MoveKind::CastleQueenside]);
    }

    #[test]
    fn attacked_b_file_square_does_not_block_queenside() {
        // Only the king's path (d1, c1) matters, b1 may be attacked.
        let kinds = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(kinds, vec![MoveKind::CastleQueenside]);
    }

    #[test]
    fn occupied_path_or_missing_rook_blocks_castling() {
        assert!(castles("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").is_empty());
    }
}
