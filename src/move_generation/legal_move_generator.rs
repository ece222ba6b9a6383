//! Full legal move generation pipeline.
//!
//! Runs the piece-wise pseudo-legal generators, then keeps a candidate only if
//! making it leaves the mover's own king unattacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};
use crate::moves::move_descriptions::Move;

type PieceMoveGenerator = fn(&GameState, &mut Vec<Move>);

/// Indexed by `PieceKind::index()`.
const PSEUDO_LEGAL_GENERATORS: [PieceMoveGenerator; 6] = [
    generate_pawn_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_rook_moves,
    generate_queen_moves,
    generate_king_moves,
];

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveGenResult<Vec<Move>> {
        let pseudo = generate_pseudo_legal_moves(game_state);
        let mover = game_state.side_to_move();

        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            if mv.captured_piece() == Some(PieceKind::King) {
                return Err(MoveGenerationError::InvalidState(format!(
                    "{mv} captures a king in {}",
                    game_state.get_fen()
                )));
            }

            let undo = make_move(game_state, mv);
            let leaves_king_attacked = is_king_in_check(game_state, mover);
            unmake_move(game_state, mv, undo);

            if !leaves_king_attacked {
                legal.push(mv);
            }
        }

        Ok(legal)
    }
}

/// Every move obeying piece movement rules, ignoring whether the mover's king
/// is left attacked. Castling candidates already satisfy their own
/// occupancy and attacked-square conditions.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(128);
    for generate in PSEUDO_LEGAL_GENERATORS {
        generate(game_state, &mut pseudo);
    }
    pseudo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::MoveKind;

    fn legal(fen: &str) -> Vec<Move> {
        let mut game = GameState::from_fen(fen).expect("fen should parse");
        let before = game.clone();
        let moves = LegalMoveGenerator
            .generate_legal_moves(&mut game)
            .expect("generation should succeed");
        assert_eq!(game, before, "generation must leave the state untouched");
        moves
    }

    #[test]
    fn start_position_has_twenty_moves() {
        assert_eq!(legal("").len(), 20);
    }

    #[test]
    fn position_four_has_six_replies() {
        let moves = legal("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1");
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn en_passant_exposing_king_along_rank_is_rejected() {
        let moves = legal("8/8/8/KPp4r/8/8/8/7k w - c6 0 2");
        assert!(moves.iter().all(|mv| mv.kind() != MoveKind::EnPassant));
    }

    #[test]
    fn castling_into_check_is_rejected() {
        // g1 is covered by the g8 rook.
        let moves = legal("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(moves.iter().all(|mv| !mv.is_castle()));
    }

    #[test]
    fn pinned_piece_stays_on_the_pin_line() {
        // The e2 rook is pinned by the e8 rook and may only move along the e-file.
        let moves = legal("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let rook_moves: Vec<_> = moves
            .iter()
            .filter(|mv| mv.moved_piece() == PieceKind::Rook)
            .collect();
        assert_eq!(rook_moves.len(), 6);
        assert!(rook_moves.iter().all(|mv| file_of(mv.to()) == 4));
    }

    #[test]
    fn checkmated_side_has_no_moves() {
        assert!(legal("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").is_empty());
    }

    #[test]
    fn king_capture_is_reported_as_invalid_state() {
        // Side to move can take the enemy king, which no legal game reaches.
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2r b - - 0 1").expect("fen");
        let result = LegalMoveGenerator.generate_legal_moves(&mut game);
        assert!(matches!(result, Err(MoveGenerationError::InvalidState(_))));
    }
}
