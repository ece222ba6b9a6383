//! Bishop move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_moves_for_kind;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    push_moves_for_kind(game_state, PieceKind::Bishop, bishop_attacks, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;

    #[test]
    fn bishop_stops_on_capture() {
        let game = GameState::from_fen("4k3/8/8/3p4/8/1B6/8/4K3 w - - 0 1").expect("fen should parse");
        let mut out = Vec::new();
        generate_bishop_moves(&game, &mut out);

        // b3: a2, c2, d1, a4, c4, d5 (capture).
        assert_eq!(out.len(), 6);
        let capture = out.iter().find(|mv| mv.is_capture()).expect("d5 capture");
        assert_eq!(capture.to(), 35);
        assert_eq!(capture.captured_piece(), Some(PieceKind::Pawn));
    }
}
