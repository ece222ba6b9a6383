//! In-place make/unmake.
//!
//! `make_move` mutates the state and hands back an `UndoState`; feeding that
//! record to `unmake_move` with the same move restores every field exactly,
//! Zobrist key included.

use crate::game_state::chess_rules::{castling_path_for, CASTLING_RIGHTS_MASK};
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn make_move(game_state: &mut GameState, mv: Move) -> UndoState {
    let mover = game_state.side_to_move();
    let enemy = mover.opposite();
    let from = mv.from();
    let to = mv.to();

    let mut undo = UndoState {
        captured: None,
        prev_castling_rights: game_state.castling_rights(),
        prev_en_passant_square: game_state.en_passant_square(),
        prev_halfmove_clock: game_state.halfmove_clock(),
        prev_zobrist_key: game_state.zobrist_key(),
    };

    if let Some(captured) = mv.captured_piece() {
        debug_assert_ne!(captured, PieceKind::King, "move {mv} captures a king");
        let square = mv.capture_square();
        game_state.remove_piece(enemy, captured, square);
        undo.captured = Some((captured, square));
    }

    match mv.promotion_piece() {
        Some(promo) => {
            game_state.remove_piece(mover, PieceKind::Pawn, from);
            game_state.put_piece(mover, promo, to);
        }
        None => game_state.relocate_piece(mover, mv.moved_piece(), from, to),
    }

    if mv.is_castle() {
        if let Some(path) = castling_path_for(from, to) {
            game_state.relocate_piece(mover, PieceKind::Rook, path.rook_from, path.rook_to);
        }
    }

    let rights = game_state.castling_rights()
        & CASTLING_RIGHTS_MASK[from as usize]
        & CASTLING_RIGHTS_MASK[to as usize];
    if rights != game_state.castling_rights() {
        game_state.set_castling_rights(rights);
    }

    let en_passant = match mv.kind() {
        MoveKind::DoublePawnPush => Some((from + to) / 2),
        _ => None,
    };
    game_state.set_en_passant_square(en_passant);

    game_state.halfmove_clock = if mv.moved_piece() == PieceKind::Pawn || mv.is_capture() {
        0
    } else {
        game_state.halfmove_clock.wrapping_add(1)
    };
    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.wrapping_add(1);
    }

    game_state.flip_side_to_move();
    undo
}

pub fn unmake_move(game_state: &mut GameState, mv: Move, undo: UndoState) {
    game_state.flip_side_to_move();
    let mover = game_state.side_to_move();
    let from = mv.from();
    let to = mv.to();

    if mv.is_castle() {
        if let Some(path) = castling_path_for(from, to) {
            game_state.relocate_piece(mover, PieceKind::Rook, path.rook_to, path.rook_from);
        }
    }

    match mv.promotion_piece() {
        Some(promo) => {
            game_state.remove_piece(mover, promo, to);
            game_state.put_piece(mover, PieceKind::Pawn, from);
        }
        None => game_state.relocate_piece(mover, mv.moved_piece(), to, from),
    }

    if let Some((captured, square)) = undo.captured {
        game_state.put_piece(mover.opposite(), captured, square);
    }

    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.wrapping_sub(1);
    }
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.zobrist_key = undo.prev_zobrist_key;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::zobrist::compute_zobrist_key;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;

    const POSITIONS: [&str; 4] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ];

    fn apply_move(game_state: &GameState, mv: Move) -> GameState {
        let mut next = game_state.clone();
        make_move(&mut next, mv);
        next
    }

    fn walk(game_state: &mut GameState, depth: u32) {
        if depth == 0 {
            return;
        }
        let moves = LegalMoveGenerator
            .generate_legal_moves(game_state)
            .expect("generation should succeed");
        for mv in moves {
            let before = game_state.clone();
            let undo = make_move(game_state, mv);
            assert_eq!(
                game_state.zobrist_key(),
                compute_zobrist_key(game_state),
                "incremental key drifted after {mv} from {}",
                before.get_fen()
            );
            walk(game_state, depth - 1);
            unmake_move(game_state, mv, undo);
            assert_eq!(*game_state, before, "unmake of {mv} did not restore the state");
        }
    }

    #[test]
    fn make_unmake_restores_every_reachable_position() {
        for fen in POSITIONS {
            let mut game = GameState::from_fen(fen).expect("fen should parse");
            walk(&mut game, 2);
        }
    }

    #[test]
    fn castling_moves_the_rook_and_drops_rights() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").expect("fen");
        let undo = make_move(&mut game, Move::castle(4, 6, true));
        assert_eq!(game.get_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 10");

        let mut restored = game.clone();
        unmake_move(&mut restored, Move::castle(4, 6, true), undo);
        assert_eq!(restored.get_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10");
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("fen");
        let next = apply_move(&game, Move::en_passant(36, 43));
        assert_eq!(next.get_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 2");
    }

    #[test]
    fn double_push_records_target_and_dark_move_bumps_fullmove() {
        let game = GameState::from_fen("4k3/3p4/8/8/8/8/8/4K3 b - - 5 7").expect("fen");
        let next = apply_move(&game, Move::double_pawn_push(51, 35));
        assert_eq!(next.get_fen(), "4k3/8/8/3p4/8/8/8/4K3 w - d6 0 8");
    }

    #[test]
    fn capturing_a_home_rook_revokes_its_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2B w KQkq - 0 1")
            .expect("fen");
        // Bh1xa8 along the long diagonal.
        let next = apply_move(&game, Move::normal(7, 56, PieceKind::Bishop, Some(PieceKind::Rook)));
        assert_eq!(next.castling_rights(), CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE);
    }
}
