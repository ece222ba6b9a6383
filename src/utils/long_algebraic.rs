//! UCI-style long algebraic move text (`e2e4`, `e7e8q`, castling as `e1g1`).

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

#[inline]
pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

/// Resolve `long_algebraic` against the legal moves of `game_state`.
///
/// Fails when the text is malformed or names no legal move.
pub fn long_algebraic_to_move(game_state: &mut GameState, long_algebraic: &str) -> Result<Move, String> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text.as_bytes().get(4) {
        Some(&letter) => Some(char_to_promotion(char::from(letter))?),
        None => None,
    };

    let legal = LegalMoveGenerator
        .generate_legal_moves(game_state)
        .map_err(|err| err.to_string())?;

    legal
        .into_iter()
        .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_piece() == promotion)
        .ok_or_else(|| format!("Illegal move in {}: {text}", game_state.get_fen()))
}

fn char_to_promotion(ch: char) -> Result<PieceKind, String> {
    match PieceKind::from_letter(ch.to_ascii_lowercase()) {
        Some(piece @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
            Ok(piece)
        }
        _ => Err(format!("Invalid promotion piece character: {ch}")),
    }
}
