//! Zobrist hashing for position identity.
//!
//! Keys come from a fixed-seed generator so hashes are identical across runs.
//! The board keeps its key up to date incrementally; `compute_zobrist_key`
//! rebuilds it from scratch and is the reference the incremental path must
//! agree with.

use std::sync::OnceLock;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::{chess_types::*, game_state::GameState};

const ZOBRIST_SEED: u64 = 416_587;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for key in piece {
                *key = rng.random();
            }
        }
    }

    let side_to_move = rng.random();

    // Index 0 (no rights) contributes nothing so an empty rights set hashes neutrally.
    let mut castling = [0u64; 16];
    for key in castling.iter_mut().skip(1) {
        *key = rng.random();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
pub fn piece_square_key(color: Color, piece: PieceKind, square: Square) -> u64 {
    tables().piece_square[color.index()][piece.index()][square as usize]
}

#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    tables().castling[(castling_rights & CASTLE_ALL) as usize]
}

#[inline]
pub fn en_passant_key(square: Option<Square>) -> u64 {
    match square {
        Some(square) => tables().en_passant_file[file_of(square) as usize],
        None => 0,
    }
}

/// Xor in when dark is to move.
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Compute the full position key from the complete game state.
pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    let mut key = 0u64;

    for square in 0..64u8 {
        if let Some((color, piece)) = game_state.piece_on(square) {
            key ^= piece_square_key(color, piece, square);
        }
    }

    if game_state.side_to_move() == Color::Dark {
        key ^= side_to_move_key();
    }

    key ^= castling_key(game_state.castling_rights());
    key ^= en_passant_key(game_state.en_passant_square());

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn side_to_move_changes_key() {
        let light = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("fen should parse");
        let dark = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("fen should parse");
        assert_eq!(
            compute_zobrist_key(&light) ^ compute_zobrist_key(&dark),
            side_to_move_key()
        );
    }

    #[test]
    fn parsed_state_carries_reference_key() {
        let game = GameState::new_game();
        assert_eq!(game.zobrist_key(), compute_zobrist_key(&game));
        assert_ne!(game.zobrist_key(), 0);
    }
}
