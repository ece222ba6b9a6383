//! Canonical chess-rule constants.
//!
//! Stores the standard starting position, the geometry of the four castling
//! moves, and the per-square masks that revoke castling rights when a king or
//! rook leaves (or is captured on) its home square.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    pub color: Color,
    pub right: CastlingRights,
    pub kingside: bool,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub empty_mask: u64,
    /// Square the king crosses; the destination is verified by the legality filter.
    pub transit: Square,
}

pub const CASTLING_PATHS: [CastlingPath; 4] = [
    CastlingPath {
        color: Color::Light,
        right: CASTLE_LIGHT_KINGSIDE,
        kingside: true,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        empty_mask: square_bit(5) | square_bit(6),
        transit: 5,
    },
    CastlingPath {
        color: Color::Light,
        right: CASTLE_LIGHT_QUEENSIDE,
        kingside: false,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        empty_mask: square_bit(1) | square_bit(2) | square_bit(3),
        transit: 3,
    },
    CastlingPath {
        color: Color::Dark,
        right: CASTLE_DARK_KINGSIDE,
        kingside: true,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        empty_mask: square_bit(61) | square_bit(62),
        transit: 61,
    },
    CastlingPath {
        color: Color::Dark,
        right: CASTLE_DARK_QUEENSIDE,
        kingside: false,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        empty_mask: square_bit(57) | square_bit(58) | square_bit(59),
        transit: 59,
    },
];

/// Find the castling path a king move from `from` to `to` corresponds to.
#[inline]
pub fn castling_path_for(from: Square, to: Square) -> Option<&'static CastlingPath> {
    CASTLING_PATHS
        .iter()
        .find(|path| path.king_from == from && path.king_to == to)
}

/// Rights that survive a move touching each square. `rights &= mask[from] & mask[to]`.
pub const CASTLING_RIGHTS_MASK: [CastlingRights; 64] = build_castling_rights_mask();

const fn build_castling_rights_mask() -> [CastlingRights; 64] {
    let mut table = [CASTLE_ALL; 64];

    table[0] = CASTLE_ALL & !CASTLE_LIGHT_QUEENSIDE;
    table[4] = CASTLE_ALL & !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE);
    table[7] = CASTLE_ALL & !CASTLE_LIGHT_KINGSIDE;
    table[56] = CASTLE_ALL & !CASTLE_DARK_QUEENSIDE;
    table[60] = CASTLE_ALL & !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
    table[63] = CASTLE_ALL & !CASTLE_DARK_KINGSIDE;

    table
}

#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_move_revokes_both_rights_of_its_color() {
        let remaining = CASTLE_ALL & CASTLING_RIGHTS_MASK[4] & CASTLING_RIGHTS_MASK[5];
        assert_eq!(remaining, CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
    }

    #[test]
    fn capture_on_rook_home_revokes_that_right() {
        let remaining = CASTLE_ALL & CASTLING_RIGHTS_MASK[49] & CASTLING_RIGHTS_MASK[56];
        assert_eq!(remaining, CASTLE_ALL & !CASTLE_DARK_QUEENSIDE);
    }

    #[test]
    fn castling_paths_resolve_from_king_squares() {
        let path = castling_path_for(60, 58).expect("dark queenside path");
        assert_eq!(path.rook_from, 56);
        assert_eq!(path.rook_to, 59);
        assert!(castling_path_for(4, 5).is_none());
    }
}
