//! Pawn capture tables, one per color.
//!
//! `pawn_attacks(color, sq)` is the set of squares a `color` pawn on `sq`
//! attacks. Read in reverse, `pawn_attacks(color.opposite(), sq)` is the set
//! of squares from which a `color` pawn would attack `sq`.

use crate::game_state::chess_types::Color;
use crate::moves::board_geometry::leaper_table;

pub const LIGHT_PAWN_ATTACKS: [u64; 64] = leaper_table(&[(-1, 1), (1, 1)]);
pub const DARK_PAWN_ATTACKS: [u64; 64] = leaper_table(&[(-1, -1), (1, -1)]);

#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

/// Square one step forward for `color`, if it is on the board.
#[inline]
pub const fn pawn_push_square(color: Color, square: u8) -> Option<u8> {
    match color {
        Color::Light if square < 56 => Some(square + 8),
        Color::Dark if square >= 8 => Some(square - 8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, pawn_push_square};
    use crate::game_state::chess_types::Color;

    #[test]
    fn light_pawn_attacks_from_e2() {
        assert_eq!(pawn_attacks(Color::Light, 12), (1u64 << 19) | (1u64 << 21));
    }

    #[test]
    fn dark_pawn_attacks_from_e7() {
        assert_eq!(pawn_attacks(Color::Dark, 52), (1u64 << 43) | (1u64 << 45));
    }

    #[test]
    fn edge_pawns_attack_one_square() {
        assert_eq!(pawn_attacks(Color::Light, 8), 1u64 << 17);
        assert_eq!(pawn_attacks(Color::Dark, 55), 1u64 << 46);
    }

    #[test]
    fn pushes_stop_at_board_edge() {
        assert_eq!(pawn_push_square(Color::Light, 12), Some(20));
        assert_eq!(pawn_push_square(Color::Dark, 52), Some(44));
        assert_eq!(pawn_push_square(Color::Light, 60), None);
        assert_eq!(pawn_push_square(Color::Dark, 3), None);
    }
}
