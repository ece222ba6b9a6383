//! Knight attack table.

use crate::moves::board_geometry::{leaper_table, KNIGHT_OFFSETS};

pub const KNIGHT_ATTACKS: [u64; 64] = leaper_table(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[cfg(test)]
mod tests {
    use super::knight_attacks;

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        assert_eq!(knight_attacks(27).count_ones(), 8);
    }

    #[test]
    fn knight_in_corner_does_not_wrap() {
        // a1 reaches b3 and c2 only.
        assert_eq!(knight_attacks(0), (1u64 << 17) | (1u64 << 10));
        // h1 reaches g3 and f2 only.
        assert_eq!(knight_attacks(7), (1u64 << 22) | (1u64 << 13));
    }
}
