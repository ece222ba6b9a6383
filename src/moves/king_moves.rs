//! King attack table.

use crate::moves::board_geometry::{leaper_table, KING_OFFSETS};

pub const KING_ATTACKS: [u64; 64] = leaper_table(&KING_OFFSETS);

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}
